/// price a solar package and split the GST on the final invoice amount
use emi_solver_rs::{
    estimate_package, gst_breakdown, CustomerType, GstComponents, GstMode, InverterPhase,
    PackageInputs, Rate, SupplyType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 5 kWp rooftop system for a residential customer
    let package = estimate_package(&PackageInputs::new(
        dec!(5),
        CustomerType::Residential,
        InverterPhase::SinglePhase,
    ))?;

    println!("subtotal:       {}", package.subtotal);
    println!("with margin:    {}", package.final_price);
    println!("with 5% GST:    {}", package.final_price_with_gst);

    // split the GST already included in the invoice total
    let breakdown = gst_breakdown(
        package.final_price_with_gst,
        Rate::from_percentage(dec!(5)),
        GstMode::Inclusive,
        SupplyType::IntraState,
    )?;

    println!("taxable value:  {}", breakdown.base_amount.round_dp(2));
    if let GstComponents::IntraState { cgst, sgst } = breakdown.components {
        println!("CGST:           {}", cgst.round_dp(2));
        println!("SGST:           {}", sgst.round_dp(2));
    }

    Ok(())
}

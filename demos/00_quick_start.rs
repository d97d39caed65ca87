/// quick start - solve the EMI for a known principal, rate and tenure
use emi_solver_rs::{solve, AmortizationMethod, LoanInputs, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10 lakh home improvement loan at 10% over 5 years
    let inputs = LoanInputs::solve_installment(
        Money::from_major(1_000_000),
        Rate::from_percentage(dec!(10)),
        60,
        AmortizationMethod::Reducing,
    );

    let result = solve(&inputs)?;

    println!("monthly EMI:    {}", result.installment.round_dp(2));
    println!("total payment:  {}", result.total_payment.round_dp(2));
    println!("total interest: {}", result.total_interest.round_dp(2));

    // first few schedule rows
    for row in result.schedule.rows.iter().take(3) {
        println!(
            "  period {:>2}: principal {} interest {} balance {}",
            row.period,
            row.principal_paid.round_dp(2),
            row.interest_paid.round_dp(2),
            row.remaining_balance.round_dp(2),
        );
    }

    Ok(())
}

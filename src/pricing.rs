use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolveError};

/// customer segment; decides panel pricing (DCR vs NDCR panels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Residential,
    Commercial,
}

/// inverter phase; decides the per-kWp inverter rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InverterPhase {
    SinglePhase,
    ThreePhase,
}

/// inputs for a package estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageInputs {
    /// system size in kWp
    pub capacity_kw: Decimal,
    pub customer_type: CustomerType,
    pub inverter_phase: InverterPhase,
    pub profit_margin: Rate,
    pub gst_rate: Rate,
}

impl PackageInputs {
    /// estimate with the standard 20% margin and 5% GST
    pub fn new(
        capacity_kw: Decimal,
        customer_type: CustomerType,
        inverter_phase: InverterPhase,
    ) -> Self {
        Self {
            capacity_kw,
            customer_type,
            inverter_phase,
            profit_margin: Rate::from_percentage(dec!(20)),
            gst_rate: Rate::from_percentage(dec!(5)),
        }
    }
}

/// itemized package price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageEstimate {
    pub solar_panels: Money,
    pub inverter: Money,
    pub structure: Money,
    pub balance_of_system: Money,
    pub installation: Money,
    pub civil_work: Money,
    pub net_metering: Money,
    pub wiring: Money,
    pub transportation: Money,
    pub subtotal: Money,
    pub profit_margin: Money,
    pub final_price: Money,
    pub gst_amount: Money,
    pub final_price_with_gst: Money,
}

// rate card, rupees per watt unless noted
const PANEL_RATE_RESIDENTIAL: Decimal = dec!(27);
const PANEL_RATE_COMMERCIAL: Decimal = dec!(18);
const INVERTER_RATE_SINGLE_PHASE_PER_KWP: Decimal = dec!(6000);
const INVERTER_RATE_THREE_PHASE_PER_KWP: Decimal = dec!(2500);
const STRUCTURE_RATE: Decimal = dec!(4.5);
const BOS_RATE: Decimal = dec!(2);
const INSTALLATION_RATE: Decimal = dec!(4);
const CIVIL_WORK_RATE: Decimal = dec!(1.2);
const WIRING_RATE: Decimal = dec!(5);
const NET_METERING_FLAT: Decimal = dec!(6600);
const TRANSPORTATION_FLAT: Decimal = dec!(5000);

/// itemize a solar package price for the given capacity
pub fn estimate_package(inputs: &PackageInputs) -> Result<PackageEstimate> {
    if inputs.capacity_kw <= Decimal::ZERO {
        return Err(SolveError::InvalidInput {
            message: "capacity must be positive".to_string(),
        });
    }

    let capacity_watts = inputs.capacity_kw * Decimal::from(1000);

    let panel_rate = match inputs.customer_type {
        CustomerType::Residential => PANEL_RATE_RESIDENTIAL,
        CustomerType::Commercial => PANEL_RATE_COMMERCIAL,
    };
    let inverter_rate = match inputs.inverter_phase {
        InverterPhase::SinglePhase => INVERTER_RATE_SINGLE_PHASE_PER_KWP,
        InverterPhase::ThreePhase => INVERTER_RATE_THREE_PHASE_PER_KWP,
    };

    let solar_panels = Money::from_decimal(panel_rate * capacity_watts);
    let inverter = Money::from_decimal(inverter_rate * inputs.capacity_kw);
    let structure = Money::from_decimal(STRUCTURE_RATE * capacity_watts);
    let balance_of_system = Money::from_decimal(BOS_RATE * capacity_watts);
    let installation = Money::from_decimal(INSTALLATION_RATE * capacity_watts);
    let civil_work = Money::from_decimal(CIVIL_WORK_RATE * capacity_watts);
    let net_metering = Money::from_decimal(NET_METERING_FLAT);
    let wiring = Money::from_decimal(WIRING_RATE * capacity_watts);
    let transportation = Money::from_decimal(TRANSPORTATION_FLAT);

    let subtotal = solar_panels
        + inverter
        + structure
        + balance_of_system
        + installation
        + civil_work
        + net_metering
        + wiring
        + transportation;

    let profit_margin = subtotal * inputs.profit_margin.as_decimal();
    let final_price = subtotal + profit_margin;
    let gst_amount = final_price * inputs.gst_rate.as_decimal();
    let final_price_with_gst = final_price + gst_amount;

    Ok(PackageEstimate {
        solar_panels,
        inverter,
        structure,
        balance_of_system,
        installation,
        civil_work,
        net_metering,
        wiring,
        transportation,
        subtotal,
        profit_margin,
        final_price,
        gst_amount,
        final_price_with_gst,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residential_five_kw_fixture() {
        let inputs = PackageInputs::new(
            dec!(5),
            CustomerType::Residential,
            InverterPhase::SinglePhase,
        );
        let estimate = estimate_package(&inputs).unwrap();

        assert_eq!(estimate.solar_panels, Money::from_major(135_000));
        assert_eq!(estimate.inverter, Money::from_major(30_000));
        assert_eq!(estimate.structure, Money::from_major(22_500));
        assert_eq!(estimate.balance_of_system, Money::from_major(10_000));
        assert_eq!(estimate.installation, Money::from_major(20_000));
        assert_eq!(estimate.civil_work, Money::from_major(6_000));
        assert_eq!(estimate.net_metering, Money::from_major(6_600));
        assert_eq!(estimate.wiring, Money::from_major(25_000));
        assert_eq!(estimate.transportation, Money::from_major(5_000));
        assert_eq!(estimate.subtotal, Money::from_major(260_100));
        assert_eq!(estimate.profit_margin, Money::from_major(52_020));
        assert_eq!(estimate.final_price, Money::from_major(312_120));
        assert_eq!(estimate.gst_amount, Money::from_major(15_606));
        assert_eq!(estimate.final_price_with_gst, Money::from_major(327_726));
    }

    #[test]
    fn test_commercial_rates_are_lower_per_watt() {
        let residential = estimate_package(&PackageInputs::new(
            dec!(10),
            CustomerType::Residential,
            InverterPhase::ThreePhase,
        ))
        .unwrap();
        let commercial = estimate_package(&PackageInputs::new(
            dec!(10),
            CustomerType::Commercial,
            InverterPhase::ThreePhase,
        ))
        .unwrap();

        assert!(commercial.solar_panels < residential.solar_panels);
        assert_eq!(commercial.inverter, residential.inverter);
    }

    #[test]
    fn test_custom_margin_and_gst() {
        let mut inputs = PackageInputs::new(
            dec!(5),
            CustomerType::Residential,
            InverterPhase::SinglePhase,
        );
        inputs.profit_margin = Rate::from_percentage(dec!(10));
        inputs.gst_rate = Rate::from_percentage(dec!(12));

        let estimate = estimate_package(&inputs).unwrap();
        assert_eq!(estimate.profit_margin, Money::from_major(26_010));
        assert_eq!(estimate.final_price, Money::from_major(286_110));
        assert_eq!(estimate.gst_amount, Money::from_decimal(dec!(34333.2)));
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let inputs = PackageInputs::new(
            Decimal::ZERO,
            CustomerType::Residential,
            InverterPhase::SinglePhase,
        );
        assert!(matches!(
            estimate_package(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }
}

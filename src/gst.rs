use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolveError};

/// whether GST is added on top of a base amount or extracted from an
/// inclusive total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstMode {
    /// the given amount is the base; add GST on top
    Exclusive,
    /// the given amount already includes GST; back out the base
    Inclusive,
}

/// place of supply, which decides how the tax splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplyType {
    /// within one state: the tax splits evenly into CGST + SGST
    IntraState,
    /// across states: the whole tax is IGST
    InterState,
}

/// tax components by place of supply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GstComponents {
    IntraState { cgst: Money, sgst: Money },
    InterState { igst: Money },
}

/// base, tax and total for one taxable amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub base_amount: Money,
    pub gst_amount: Money,
    pub total_amount: Money,
    pub components: GstComponents,
}

/// split an amount into base, GST and total
pub fn gst_breakdown(
    amount: Money,
    rate: Rate,
    mode: GstMode,
    supply: SupplyType,
) -> Result<GstBreakdown> {
    if !amount.is_positive() {
        return Err(SolveError::InvalidInput {
            message: "amount must be positive".to_string(),
        });
    }
    if !rate.is_positive() {
        return Err(SolveError::InvalidInput {
            message: "GST rate must be positive".to_string(),
        });
    }

    let (base_amount, gst_amount, total_amount) = match mode {
        GstMode::Exclusive => {
            let base = amount;
            let gst = base * rate.as_decimal();
            (base, gst, base + gst)
        }
        GstMode::Inclusive => {
            let total = amount;
            let base = total / (Decimal::ONE + rate.as_decimal());
            (base, total - base, total)
        }
    };

    let components = match supply {
        SupplyType::IntraState => {
            let half = gst_amount / Decimal::from(2);
            GstComponents::IntraState {
                cgst: half,
                sgst: gst_amount - half,
            }
        }
        SupplyType::InterState => GstComponents::InterState { igst: gst_amount },
    };

    Ok(GstBreakdown {
        base_amount,
        gst_amount,
        total_amount,
        components,
    })
}

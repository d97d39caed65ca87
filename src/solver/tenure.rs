use rust_decimal::prelude::ToPrimitive;

use crate::errors::{Result, SolveError};
use crate::types::{AmortizationMethod, LoanInputs, LoanResult};

use super::build_result;

/// principal, rate and fixed installment known; find the tenure
///
/// Tenure always rounds up to the next whole period, so the loan is never
/// under-paid; the partial last period is absorbed by the schedule's final
/// balance clamp. Totals are recomputed from the rounded tenure.
pub(crate) fn solve(inputs: &LoanInputs) -> Result<LoanResult> {
    let tenure_months = match inputs.method {
        AmortizationMethod::Reducing => reducing_tenure(inputs)?,
        AmortizationMethod::Flat => flat_tenure(inputs)?,
    };

    Ok(build_result(
        inputs,
        inputs.fixed_installment,
        tenure_months,
        inputs.annual_rate,
    ))
}

/// closed form: n = ln(emi / (emi - P*r)) / ln(1 + r)
fn reducing_tenure(inputs: &LoanInputs) -> Result<u32> {
    let r = inputs.annual_rate.monthly_rate();
    let interest_only_floor = inputs.principal * r.as_decimal();

    // below the interest-only floor the balance never shrinks
    if inputs.fixed_installment <= interest_only_floor {
        return Err(SolveError::InstallmentTooLow {
            minimum: interest_only_floor,
            provided: inputs.fixed_installment,
        });
    }

    let emi = to_f64(inputs.fixed_installment.to_f64())?;
    let floor = to_f64(interest_only_floor.to_f64())?;
    let monthly = to_f64(r.to_f64())?;

    let exact = (emi / (emi - floor)).ln() / (1.0 + monthly).ln();
    if !exact.is_finite() || exact <= 0.0 {
        return Err(SolveError::DegenerateInput {
            message: "tenure computation produced a non-finite value".to_string(),
        });
    }

    // an `as` cast would silently saturate here; a near-zero rate with an
    // installment barely above the floor pushes the closed form past u32
    let rounded = exact.ceil();
    if rounded > u32::MAX as f64 {
        return Err(SolveError::DegenerateInput {
            message: "tenure computation overflowed".to_string(),
        });
    }

    Ok((rounded as u32).max(1))
}

/// n = P / (emi - P*r), with r the flat monthly rate
fn flat_tenure(inputs: &LoanInputs) -> Result<u32> {
    let r = inputs.annual_rate.monthly_rate();
    let monthly_interest = inputs.principal * r.as_decimal();
    let denominator = inputs.fixed_installment - monthly_interest;

    if !denominator.is_positive() {
        return Err(SolveError::InstallmentTooLow {
            minimum: monthly_interest,
            provided: inputs.fixed_installment,
        });
    }

    let exact = inputs.principal.as_decimal() / denominator.as_decimal();
    let tenure = exact.ceil().to_u32().ok_or_else(|| SolveError::DegenerateInput {
        message: "tenure computation overflowed".to_string(),
    })?;

    Ok(tenure.max(1))
}

fn to_f64(value: Option<f64>) -> Result<f64> {
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| SolveError::DegenerateInput {
            message: "value not representable as f64".to_string(),
        })
}

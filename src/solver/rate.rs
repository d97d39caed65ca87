use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{Result, SolveError};
use crate::types::{AmortizationMethod, LoanInputs, LoanResult};

use super::build_result;

/// Newton-Raphson starting point, 1% per month
const INITIAL_GUESS: f64 = 0.01;
/// reset value when an iterate goes non-positive (~1.2% annualized)
const MIN_MONTHLY_RATE: f64 = 0.001;
/// iterate ceiling (600% annualized); a tunable safety net, not a domain bound
const MAX_MONTHLY_RATE: f64 = 0.5;
/// convergence threshold for both the step size and the derivative magnitude
const TOLERANCE: f64 = 1e-10;
/// hard cap; together with the iterate clamps this bounds the search
/// unconditionally
const MAX_ITERATIONS: u32 = 100;

/// principal, tenure and fixed installment known; find the rate
pub(crate) fn solve(inputs: &LoanInputs) -> Result<LoanResult> {
    let total_paid = inputs.fixed_installment * Decimal::from(inputs.tenure_months);
    if total_paid < inputs.principal {
        return Err(SolveError::InstallmentTooLowForTenure {
            principal: inputs.principal,
            total_paid,
        });
    }

    let annual_rate = match inputs.method {
        AmortizationMethod::Reducing => reducing_rate(inputs)?,
        AmortizationMethod::Flat => flat_rate(inputs)?,
    };

    Ok(build_result(
        inputs,
        inputs.fixed_installment,
        inputs.tenure_months,
        annual_rate,
    ))
}

/// root of f(r) = P*r*(1+r)^n / ((1+r)^n - 1) - emi via Newton-Raphson
///
/// Stops on a flat derivative (keep the current estimate), a sub-tolerance
/// step (converged), a non-finite evaluation, or the iteration cap, whichever
/// comes first.
fn reducing_rate(inputs: &LoanInputs) -> Result<Rate> {
    let principal = to_f64(inputs.principal.to_f64())?;
    let emi = to_f64(inputs.fixed_installment.to_f64())?;
    let n = inputs.tenure_months as f64;
    let exponent = inputs.tenure_months as i32;

    let mut r = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let pow = (1.0 + r).powi(exponent);
        let f = principal * r * pow / (pow - 1.0) - emi;
        let df = principal * pow * (pow - 1.0 - n * r) / ((pow - 1.0) * (pow - 1.0));

        if !f.is_finite() || !df.is_finite() || df.abs() < TOLERANCE {
            break;
        }

        let next = r - f / df;
        if (next - r).abs() < TOLERANCE {
            r = next;
            break;
        }

        r = next;
        if r <= 0.0 {
            r = MIN_MONTHLY_RATE;
        }
        if r > MAX_MONTHLY_RATE {
            r = MAX_MONTHLY_RATE;
        }
    }

    // the converging step is taken unclamped; pull a non-positive final
    // estimate back onto the floor
    if r <= 0.0 {
        r = MIN_MONTHLY_RATE;
    }

    Rate::try_from_f64(r * 12.0).ok_or_else(|| SolveError::DegenerateInput {
        message: "solved rate not representable as decimal".to_string(),
    })
}

/// closed form: annual = (emi*n - P) * 12 / (P*n)
fn flat_rate(inputs: &LoanInputs) -> Result<Rate> {
    let principal = inputs.principal.as_decimal();
    let n = Decimal::from(inputs.tenure_months);
    let emi = inputs.fixed_installment.as_decimal();

    let annual = (emi * n - principal) * Decimal::from(12) / (principal * n);
    if annual.is_sign_negative() {
        return Err(SolveError::InstallmentExceedsRequirement);
    }

    Ok(Rate::from_decimal(annual))
}

fn to_f64(value: Option<f64>) -> Result<f64> {
    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| SolveError::DegenerateInput {
            message: "value not representable as f64".to_string(),
        })
}

use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::{Result, SolveError};
use crate::types::{AmortizationMethod, LoanInputs, LoanResult};

use super::build_result;

/// principal, rate and tenure known; find the installment
pub(crate) fn solve(inputs: &LoanInputs) -> Result<LoanResult> {
    let installment = match inputs.method {
        AmortizationMethod::Reducing => reducing_installment(inputs)?,
        AmortizationMethod::Flat => flat_installment(inputs),
    };

    Ok(build_result(
        inputs,
        installment,
        inputs.tenure_months,
        inputs.annual_rate,
    ))
}

/// standard annuity formula: EMI = P * r * (1+r)^n / ((1+r)^n - 1)
fn reducing_installment(inputs: &LoanInputs) -> Result<Money> {
    let r = inputs.annual_rate.monthly_rate().as_decimal();

    let factor = compound_factor(r, inputs.tenure_months).ok_or_else(|| {
        SolveError::DegenerateInput {
            message: "compound factor overflowed for the given rate and tenure".to_string(),
        }
    })?;

    let denominator = factor - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return Err(SolveError::DegenerateInput {
            message: "annuity denominator vanished".to_string(),
        });
    }

    let emi = inputs.principal.as_decimal() * r * factor / denominator;
    Ok(Money::from_decimal(emi))
}

/// flat rate: interest on the original principal, spread evenly
fn flat_installment(inputs: &LoanInputs) -> Money {
    let principal = inputs.principal.as_decimal();
    let years = Decimal::from(inputs.tenure_months) / Decimal::from(12);
    let total_interest = principal * inputs.annual_rate.as_decimal() * years;
    let emi = (principal + total_interest) / Decimal::from(inputs.tenure_months);
    Money::from_decimal(emi)
}

/// (1 + r)^n by checked iterative multiplication; None on decimal overflow
fn compound_factor(monthly_rate: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = factor.checked_mul(base)?;
    }
    Some(factor)
}

pub mod installment;
pub mod rate;
pub mod tenure;

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, SolveError};
use crate::schedule::AmortizationSchedule;
use crate::types::{LoanInputs, LoanResult, SolveMode};

/// compute the unknown loan parameter and derive the full repayment schedule
///
/// Exactly one of {installment, tenure, rate} is solved for, selected by
/// `inputs.mode`; the other parameters are held fixed. Pure function of its
/// inputs: no shared state, bounded computation, every failure is a typed
/// recoverable outcome.
pub fn solve(inputs: &LoanInputs) -> Result<LoanResult> {
    validate(inputs)?;
    match inputs.mode {
        SolveMode::Installment => installment::solve(inputs),
        SolveMode::Tenure => tenure::solve(inputs),
        SolveMode::Rate => rate::solve(inputs),
    }
}

/// per-mode precondition checks; violations never proceed into degenerate
/// arithmetic
fn validate(inputs: &LoanInputs) -> Result<()> {
    if !inputs.principal.is_positive() {
        return Err(SolveError::InvalidInput {
            message: "principal must be positive".to_string(),
        });
    }

    match inputs.mode {
        SolveMode::Installment => {
            require_positive_rate(inputs.annual_rate)?;
            require_positive_tenure(inputs.tenure_months)?;
        }
        SolveMode::Tenure => {
            require_positive_rate(inputs.annual_rate)?;
            require_positive_installment(inputs.fixed_installment)?;
        }
        SolveMode::Rate => {
            require_positive_tenure(inputs.tenure_months)?;
            require_positive_installment(inputs.fixed_installment)?;
        }
    }

    Ok(())
}

fn require_positive_rate(rate: Rate) -> Result<()> {
    if !rate.is_positive() {
        return Err(SolveError::InvalidInput {
            message: "annual interest rate must be positive".to_string(),
        });
    }
    Ok(())
}

fn require_positive_tenure(tenure_months: u32) -> Result<()> {
    if tenure_months == 0 {
        return Err(SolveError::InvalidInput {
            message: "tenure must be at least one month".to_string(),
        });
    }
    Ok(())
}

fn require_positive_installment(installment: Money) -> Result<()> {
    if !installment.is_positive() {
        return Err(SolveError::InvalidInput {
            message: "fixed installment must be positive".to_string(),
        });
    }
    Ok(())
}

/// assemble the result once all three parameters are known: generate the full
/// schedule and derive totals so that
/// `total_payment == installment * tenure_months` and
/// `total_interest == total_payment - principal` hold for both methods
pub(crate) fn build_result(
    inputs: &LoanInputs,
    installment: Money,
    tenure_months: u32,
    annual_rate: Rate,
) -> LoanResult {
    let schedule = AmortizationSchedule::generate(
        inputs.principal,
        installment,
        annual_rate.monthly_rate(),
        tenure_months,
        inputs.method,
    );

    let total_payment = installment * Decimal::from(tenure_months);
    let total_interest = total_payment - inputs.principal;

    LoanResult {
        installment,
        tenure_months,
        annual_rate,
        total_payment,
        total_interest,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AmortizationMethod;
    use rust_decimal_macros::dec;

    fn lakh(n: i64) -> Money {
        Money::from_major(n * 100_000)
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let inputs = LoanInputs::solve_installment(
            Money::ZERO,
            Rate::from_percentage(dec!(10)),
            60,
            AmortizationMethod::Reducing,
        );
        assert!(matches!(
            solve(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_rate_for_installment_solve() {
        let inputs = LoanInputs::solve_installment(
            lakh(10),
            Rate::ZERO,
            60,
            AmortizationMethod::Reducing,
        );
        assert!(matches!(
            solve(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_tenure_for_installment_solve() {
        let inputs = LoanInputs::solve_installment(
            lakh(10),
            Rate::from_percentage(dec!(10)),
            0,
            AmortizationMethod::Flat,
        );
        assert!(matches!(
            solve(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_installment_for_tenure_solve() {
        let inputs = LoanInputs::solve_tenure(
            lakh(10),
            Rate::from_percentage(dec!(10)),
            Money::ZERO,
            AmortizationMethod::Reducing,
        );
        assert!(matches!(
            solve(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_installment_for_rate_solve() {
        let inputs = LoanInputs::solve_rate(
            lakh(10),
            60,
            Money::from_major(-1),
            AmortizationMethod::Reducing,
        );
        assert!(matches!(
            solve(&inputs),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    // scenario: 10 lakh at 10% over 60 months, reducing balance
    #[test]
    fn test_reducing_installment_concrete() {
        let inputs = LoanInputs::solve_installment(
            lakh(10),
            Rate::from_percentage(dec!(10)),
            60,
            AmortizationMethod::Reducing,
        );
        let result = solve(&inputs).unwrap();

        let emi_error = (result.installment - Money::from_decimal(dec!(21247.04))).abs();
        assert!(emi_error < Money::from_decimal(dec!(0.05)), "emi {}", result.installment);

        let total_error = (result.total_payment - Money::from_decimal(dec!(1274822.68))).abs();
        assert!(total_error < Money::from_major(3), "total {}", result.total_payment);
        assert_eq!(
            result.total_interest,
            result.total_payment - lakh(10)
        );
        assert_eq!(result.tenure_months, 60);
        assert_eq!(result.schedule.len(), 60);
    }

    // scenario: 5 lakh at 8% flat over 36 months
    #[test]
    fn test_flat_installment_concrete() {
        let inputs = LoanInputs::solve_installment(
            lakh(5),
            Rate::from_percentage(dec!(8)),
            36,
            AmortizationMethod::Flat,
        );
        let result = solve(&inputs).unwrap();

        // flat interest: 500,000 * 0.08 * 3 = 120,000
        let emi_error = (result.installment - Money::from_decimal(dec!(17222.22))).abs();
        assert!(emi_error < Money::from_decimal(dec!(0.01)), "emi {}", result.installment);
        let interest_error = (result.total_interest - Money::from_major(120_000)).abs();
        assert!(interest_error < Money::from_decimal(dec!(0.01)));
        let total_error = (result.total_payment - Money::from_major(620_000)).abs();
        assert!(total_error < Money::from_decimal(dec!(0.01)));
    }

    #[test]
    fn test_totals_consistent_with_schedule() {
        for method in [AmortizationMethod::Reducing, AmortizationMethod::Flat] {
            let inputs = LoanInputs::solve_installment(
                lakh(10),
                Rate::from_percentage(dec!(10)),
                60,
                method,
            );
            let result = solve(&inputs).unwrap();

            // summed installments equal the reported total payment
            assert_eq!(result.schedule.total_paid(), result.total_payment);

            // summed principal portions recover the principal within tolerance
            let drift = (result.schedule.total_principal_paid() - inputs.principal).abs();
            assert!(drift < Money::from_major(1), "drift {}", drift);
        }
    }

    #[test]
    fn test_installment_tenure_round_trip() {
        for tenure in [12u32, 24, 60, 120, 240] {
            let inputs = LoanInputs::solve_installment(
                lakh(10),
                Rate::from_percentage(dec!(10)),
                tenure,
                AmortizationMethod::Reducing,
            );
            let emi = solve(&inputs).unwrap().installment;

            let back = LoanInputs::solve_tenure(
                lakh(10),
                Rate::from_percentage(dec!(10)),
                emi,
                AmortizationMethod::Reducing,
            );
            let recovered = solve(&back).unwrap().tenure_months;

            // ceil-rounding may absorb at most one extra period
            assert!(
                recovered == tenure || recovered == tenure + 1,
                "tenure {} recovered as {}",
                tenure,
                recovered
            );
        }
    }

    #[test]
    fn test_installment_rate_round_trip() {
        for percent in [1u32, 5, 9, 14, 21, 30] {
            let rate = Rate::from_percentage(Decimal::from(percent));
            let inputs = LoanInputs::solve_installment(
                lakh(10),
                rate,
                60,
                AmortizationMethod::Reducing,
            );
            let emi = solve(&inputs).unwrap().installment;

            let back = LoanInputs::solve_rate(lakh(10), 60, emi, AmortizationMethod::Reducing);
            let recovered = solve(&back).unwrap().annual_rate;

            let error = (recovered.as_percentage() - rate.as_percentage()).abs();
            assert!(
                error < dec!(0.01),
                "rate {}% recovered as {}",
                percent,
                recovered
            );
        }
    }

    #[test]
    fn test_breakdown_split() {
        let inputs = LoanInputs::solve_installment(
            lakh(10),
            Rate::from_percentage(dec!(10)),
            60,
            AmortizationMethod::Reducing,
        );
        let result = solve(&inputs).unwrap();
        let (principal_slice, interest_slice) = result.breakdown();
        assert_eq!(principal_slice, lakh(10));
        assert_eq!(interest_slice, result.total_interest);
    }

    #[test]
    fn test_result_json_snapshot() {
        let inputs = LoanInputs::solve_installment(
            Money::from_major(100_000),
            Rate::from_percentage(dec!(12)),
            12,
            AmortizationMethod::Reducing,
        );
        let result = solve(&inputs).unwrap();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"tenure_months\": 12"));
        assert!(json.contains("schedule"));
    }
}

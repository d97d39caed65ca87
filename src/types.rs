use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::schedule::AmortizationSchedule;

/// amortization convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationMethod {
    /// interest charged each period on the outstanding balance
    Reducing,
    /// interest computed once on the original principal and spread evenly
    Flat,
}

/// which loan parameter is the unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// principal, rate and tenure known; find the installment
    Installment,
    /// principal, rate and fixed installment known; find the tenure
    Tenure,
    /// principal, tenure and fixed installment known; find the rate
    Rate,
}

/// caller-supplied loan parameters for a single solve invocation
///
/// Exactly one of {installment, tenure, rate} is the unknown, selected by
/// `mode`; the fields that back the unknown are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_months: u32,
    pub fixed_installment: Money,
    pub method: AmortizationMethod,
    pub mode: SolveMode,
}

impl LoanInputs {
    /// find the installment for a known principal, rate and tenure
    pub fn solve_installment(
        principal: Money,
        annual_rate: Rate,
        tenure_months: u32,
        method: AmortizationMethod,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months,
            fixed_installment: Money::ZERO,
            method,
            mode: SolveMode::Installment,
        }
    }

    /// find the tenure for a known principal, rate and fixed installment
    pub fn solve_tenure(
        principal: Money,
        annual_rate: Rate,
        fixed_installment: Money,
        method: AmortizationMethod,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months: 0,
            fixed_installment,
            method,
            mode: SolveMode::Tenure,
        }
    }

    /// find the rate for a known principal, tenure and fixed installment
    pub fn solve_rate(
        principal: Money,
        tenure_months: u32,
        fixed_installment: Money,
        method: AmortizationMethod,
    ) -> Self {
        Self {
            principal,
            annual_rate: Rate::ZERO,
            tenure_months,
            fixed_installment,
            method,
            mode: SolveMode::Rate,
        }
    }
}

/// resolved loan: the solved parameter, derived totals and the full schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub installment: Money,
    pub tenure_months: u32,
    pub annual_rate: Rate,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: AmortizationSchedule,
}

impl LoanResult {
    /// two-slice principal/interest split for chart consumers
    pub fn breakdown(&self) -> (Money, Money) {
        (self.total_payment - self.total_interest, self.total_interest)
    }

    /// JSON snapshot of the result
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors_select_mode() {
        let rate = Rate::from_percentage(dec!(10));
        let emi = LoanInputs::solve_installment(
            Money::from_major(100_000),
            rate,
            24,
            AmortizationMethod::Reducing,
        );
        assert_eq!(emi.mode, SolveMode::Installment);
        assert!(emi.fixed_installment.is_zero());

        let tenure = LoanInputs::solve_tenure(
            Money::from_major(100_000),
            rate,
            Money::from_major(5_000),
            AmortizationMethod::Reducing,
        );
        assert_eq!(tenure.mode, SolveMode::Tenure);
        assert_eq!(tenure.tenure_months, 0);

        let implied = LoanInputs::solve_rate(
            Money::from_major(100_000),
            24,
            Money::from_major(5_000),
            AmortizationMethod::Flat,
        );
        assert_eq!(implied.mode, SolveMode::Rate);
        assert!(implied.annual_rate.is_zero());
    }
}

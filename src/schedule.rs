use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::AmortizationMethod;

/// one repayment period in the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period index
    pub period: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub installment: Money,
    pub remaining_balance: Money,
}

/// full repayment schedule, eagerly materialized
///
/// Totals must always be derived from the full schedule; capping the number of
/// rendered rows is the presentation layer's concern, not the schedule's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// generate one row per period for the resolved loan parameters
    ///
    /// The balance is forced to exactly zero on the final period, or whenever
    /// rounding drift would push it negative; the last installment is allowed
    /// to silently differ by a few currency units.
    pub fn generate(
        principal: Money,
        installment: Money,
        monthly_rate: Rate,
        tenure_months: u32,
        method: AmortizationMethod,
    ) -> Self {
        let rows = match method {
            AmortizationMethod::Reducing => {
                Self::reducing_rows(principal, installment, monthly_rate, tenure_months)
            }
            AmortizationMethod::Flat => Self::flat_rows(principal, installment, tenure_months),
        };
        Self { rows }
    }

    /// reducing balance: interest accrues on the outstanding balance
    fn reducing_rows(
        principal: Money,
        installment: Money,
        monthly_rate: Rate,
        tenure_months: u32,
    ) -> Vec<AmortizationRow> {
        let mut rows = Vec::with_capacity(tenure_months as usize);
        let mut balance = principal;

        for period in 1..=tenure_months {
            let interest_paid = balance * monthly_rate.as_decimal();
            let principal_paid = installment - interest_paid;
            balance = balance - principal_paid;
            if period == tenure_months || balance.is_negative() {
                balance = Money::ZERO;
            }
            rows.push(AmortizationRow {
                period,
                principal_paid,
                interest_paid,
                installment,
                remaining_balance: balance,
            });
        }

        rows
    }

    /// flat rate: constant principal and interest portions every period
    fn flat_rows(principal: Money, installment: Money, tenure_months: u32) -> Vec<AmortizationRow> {
        let n = Decimal::from(tenure_months);
        let total_interest = installment * n - principal;
        let monthly_interest = total_interest / n;
        let monthly_principal = principal / n;

        let mut rows = Vec::with_capacity(tenure_months as usize);
        let mut balance = principal;

        for period in 1..=tenure_months {
            balance = balance - monthly_principal;
            if period == tenure_months || balance.is_negative() {
                balance = Money::ZERO;
            }
            rows.push(AmortizationRow {
                period,
                principal_paid: monthly_principal,
                interest_paid: monthly_interest,
                installment,
                remaining_balance: balance,
            });
        }

        rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// get row for a specific period
    pub fn row(&self, period: u32) -> Option<&AmortizationRow> {
        self.rows.get((period as usize).checked_sub(1)?)
    }

    /// sum of principal portions across the full schedule
    pub fn total_principal_paid(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.principal_paid)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// sum of interest portions across the full schedule
    pub fn total_interest_paid(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.interest_paid)
            .fold(Money::ZERO, |acc, x| acc + x)
    }

    /// sum of installments across the full schedule
    pub fn total_paid(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.installment)
            .fold(Money::ZERO, |acc, x| acc + x)
    }
}

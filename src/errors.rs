use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
    },

    #[error("degenerate input: {message}")]
    DegenerateInput {
        message: String,
    },

    #[error("installment too low: interest-only floor {minimum}, provided {provided}, tenure would be infinite")]
    InstallmentTooLow {
        minimum: Money,
        provided: Money,
    },

    #[error("installment too low for tenure: total paid {total_paid} never repays principal {principal}")]
    InstallmentTooLowForTenure {
        principal: Money,
        total_paid: Money,
    },

    #[error("installment exceeds requirement: repays principal with no interest at all")]
    InstallmentExceedsRequirement,
}

pub type Result<T> = std::result::Result<T, SolveError>;

pub mod decimal;
pub mod errors;
pub mod gst;
pub mod pricing;
pub mod schedule;
pub mod solver;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{Result, SolveError};
pub use gst::{gst_breakdown, GstBreakdown, GstComponents, GstMode, SupplyType};
pub use pricing::{estimate_package, CustomerType, InverterPhase, PackageEstimate, PackageInputs};
pub use schedule::{AmortizationRow, AmortizationSchedule};
pub use solver::solve;
pub use types::{AmortizationMethod, LoanInputs, LoanResult, SolveMode};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;

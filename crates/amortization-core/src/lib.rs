pub mod amortization;
pub mod error;
pub mod present;
pub mod time_value;
pub mod types;

pub use amortization::{amortize, compute_loan, LoanInput, LoanResult, PeriodRow};
pub use error::AmortizationError;
pub use present::{calculate_and_present, present, LoanPresenter};
pub use types::*;

/// Standard result type for all amortization operations
pub type AmortizationResult<T> = Result<T, AmortizationError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmortizationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for AmortizationError {
    fn from(e: serde_json::Error) -> Self {
        AmortizationError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for AmortizationError {
    fn from(e: chrono::ParseError) -> Self {
        AmortizationError::InvalidDate(e.to_string())
    }
}

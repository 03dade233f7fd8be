use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failures surfaced by gateway operations.
///
/// Local validation errors are raised before any remote call; the remaining
/// variants relay what the remote collaborator reported, unchanged.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("amount must be positive: {0}")]
    InvalidAmount(Decimal),
    #[error("missing configuration field: {0}")]
    MissingConfig(&'static str),
    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("request rejected by gateway: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// True for the remote's distinguished not-found classification.
    ///
    /// The upsert helper keys its create fallback off this predicate and
    /// nothing else; all other error kinds propagate untouched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = GatewayError::not_found("customer", "c1");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "customer not found: c1");

        assert!(!GatewayError::MissingField("customer id").is_not_found());
        assert!(!GatewayError::Rejected("email is invalid".into()).is_not_found());
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = GatewayError::MissingField("payment method nonce");
        assert_eq!(
            err.to_string(),
            "missing required field: payment method nonce"
        );
    }
}

use crate::error::{GatewayError, Result};

/// Checks that a required string argument is present and non-empty.
///
/// Operations call this before touching the remote client, so an invalid
/// payload never reaches it.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(GatewayError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Checks that a bulk input carries at least one element.
pub fn require_non_empty<T>(field: &'static str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        Err(GatewayError::MissingField(field))
    } else {
        Ok(())
    }
}

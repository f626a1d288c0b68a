//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider and IO errors.

use super::InvalidId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// An identifier was empty
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Journey has no stops, so no terminus
    #[error("journey must have at least one stop")]
    EmptyJourney,
}

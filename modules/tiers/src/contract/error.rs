//! Contract error types for the tiers module
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Tiers module domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TiersError {
    /// No tier with the given identifier
    #[error("tier not found: {id}")]
    NotFound {
        /// Tier identifier
        id: i32,
    },
    /// Another tier already uses this number
    #[error("number {number} has already been taken")]
    DuplicateNumber {
        /// The conflicting number
        number: i32,
    },
    /// Internal error
    #[error("internal error")]
    Internal,
}

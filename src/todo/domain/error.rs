//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTask,
}

/// Error returned while parsing done flags from persistence or the wire.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid done flag value {0}, expected 0 or 1")]
pub struct ParseDoneFlagError(pub i64);

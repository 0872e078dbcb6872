//! Error types for random provider operations.

use thiserror::Error;

/// Stable error codes for provider precondition violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// R001: Range bounds are empty or inverted
    InvalidRange,
    /// R002: Operation requires a non-empty collection
    EmptyCollection,
    /// R003: Items and weights differ in length
    ArgumentMismatch,
    /// R004: Total weight is zero or negative
    InvalidWeights,
    /// R005: Snapshot was taken with a different generator revision
    IncompatibleGenerator,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "R001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRange => "R001",
            ErrorCode::EmptyCollection => "R002",
            ErrorCode::ArgumentMismatch => "R003",
            ErrorCode::InvalidWeights => "R004",
            ErrorCode::IncompatibleGenerator => "R005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by [`RandomProvider`](crate::RandomProvider).
///
/// All variants are local precondition violations. A failed call never
/// draws from the stream, so the provider position is unchanged.
/// `IncompatibleGenerator` is raised before any provider is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i32, max: i32 },

    #[error("cannot pick from an empty collection")]
    EmptyCollection,

    #[error("items and weights differ in length ({items} items, {weights} weights)")]
    ArgumentMismatch { items: usize, weights: usize },

    #[error("total weight must be positive, got {total}")]
    InvalidWeights { total: f32 },

    #[error("snapshot generator revision {found} does not match current revision {expected}")]
    IncompatibleGenerator { found: u32, expected: u32 },
}

impl RandomError {
    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RandomError::InvalidRange { .. } => ErrorCode::InvalidRange,
            RandomError::EmptyCollection => ErrorCode::EmptyCollection,
            RandomError::ArgumentMismatch { .. } => ErrorCode::ArgumentMismatch,
            RandomError::InvalidWeights { .. } => ErrorCode::InvalidWeights,
            RandomError::IncompatibleGenerator { .. } => ErrorCode::IncompatibleGenerator,
        }
    }
}

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, RandomError>;

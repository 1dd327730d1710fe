//! Assertion failure type.

use thiserror::Error;

/// The outcome of a failed structural check.
///
/// Carries the fully substituted failure message, including the reason
/// clause and the listing of non-conforming members.
#[derive(Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

// Test harnesses print `Debug` for returned errors; keep the listing readable.
impl std::fmt::Debug for AssertionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AssertionFailure: {}", self.message)
    }
}

/// Result type for verification operations.
pub type VerifyResult<T> = Result<T, AssertionFailure>;

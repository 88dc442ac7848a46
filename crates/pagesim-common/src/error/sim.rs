//! Simulator error types.

use thiserror::Error;

use crate::types::PageId;

/// The main error type for pagesim.
///
/// Every engine operation is deterministic and total for valid input, so
/// errors are reported immediately and nothing is retried. Failure paths
/// leave engine state untouched.
///
/// # Example
///
/// ```rust
/// use pagesim_common::error::{SimError, SimResult};
/// use pagesim_common::types::PageId;
///
/// fn check(page: PageId, page_count: u32) -> SimResult<()> {
///     if page.as_u32() >= page_count {
///         return Err(SimError::PageOutOfRange { page, page_count });
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum SimError {
    /// Page number outside the configured page space.
    #[error("page {page} out of range, page space is {page_count}")]
    PageOutOfRange {
        /// The offending page number.
        page: PageId,
        /// Size of the page space.
        page_count: u32,
    },

    /// Configuration rejected at construction time.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        message: String,
    },

    /// Internal error - this indicates a bug.
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl SimError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::PageOutOfRange {
            page: PageId::new(9),
            page_count: 8,
        };
        assert_eq!(err.to_string(), "page 9 out of range, page space is 8");
    }

    #[test]
    fn test_invalid_config() {
        let err = SimError::invalid_config("frame_count must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: frame_count must be positive"
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_internal() {
        let err = SimError::internal("no victim with exhausted pool");
        assert!(err.is_internal());
    }
}

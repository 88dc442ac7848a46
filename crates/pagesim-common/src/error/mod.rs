//! Error handling for pagesim.
//!
//! This module provides a unified error type and result alias used
//! across all pagesim components.

mod sim;

pub use sim::SimError;

/// Result type alias for pagesim operations.
pub type SimResult<T> = std::result::Result<T, SimError>;

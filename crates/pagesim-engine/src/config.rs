//! Engine configuration.

use serde::{Deserialize, Serialize};

use pagesim_common::constants::{DEFAULT_FRAME_COUNT, DEFAULT_PAGE_SPACE, MIN_FRAME_COUNT};

use crate::policy::ReplacementPolicy;

/// Configuration for a [`PagingEngine`](crate::PagingEngine).
///
/// Validation happens once, at engine construction; a constructed engine
/// never fails for configuration reasons at access time.
///
/// # Example
///
/// ```rust
/// use pagesim_engine::{EngineConfig, ReplacementPolicy};
///
/// let config = EngineConfig::default().with_policy(ReplacementPolicy::Lru);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Victim selection policy.
    pub policy: ReplacementPolicy,

    /// Number of distinct pages the table tracks. References must fall in
    /// `0..page_count`.
    pub page_count: u32,

    /// Number of physical frames available to the simulation.
    pub frame_count: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: ReplacementPolicy::default(),
            page_count: DEFAULT_PAGE_SPACE,
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the given policy, page space, and
    /// frame budget.
    #[must_use]
    pub const fn new(policy: ReplacementPolicy, page_count: u32, frame_count: u32) -> Self {
        Self {
            policy,
            page_count,
            frame_count,
        }
    }

    /// Creates a small configuration for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            policy: ReplacementPolicy::Fifo,
            page_count: 16,
            frame_count: 3,
        }
    }

    /// Sets the replacement policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the page space size.
    #[must_use]
    pub const fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Sets the frame budget.
    #[must_use]
    pub const fn with_frame_count(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.page_count == 0 {
            return Err("page_count must be positive".to_string());
        }

        if self.frame_count < MIN_FRAME_COUNT {
            return Err(format!("frame_count must be at least {MIN_FRAME_COUNT}"));
        }

        Ok(())
    }
}

//! Access events.
//!
//! Every engine access resolves to one event describing what the state
//! machine did. The driver renders these into the per-reference trace.

use serde::Serialize;

use pagesim_common::types::{FrameId, PageId, Tick};

/// How an access was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page was loaded into a never-used frame from the free pool.
    Loaded,
    /// A resident page was evicted to make room.
    Replaced {
        /// The evicted page.
        victim: PageId,
    },
}

/// The result of one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// The referenced page.
    pub page: PageId,
    /// The frame now holding the page.
    pub frame: FrameId,
    /// The logical tick of the access.
    pub at: Tick,
    /// How the access was satisfied.
    pub outcome: AccessOutcome,
}

impl AccessEvent {
    /// Returns true if the access was a fault (free load or replacement).
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        !matches!(self.outcome, AccessOutcome::Hit)
    }

    /// Returns the evicted page, if the access replaced one.
    #[must_use]
    pub const fn victim(&self) -> Option<PageId> {
        match self.outcome {
            AccessOutcome::Replaced { victim } => Some(victim),
            _ => None,
        }
    }
}

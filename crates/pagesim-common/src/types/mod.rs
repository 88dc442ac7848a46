//! Core types for pagesim.
//!
//! Type-safe wrappers around the integers the simulator traffics in:
//! page numbers, frame slots, and logical clock values.

mod clock;
mod ids;

pub use clock::Tick;
pub use ids::{FrameId, PageId};

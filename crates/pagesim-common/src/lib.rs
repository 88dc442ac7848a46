//! # pagesim-common
//!
//! Common types, errors, and constants for pagesim.
//!
//! This crate provides the foundational types shared by the simulation
//! engine and the command-line driver:
//!
//! - **Types**: Core identifiers (`PageId`, `FrameId`) and the logical clock (`Tick`)
//! - **Errors**: Unified error handling with `SimError`
//! - **Constants**: Simulation-wide defaults and limits
//!
//! ## Example
//!
//! ```rust
//! use pagesim_common::types::{PageId, FrameId, Tick};
//! use pagesim_common::error::SimResult;
//!
//! fn example() -> SimResult<()> {
//!     let page = PageId::new(7);
//!     let frame = FrameId::new(0);
//!     let tick = Tick::ZERO.next();
//!     assert!(page.as_u32() > frame.as_u32());
//!     assert_eq!(tick.as_u64(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use constants::*;
pub use error::{SimError, SimResult};
pub use types::{FrameId, PageId, Tick};

//! # pagesim-engine
//!
//! Trace-driven page replacement engine.
//!
//! Given a fixed frame budget and a sequence of page references, the engine
//! simulates frame allocation and replacement under one of three classical
//! policies and counts the page faults incurred:
//!
//! - **FIFO**: evict the page resident the longest
//! - **LRU**: evict the least recently used page
//! - **LFU**: evict the least frequently used page
//!
//! All three share a single load/evict/hit state machine; only the victim
//! ranking differs. The engine is deterministic, single-threaded, and
//! performs no I/O. For embedding in a concurrent host, [`SyncPagingEngine`]
//! wraps it behind one exclusive lock.
//!
//! # Example
//!
//! ```rust
//! use pagesim_engine::{EngineConfig, PagingEngine, ReplacementPolicy};
//! use pagesim_common::types::PageId;
//!
//! let config = EngineConfig::new(ReplacementPolicy::Fifo, 8, 3);
//! let mut engine = PagingEngine::new(config).unwrap();
//!
//! let refs: Vec<PageId> = [1, 2, 3, 1].into_iter().map(PageId::new).collect();
//! let faults = engine.replay(&refs).unwrap();
//! assert_eq!(faults, 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod event;
pub mod policy;
pub mod pool;
pub mod stats;
pub mod table;

pub use config::EngineConfig;
pub use engine::{PagingEngine, SyncPagingEngine};
pub use event::{AccessEvent, AccessOutcome};
pub use policy::ReplacementPolicy;
pub use pool::FramePool;
pub use stats::SimStats;
pub use table::{PageTable, PageTableEntry};

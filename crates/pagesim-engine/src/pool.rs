//! Free-frame pool.
//!
//! The pool hands out never-used frames in FIFO order. It is created full
//! and shrinks monotonically: once the last free frame is consumed, further
//! loads reuse frames freed by eviction in place, so nothing is ever
//! returned to the pool.

use pagesim_common::types::FrameId;

/// Ordered pool of frames not yet backing any page.
///
/// Frames `0..frame_count` are consumed from the front via an index cursor;
/// the backing storage is never shifted.
#[derive(Debug, Clone)]
pub struct FramePool {
    frames: Vec<FrameId>,
    next: usize,
}

impl FramePool {
    /// Creates a full pool of `frame_count` frames.
    #[must_use]
    pub fn new(frame_count: u32) -> Self {
        Self {
            frames: (0..frame_count).map(FrameId::new).collect(),
            next: 0,
        }
    }

    /// Pops the frame at the front of the pool, if any remain.
    pub fn pop(&mut self) -> Option<FrameId> {
        let frame = self.frames.get(self.next).copied()?;
        self.next += 1;
        Some(frame)
    }

    /// Returns the number of frames still free.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.frames.len() - self.next
    }

    /// Returns true once every frame has been handed out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next == self.frames.len()
    }

    /// Returns the total number of frames.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Refills the pool to its initial full state.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

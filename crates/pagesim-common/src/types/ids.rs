//! Core identifier types for pagesim.
//!
//! These types provide type-safe wrappers around numeric identifiers,
//! preventing accidental misuse of page numbers as frame slots and
//! vice versa.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page number - identifies one page in the simulated page space.
///
/// Pages are the unit of addressable data tracked by the page table.
/// A reference string is a sequence of `PageId`s.
///
/// # Example
///
/// ```rust
/// use pagesim_common::types::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.as_u32(), 42);
/// assert_eq!(page.index(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PageId(u32);

impl PageId {
    /// Creates a new `PageId` from a raw u32 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the page number as a table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageId({})", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for PageId {
    #[inline]
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<PageId> for u32 {
    #[inline]
    fn from(id: PageId) -> Self {
        id.0
    }
}

/// Frame slot - identifies one physical frame.
///
/// A frame holds exactly one resident page at a time. Frame slots are
/// numbered `0..frame_count` and never change identity; only the page
/// occupying them does.
///
/// # Example
///
/// ```rust
/// use pagesim_common::types::FrameId;
///
/// let frame = FrameId::new(0);
/// assert_eq!(frame.as_u32(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FrameId(u32);

impl FrameId {
    /// Creates a new `FrameId` from a raw u32 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the frame slot as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FrameId {
    #[inline]
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<FrameId> for u32 {
    #[inline]
    fn from(id: FrameId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let page = PageId::new(42);
        assert_eq!(page.as_u32(), 42);
        assert_eq!(page.index(), 42);
        assert_eq!(u32::from(page), 42);
        assert_eq!(PageId::from(42u32), page);
    }

    #[test]
    fn test_frame_id() {
        let frame = FrameId::new(3);
        assert_eq!(frame.as_u32(), 3);
        assert_eq!(frame.index(), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(FrameId::new(0) < FrameId::new(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(PageId::new(7).to_string(), "7");
        assert_eq!(format!("{:?}", FrameId::new(2)), "FrameId(2)");
    }
}

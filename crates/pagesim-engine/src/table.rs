//! Page table and per-page bookkeeping.
//!
//! The table holds one entry per page in the configured page space. Entries
//! are created empty at construction, mutated on every access, and
//! invalidated back to the empty state on eviction; they are never removed.

use pagesim_common::error::{SimError, SimResult};
use pagesim_common::types::{FrameId, PageId, Tick};

/// Bookkeeping for one page.
///
/// A page is resident iff `frame` is set. Non-resident entries hold the
/// uniform sentinel state: no frame, both ticks at [`Tick::ZERO`], and a
/// zero use count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    /// Frame holding the page, if resident.
    frame: Option<FrameId>,
    /// Tick at which the page was (re)loaded into its frame.
    loaded_at: Tick,
    /// Tick of the most recent touch, load included.
    last_used_at: Tick,
    /// Touches since the page was loaded; 1 on load, +1 per hit.
    use_count: u64,
}

impl PageTableEntry {
    /// Creates an empty, non-resident entry.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            frame: None,
            loaded_at: Tick::ZERO,
            last_used_at: Tick::ZERO,
            use_count: 0,
        }
    }

    /// Returns true if the page currently occupies a frame.
    #[inline]
    #[must_use]
    pub const fn is_resident(&self) -> bool {
        self.frame.is_some()
    }

    /// Returns the frame holding the page, if resident.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    /// Returns the tick at which the page was loaded.
    #[inline]
    #[must_use]
    pub const fn loaded_at(&self) -> Tick {
        self.loaded_at
    }

    /// Returns the tick of the most recent touch.
    #[inline]
    #[must_use]
    pub const fn last_used_at(&self) -> Tick {
        self.last_used_at
    }

    /// Returns the number of touches since the page was loaded.
    #[inline]
    #[must_use]
    pub const fn use_count(&self) -> u64 {
        self.use_count
    }

    /// Loads the page into `frame` with fresh metadata.
    pub fn load(&mut self, frame: FrameId, at: Tick) {
        self.frame = Some(frame);
        self.loaded_at = at;
        self.last_used_at = at;
        self.use_count = 1;
    }

    /// Records a hit. `frame` and `loaded_at` are untouched.
    pub fn touch(&mut self, at: Tick) {
        self.last_used_at = at;
        self.use_count += 1;
    }

    /// Resets the entry to the empty, non-resident state.
    pub fn invalidate(&mut self) {
        *self = Self::empty();
    }
}

impl Default for PageTableEntry {
    fn default() -> Self {
        Self::empty()
    }
}

/// The page table: one [`PageTableEntry`] per page, indexed by page number.
///
/// Sized once at construction and never resized.
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Creates a table of `page_count` empty entries.
    #[must_use]
    pub fn new(page_count: u32) -> Self {
        Self {
            entries: vec![PageTableEntry::empty(); page_count as usize],
        }
    }

    /// Returns the size of the page space.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Returns the entry for `page`, rejecting out-of-range page numbers.
    pub fn entry(&self, page: PageId) -> SimResult<&PageTableEntry> {
        self.entries
            .get(page.index())
            .ok_or(SimError::PageOutOfRange {
                page,
                page_count: self.page_count(),
            })
    }

    /// Returns the mutable entry for `page`, rejecting out-of-range page
    /// numbers.
    pub fn entry_mut(&mut self, page: PageId) -> SimResult<&mut PageTableEntry> {
        let page_count = self.page_count();
        self.entries
            .get_mut(page.index())
            .ok_or(SimError::PageOutOfRange { page, page_count })
    }

    /// Iterates over the resident pages and their entries.
    pub fn resident(&self) -> impl Iterator<Item = (PageId, &PageTableEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_resident())
            .map(|(index, entry)| (PageId::new(index as u32), entry))
    }

    /// Returns the number of resident pages.
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_resident()).count()
    }

    /// Invalidates every entry.
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.invalidate();
        }
    }
}

//! Replacement policies and victim ranking.
//!
//! All three policies share one victim scan over the resident pages; a
//! policy only chooses the ranking key. The resident page with the smallest
//! key is evicted. Every chain ends on the page number, so victim choice is
//! deterministic even when timestamps or counts collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use pagesim_common::error::SimError;
use pagesim_common::types::PageId;

use crate::table::PageTableEntry;

/// Victim selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    /// Evict the page resident the longest (oldest load tick).
    #[default]
    Fifo,
    /// Evict the page untouched the longest (oldest use tick).
    Lru,
    /// Evict the page with the fewest touches since load; ties fall back to
    /// load tick, then page number.
    Lfu,
}

impl ReplacementPolicy {
    /// All policies, in display order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Lfu];

    /// Returns the ranking key for a resident page.
    ///
    /// The page with the smallest key is the victim. Keys compare
    /// lexicographically: primary criterion, first tie-break, second
    /// tie-break.
    #[must_use]
    pub fn victim_rank(self, page: PageId, entry: &PageTableEntry) -> (u64, u64, u64) {
        let page = u64::from(page.as_u32());
        match self {
            Self::Fifo => (entry.loaded_at().as_u64(), page, 0),
            Self::Lru => (entry.last_used_at().as_u64(), page, 0),
            Self::Lfu => (entry.use_count(), entry.loaded_at().as_u64(), page),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ReplacementPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            other => Err(SimError::invalid_config(format!(
                "unknown replacement policy: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesim_common::types::{FrameId, Tick};

    fn entry(loaded_at: u64, last_used_at: u64, use_count: u64) -> PageTableEntry {
        let mut e = PageTableEntry::empty();
        e.load(FrameId::new(0), Tick::new(loaded_at));
        for _ in 1..use_count {
            e.touch(Tick::new(last_used_at));
        }
        // A single-use entry's last touch is its load
        if use_count == 1 {
            assert_eq!(e.last_used_at(), Tick::new(loaded_at));
        }
        e
    }

    #[test]
    fn test_fifo_ranks_by_load_tick() {
        let old = entry(1, 1, 1);
        let new = entry(5, 5, 1);
        let p = PageId::new(0);
        assert!(ReplacementPolicy::Fifo.victim_rank(p, &old) < ReplacementPolicy::Fifo.victim_rank(p, &new));
    }

    #[test]
    fn test_lru_ranks_by_use_tick() {
        let stale = entry(1, 2, 2);
        let fresh = entry(1, 9, 2);
        let p = PageId::new(0);
        assert!(ReplacementPolicy::Lru.victim_rank(p, &stale) < ReplacementPolicy::Lru.victim_rank(p, &fresh));
    }

    #[test]
    fn test_lfu_ranks_by_use_count_then_load() {
        let rare = entry(5, 5, 1);
        let busy = entry(1, 9, 4);
        let p = PageId::new(0);
        assert!(ReplacementPolicy::Lfu.victim_rank(p, &rare) < ReplacementPolicy::Lfu.victim_rank(p, &busy));

        // Equal counts: the earlier load loses
        let older = entry(1, 1, 2);
        let newer = entry(3, 3, 2);
        assert!(ReplacementPolicy::Lfu.victim_rank(p, &older) < ReplacementPolicy::Lfu.victim_rank(p, &newer));
    }

    #[test]
    fn test_page_number_breaks_full_ties() {
        let a = entry(2, 2, 1);
        let b = entry(2, 2, 1);
        for policy in ReplacementPolicy::ALL {
            let low = policy.victim_rank(PageId::new(3), &a);
            let high = policy.victim_rank(PageId::new(7), &b);
            assert!(low < high, "{policy} must prefer the lower page number");
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("fifo".parse::<ReplacementPolicy>().unwrap(), ReplacementPolicy::Fifo);
        assert_eq!("LRU".parse::<ReplacementPolicy>().unwrap(), ReplacementPolicy::Lru);
        assert_eq!("Lfu".parse::<ReplacementPolicy>().unwrap(), ReplacementPolicy::Lfu);
        assert!("clock".parse::<ReplacementPolicy>().is_err());

        assert_eq!(ReplacementPolicy::Fifo.to_string(), "FIFO");
    }
}

//! Simulation statistics for monitoring and reporting.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one simulation run.
#[derive(Debug, Default)]
pub struct SimStats {
    /// Total number of page accesses.
    accesses: AtomicU64,
    /// Accesses satisfied by a resident page.
    hits: AtomicU64,
    /// Accesses to a non-resident page.
    faults: AtomicU64,
    /// Pages loaded into a frame (free pool or freed by eviction).
    loads: AtomicU64,
    /// Resident pages evicted to make room.
    evictions: AtomicU64,
}

impl SimStats {
    /// Creates new statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an access.
    #[inline]
    pub fn record_access(&self) {
        self.accesses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a hit.
    #[inline]
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a fault.
    #[inline]
    pub fn record_fault(&self) {
        self.faults.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a page load.
    #[inline]
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an eviction.
    #[inline]
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns total accesses.
    #[must_use]
    pub fn accesses(&self) -> u64 {
        self.accesses.load(Ordering::Relaxed)
    }

    /// Returns hits.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns faults.
    #[must_use]
    pub fn faults(&self) -> u64 {
        self.faults.load(Ordering::Relaxed)
    }

    /// Returns page loads.
    #[must_use]
    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    /// Returns evictions.
    #[must_use]
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Returns the hit ratio (0.0 to 1.0).
    #[must_use]
    pub fn hit_ratio(&self) -> f64 {
        let accesses = self.accesses();
        if accesses == 0 {
            0.0
        } else {
            self.hits() as f64 / accesses as f64
        }
    }

    /// Returns the fault ratio (0.0 to 1.0).
    #[must_use]
    pub fn fault_ratio(&self) -> f64 {
        let accesses = self.accesses();
        if accesses == 0 {
            0.0
        } else {
            self.faults() as f64 / accesses as f64
        }
    }

    /// Resets all counters.
    pub fn reset(&self) {
        self.accesses.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.faults.store(0, Ordering::Relaxed);
        self.loads.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}

impl Clone for SimStats {
    fn clone(&self) -> Self {
        Self {
            accesses: AtomicU64::new(self.accesses()),
            hits: AtomicU64::new(self.hits()),
            faults: AtomicU64::new(self.faults()),
            loads: AtomicU64::new(self.loads()),
            evictions: AtomicU64::new(self.evictions()),
        }
    }
}

impl std::fmt::Display for SimStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SimStats {{ accesses: {}, hits: {}, faults: {}, fault_ratio: {:.2}%, evictions: {} }}",
            self.accesses(),
            self.hits(),
            self.faults(),
            self.fault_ratio() * 100.0,
            self.evictions()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = SimStats::new();

        stats.record_access();
        stats.record_hit();
        stats.record_access();
        stats.record_fault();
        stats.record_load();

        assert_eq!(stats.accesses(), 2);
        assert_eq!(stats.hits(), 1);
        assert_eq!(stats.faults(), 1);
        assert_eq!(stats.loads(), 1);
        assert!((stats.hit_ratio() - 0.5).abs() < 0.001);
        assert!((stats.fault_ratio() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_empty_ratios() {
        let stats = SimStats::new();
        assert_eq!(stats.hit_ratio(), 0.0);
        assert_eq!(stats.fault_ratio(), 0.0);
    }

    #[test]
    fn test_reset() {
        let stats = SimStats::new();
        stats.record_access();
        stats.record_fault();
        stats.reset();

        assert_eq!(stats.accesses(), 0);
        assert_eq!(stats.faults(), 0);
    }

    #[test]
    fn test_clone() {
        let stats = SimStats::new();
        stats.record_access();
        stats.record_eviction();

        let cloned = stats.clone();
        assert_eq!(cloned.accesses(), 1);
        assert_eq!(cloned.evictions(), 1);
    }
}

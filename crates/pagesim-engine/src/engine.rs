//! The paging engine.
//!
//! Owns the page table, the free-frame pool, and the logical clock, and
//! drives the shared load/evict/hit state machine for all three policies.

use parking_lot::Mutex;
use tracing::{debug, trace};

use pagesim_common::error::{SimError, SimResult};
use pagesim_common::types::{FrameId, PageId, Tick};

use crate::config::EngineConfig;
use crate::event::{AccessEvent, AccessOutcome};
use crate::policy::ReplacementPolicy;
use crate::pool::FramePool;
use crate::stats::SimStats;
use crate::table::PageTable;

/// Deterministic, single-threaded page replacement engine.
///
/// An access resolves in priority order: hit on a resident page, load into a
/// free frame, or replacement of a policy-chosen victim. The engine trusts
/// caller-supplied ticks to be non-decreasing in single-step use and
/// generates its own in batch replay; both drive the identical state machine.
///
/// State persists across calls: a second [`replay`](Self::replay) continues
/// where the first ended. Use [`reset`](Self::reset) or a fresh engine for a
/// fresh simulation.
///
/// # Example
///
/// ```rust
/// use pagesim_engine::{EngineConfig, PagingEngine, ReplacementPolicy};
/// use pagesim_common::types::PageId;
///
/// let config = EngineConfig::new(ReplacementPolicy::Lru, 8, 2);
/// let mut engine = PagingEngine::new(config).unwrap();
///
/// let refs: Vec<PageId> = [0, 1, 0, 2].into_iter().map(PageId::new).collect();
/// assert_eq!(engine.replay(&refs).unwrap(), 3);
/// assert!(engine.is_resident(PageId::new(0)));
/// assert!(!engine.is_resident(PageId::new(1)));
/// ```
#[derive(Debug)]
pub struct PagingEngine {
    config: EngineConfig,
    table: PageTable,
    pool: FramePool,
    clock: Tick,
    stats: SimStats,
}

impl PagingEngine {
    /// Creates an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration error kind if `config` fails validation;
    /// a constructed engine never fails for configuration reasons later.
    pub fn new(config: EngineConfig) -> SimResult<Self> {
        config.validate().map_err(SimError::invalid_config)?;
        Ok(Self {
            table: PageTable::new(config.page_count),
            pool: FramePool::new(config.frame_count),
            clock: Tick::ZERO,
            stats: SimStats::new(),
            config,
        })
    }

    /// Accesses `page` at the caller-supplied tick and returns the frame
    /// now holding it.
    ///
    /// # Errors
    ///
    /// Out-of-range pages are rejected with the engine untouched. An
    /// internal error is returned if the free pool is exhausted yet no
    /// resident victim exists, which indicates a bug.
    pub fn access(&mut self, page: PageId, at: Tick) -> SimResult<FrameId> {
        self.apply(page, at).map(|event| event.frame)
    }

    /// Advances the internal clock by one tick and accesses `page`.
    ///
    /// This is the batch building block: replaying a trace is one `step`
    /// per reference, with ticks `1, 2, 3, …` on a fresh engine.
    pub fn step(&mut self, page: PageId) -> SimResult<AccessEvent> {
        self.apply(page, self.clock.next())
    }

    /// Replays a reference sequence and returns the number of faults.
    ///
    /// Continues from the engine's current state; there is no implicit
    /// reset between calls.
    pub fn replay(&mut self, refs: &[PageId]) -> SimResult<u64> {
        let mut faults = 0;
        for &page in refs {
            if self.step(page)?.is_fault() {
                faults += 1;
            }
        }
        Ok(faults)
    }

    /// Replays a reference sequence and returns the per-reference events.
    pub fn replay_trace(&mut self, refs: &[PageId]) -> SimResult<Vec<AccessEvent>> {
        refs.iter().map(|&page| self.step(page)).collect()
    }

    fn apply(&mut self, page: PageId, at: Tick) -> SimResult<AccessEvent> {
        // Bounds check before any mutation so failures leave no trace.
        let resident_frame = self.table.entry(page)?.frame();

        self.stats.record_access();
        self.clock = at;

        if let Some(frame) = resident_frame {
            self.stats.record_hit();
            self.table.entry_mut(page)?.touch(at);
            trace!(page = %page, frame = %frame, at = %at, "hit");
            return Ok(AccessEvent {
                page,
                frame,
                at,
                outcome: AccessOutcome::Hit,
            });
        }

        self.stats.record_fault();

        if let Some(frame) = self.pool.pop() {
            self.stats.record_load();
            self.table.entry_mut(page)?.load(frame, at);
            debug!(page = %page, frame = %frame, at = %at, "loaded into free frame");
            return Ok(AccessEvent {
                page,
                frame,
                at,
                outcome: AccessOutcome::Loaded,
            });
        }

        let (victim, frame) = self.select_victim().ok_or_else(|| {
            SimError::internal("free pool exhausted but no resident page to evict")
        })?;

        self.stats.record_eviction();
        self.stats.record_load();
        self.table.entry_mut(victim)?.invalidate();
        self.table.entry_mut(page)?.load(frame, at);
        debug!(page = %page, victim = %victim, frame = %frame, at = %at, "replaced");

        Ok(AccessEvent {
            page,
            frame,
            at,
            outcome: AccessOutcome::Replaced { victim },
        })
    }

    /// Picks the eviction victim under the configured policy.
    fn select_victim(&self) -> Option<(PageId, FrameId)> {
        let policy = self.config.policy;
        self.table
            .resident()
            .min_by_key(|&(page, entry)| policy.victim_rank(page, entry))
            .and_then(|(page, entry)| entry.frame().map(|frame| (page, frame)))
    }

    /// Returns true if `page` currently occupies a frame.
    #[must_use]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.table
            .entry(page)
            .map(|entry| entry.is_resident())
            .unwrap_or(false)
    }

    /// Returns the frame holding `page`, if resident.
    #[must_use]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.table.entry(page).ok().and_then(|entry| entry.frame())
    }

    /// Returns a frame-indexed view of the resident pages.
    ///
    /// Index `i` holds the page occupying frame `i`, or `None` while the
    /// frame has never been used.
    #[must_use]
    pub fn frames(&self) -> Vec<Option<PageId>> {
        let mut view = vec![None; self.config.frame_count as usize];
        for (page, entry) in self.table.resident() {
            if let Some(frame) = entry.frame() {
                view[frame.index()] = Some(page);
            }
        }
        view
    }

    /// Returns the number of resident pages.
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.table.resident_count()
    }

    /// Returns the number of never-used frames remaining in the pool.
    #[must_use]
    pub fn free_frames(&self) -> usize {
        self.pool.free_count()
    }

    /// Returns the configured replacement policy.
    #[must_use]
    pub fn policy(&self) -> ReplacementPolicy {
        self.config.policy
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the current logical clock value.
    #[must_use]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Returns the run statistics.
    #[must_use]
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Resets the engine to its freshly constructed state.
    pub fn reset(&mut self) {
        self.table.reset();
        self.pool.reset();
        self.clock = Tick::ZERO;
        self.stats.reset();
    }
}

/// A thread-safe wrapper around [`PagingEngine`].
///
/// The engine itself is single-threaded by design; this wrapper serializes
/// all callers behind one exclusive lock for use from a concurrent host.
pub struct SyncPagingEngine {
    inner: Mutex<PagingEngine>,
}

impl SyncPagingEngine {
    /// Creates a new synchronized engine.
    pub fn new(config: EngineConfig) -> SimResult<Self> {
        Ok(Self {
            inner: Mutex::new(PagingEngine::new(config)?),
        })
    }

    /// Accesses `page` at the caller-supplied tick.
    pub fn access(&self, page: PageId, at: Tick) -> SimResult<FrameId> {
        self.inner.lock().access(page, at)
    }

    /// Advances the clock and accesses `page`.
    pub fn step(&self, page: PageId) -> SimResult<AccessEvent> {
        self.inner.lock().step(page)
    }

    /// Replays a reference sequence and returns the fault count.
    pub fn replay(&self, refs: &[PageId]) -> SimResult<u64> {
        self.inner.lock().replay(refs)
    }

    /// Returns true if `page` currently occupies a frame.
    #[must_use]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.inner.lock().is_resident(page)
    }

    /// Returns the frame holding `page`, if resident.
    #[must_use]
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.inner.lock().frame_of(page)
    }

    /// Returns a snapshot of the run statistics.
    #[must_use]
    pub fn stats(&self) -> SimStats {
        self.inner.lock().stats().clone()
    }

    /// Resets the engine to its freshly constructed state.
    pub fn reset(&self) {
        self.inner.lock().reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(policy: ReplacementPolicy, pages: u32, frames: u32) -> PagingEngine {
        PagingEngine::new(EngineConfig::new(policy, pages, frames)).unwrap()
    }

    fn pages(refs: &[u32]) -> Vec<PageId> {
        refs.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_hit_then_fault() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 2);

        let first = e.step(PageId::new(1)).unwrap();
        assert_eq!(first.outcome, AccessOutcome::Loaded);
        assert_eq!(first.frame, FrameId::new(0));
        assert_eq!(first.at, Tick::new(1));

        let second = e.step(PageId::new(1)).unwrap();
        assert_eq!(second.outcome, AccessOutcome::Hit);
        assert_eq!(second.frame, FrameId::new(0));

        assert_eq!(e.stats().hits(), 1);
        assert_eq!(e.stats().faults(), 1);
    }

    #[test]
    fn test_free_frames_consumed_in_order() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 3);

        assert_eq!(e.access(PageId::new(4), Tick::new(1)).unwrap(), FrameId::new(0));
        assert_eq!(e.access(PageId::new(5), Tick::new(2)).unwrap(), FrameId::new(1));
        assert_eq!(e.access(PageId::new(6), Tick::new(3)).unwrap(), FrameId::new(2));
        assert_eq!(e.free_frames(), 0);
    }

    #[test]
    fn test_replacement_reuses_victim_frame() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 2);
        e.replay(&pages(&[1, 2])).unwrap();

        let event = e.step(PageId::new(3)).unwrap();
        assert_eq!(event.victim(), Some(PageId::new(1)));
        // Page 1 held frame 0; page 3 takes it over
        assert_eq!(event.frame, FrameId::new(0));
        assert!(!e.is_resident(PageId::new(1)));
        assert_eq!(e.frame_of(PageId::new(3)), Some(FrameId::new(0)));
    }

    #[test]
    fn test_hit_preserves_frame_and_load_tick() {
        let mut e = engine(ReplacementPolicy::Lru, 8, 2);
        e.access(PageId::new(2), Tick::new(1)).unwrap();

        let frame_before = e.frame_of(PageId::new(2));
        e.access(PageId::new(2), Tick::new(5)).unwrap();
        assert_eq!(e.frame_of(PageId::new(2)), frame_before);
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut e = engine(ReplacementPolicy::Fifo, 4, 2);
        e.replay(&pages(&[0, 1])).unwrap();

        let err = e.access(PageId::new(4), Tick::new(9)).unwrap_err();
        assert!(matches!(err, SimError::PageOutOfRange { .. }));

        // Nothing moved: residency, clock, and stats are as before
        assert_eq!(e.resident_count(), 2);
        assert_eq!(e.clock(), Tick::new(2));
        assert_eq!(e.stats().accesses(), 2);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let err = PagingEngine::new(EngineConfig::new(ReplacementPolicy::Lru, 0, 2)).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));

        let err = PagingEngine::new(EngineConfig::new(ReplacementPolicy::Lru, 8, 0)).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));
    }

    #[test]
    fn test_frames_view() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 3);
        e.replay(&pages(&[7, 3])).unwrap();

        assert_eq!(
            e.frames(),
            vec![Some(PageId::new(7)), Some(PageId::new(3)), None]
        );
    }

    #[test]
    fn test_replay_continues_state() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 2);
        assert_eq!(e.replay(&pages(&[1, 2])).unwrap(), 2);
        // Same pages again: all hits, no new faults
        assert_eq!(e.replay(&pages(&[1, 2])).unwrap(), 0);
        assert_eq!(e.clock(), Tick::new(4));
    }

    #[test]
    fn test_replay_trace_events() {
        let mut e = engine(ReplacementPolicy::Fifo, 8, 2);
        let events = e.replay_trace(&pages(&[1, 2, 1, 3])).unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].outcome, AccessOutcome::Loaded);
        assert_eq!(events[1].outcome, AccessOutcome::Loaded);
        assert_eq!(events[2].outcome, AccessOutcome::Hit);
        assert_eq!(events[3].victim(), Some(PageId::new(1)));
        assert_eq!(events[3].at, Tick::new(4));
    }

    #[test]
    fn test_reset() {
        let mut e = engine(ReplacementPolicy::Lfu, 8, 2);
        e.replay(&pages(&[1, 2, 3])).unwrap();

        e.reset();
        assert_eq!(e.resident_count(), 0);
        assert_eq!(e.free_frames(), 2);
        assert_eq!(e.clock(), Tick::ZERO);
        assert_eq!(e.stats().accesses(), 0);

        // Behaves like a fresh engine
        assert_eq!(e.replay(&pages(&[1, 2, 1])).unwrap(), 2);
    }

    #[test]
    fn test_sync_engine() {
        let e = SyncPagingEngine::new(EngineConfig::new(ReplacementPolicy::Lru, 8, 2)).unwrap();

        e.replay(&pages(&[1, 2, 1])).unwrap();
        assert!(e.is_resident(PageId::new(1)));
        assert_eq!(e.stats().faults(), 2);

        e.reset();
        assert!(!e.is_resident(PageId::new(1)));
    }
}

//! Simulator - the sequence driver.
//!
//! The [`Simulator`] provides:
//! - Ownership of one run's page table, free frame pool and logical clock
//! - Reference-by-reference replay through [`process_one_access`]
//! - Fault and eviction statistics
//! - A runtime-swappable eviction policy

use std::fmt;

use crate::common::config::{validate_reference_len, SimulatorConfig};
use crate::common::{PageId, Result};
use crate::paging::free_frames::FreeFramePool;
use crate::paging::handler::{process_one_access, Access};
use crate::paging::page_table::PageTable;
use crate::paging::replacer::Policy;
use crate::paging::stats::SimulationStats;
use crate::paging::{LogicalClock, Timestamp};

/// Replays reference strings against a bounded set of frames.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                        Simulator                         │
/// │  ┌──────────────┐   ┌────────────────────────────────┐   │
/// │  │    clock     │   │   table: PageTable (arena)     │   │
/// │  │ 1, 2, 3, ... │──▶│  [Slot0] [Slot1] [Slot2] ...   │   │
/// │  └──────────────┘   └────────────────────────────────┘   │
/// │  ┌──────────────┐   ┌──────────────┐  ┌──────────────┐   │
/// │  │ free_frames  │   │    policy    │  │    stats     │   │
/// │  │  (drains)    │   │ FIFO|LRU|LFU │  │   counters   │   │
/// │  └──────────────┘   └──────────────┘  └──────────────┘   │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// State starts empty and lives for one simulation. Statistics accumulate
/// across calls to [`access`](Self::access) and [`run`](Self::run).
///
/// # Usage
/// ```
/// use pagesim::{Policy, Simulator, SimulatorConfig};
///
/// let mut sim = Simulator::new(SimulatorConfig::new(3, Policy::Fifo)).unwrap();
/// let report = sim.run(&[1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(report.faults(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Fixed arena of residency slots.
    table: PageTable,

    /// Frames not yet assigned; never refilled.
    free_frames: FreeFramePool,

    /// Driver-owned logical clock.
    clock: LogicalClock,

    /// Eviction rule applied on faults once the pool is drained.
    policy: Policy,

    stats: SimulationStats,

    /// Number of frames (immutable after construction).
    frame_capacity: usize,
}

impl Simulator {
    /// Create a simulator with an empty page table and a full free pool.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCapacity` if the capacity is 0 or above the maximum
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            table: PageTable::new(config.frame_capacity)?,
            free_frames: FreeFramePool::new(config.frame_capacity)?,
            clock: LogicalClock::new(),
            policy: config.policy,
            stats: SimulationStats::default(),
            frame_capacity: config.frame_capacity,
        })
    }

    // ========================================================================
    // Public API: Replay
    // ========================================================================

    /// Process a single reference at the next clock tick.
    pub fn access(&mut self, page_id: impl Into<PageId>) -> Result<Access> {
        let page_id = page_id.into();
        let now = self.clock.tick();

        let access = process_one_access(
            &mut self.table,
            page_id,
            &mut self.free_frames,
            now,
            &self.policy,
        )?;

        self.stats.record(&access);
        Ok(access)
    }

    /// Replay a whole reference string.
    ///
    /// The length is checked before anything is processed, so a run either
    /// covers every reference or none.
    ///
    /// # Errors
    /// - `Error::ReferenceStringTooLong` if `references` exceeds the maximum
    pub fn run<P>(&mut self, references: &[P]) -> Result<SimulationReport>
    where
        P: Copy + Into<PageId>,
    {
        validate_reference_len(references.len())?;

        log::debug!(
            "replaying {} references with {} across {} frames",
            references.len(),
            self.policy,
            self.frame_capacity
        );

        for &page in references {
            self.access(page)?;
        }

        let report = self.report();
        log::debug!("{} run finished: {}", self.policy, report.stats);
        Ok(report)
    }

    /// Summary of everything processed so far.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            policy: self.policy,
            frame_capacity: self.frame_capacity,
            stats: self.stats,
        }
    }

    // ========================================================================
    // Public API: Policy
    // ========================================================================

    /// Current eviction policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Swap the eviction policy mid-run.
    ///
    /// Every policy reads the same per-slot metadata, so resident pages keep
    /// their history and the next eviction simply applies the new rule.
    pub fn set_policy(&mut self, policy: Policy) {
        if policy != self.policy {
            log::debug!("switching policy {} -> {}", self.policy, policy);
            self.policy = policy;
        }
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Statistics so far.
    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    /// Number of frames.
    pub fn frame_capacity(&self) -> usize {
        self.frame_capacity
    }

    /// Frames never yet assigned.
    pub fn free_frame_count(&self) -> usize {
        self.free_frames.len()
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.table.resident_count()
    }

    /// Read-only view of the page table.
    pub fn page_table(&self) -> &PageTable {
        &self.table
    }

    /// Timestamp the next reference will receive.
    pub fn now(&self) -> Timestamp {
        self.clock.peek()
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub policy: Policy,
    pub frame_capacity: usize,
    pub stats: SimulationStats,
}

impl SimulationReport {
    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with {} frames: {} faults in {} references",
            self.policy, self.frame_capacity, self.stats.faults, self.stats.references
        )
    }
}

/// Count page faults for `references` under `policy` with `frame_capacity`
/// frames, starting from an empty page table.
///
/// # Example
/// ```
/// use pagesim::{count_faults, Policy};
///
/// let faults = count_faults(Policy::Lru, &[1u32, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3).unwrap();
/// assert_eq!(faults, 10);
/// ```
///
/// # Errors
/// - `Error::InvalidFrameCapacity` if `frame_capacity` is 0 or too large
/// - `Error::ReferenceStringTooLong` if `references` is too long
pub fn count_faults<P>(policy: Policy, references: &[P], frame_capacity: usize) -> Result<u64>
where
    P: Copy + Into<PageId>,
{
    let mut sim = Simulator::new(SimulatorConfig::new(frame_capacity, policy))?;
    Ok(sim.run(references)?.faults())
}

/// Replay `references` under every policy, each from an empty table.
///
/// Reports come back in [`Policy::ALL`] order.
pub fn compare_policies<P>(references: &[P], frame_capacity: usize) -> Result<Vec<SimulationReport>>
where
    P: Copy + Into<PageId>,
{
    Policy::ALL
        .iter()
        .map(|&policy| Simulator::new(SimulatorConfig::new(frame_capacity, policy))?.run(references))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::REFERENCE_MAX;
    use crate::common::Error;
    use crate::paging::handler::AccessKind;

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    fn create_sim(capacity: usize, policy: Policy) -> Simulator {
        Simulator::new(SimulatorConfig::new(capacity, policy)).unwrap()
    }

    #[test]
    fn test_new_simulator_is_empty() {
        let sim = create_sim(4, Policy::Lru);
        assert_eq!(sim.frame_capacity(), 4);
        assert_eq!(sim.free_frame_count(), 4);
        assert_eq!(sim.resident_count(), 0);
        assert_eq!(sim.now(), Timestamp::new(1));
        assert_eq!(sim.stats(), SimulationStats::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = Simulator::new(SimulatorConfig::new(0, Policy::Fifo));
        assert!(matches!(result, Err(Error::InvalidFrameCapacity { .. })));
    }

    #[test]
    fn test_access_advances_clock() {
        let mut sim = create_sim(2, Policy::Fifo);
        sim.access(1u32).unwrap();
        sim.access(1u32).unwrap();

        assert_eq!(sim.now(), Timestamp::new(3));
        let stats = sim.stats();
        assert_eq!(stats.references, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.faults, 1);
    }

    #[test]
    fn test_run_classic_sequence() {
        assert_eq!(count_faults(Policy::Fifo, &BELADY, 3).unwrap(), 9);
        assert_eq!(count_faults(Policy::Lru, &BELADY, 3).unwrap(), 10);
    }

    #[test]
    fn test_run_reports_evictions() {
        let mut sim = create_sim(3, Policy::Fifo);
        let report = sim.run(&BELADY).unwrap();

        assert_eq!(report.stats.references, 12);
        assert_eq!(report.stats.hits, 3);
        // First three faults are loads
        assert_eq!(report.stats.evictions, 6);
        assert_eq!(sim.free_frame_count(), 0);
        assert_eq!(sim.resident_count(), 3);
    }

    #[test]
    fn test_run_too_long_processes_nothing() {
        let mut sim = create_sim(3, Policy::Lru);
        let refs = vec![1u32; REFERENCE_MAX + 1];

        let result = sim.run(&refs);
        assert!(matches!(result, Err(Error::ReferenceStringTooLong { .. })));
        assert_eq!(sim.stats().references, 0);
    }

    #[test]
    fn test_set_policy_mid_run() {
        let mut sim = create_sim(2, Policy::Fifo);
        sim.run(&[1u32, 2, 1]).unwrap();

        // Under FIFO page 1 would go; under LRU page 2 goes
        sim.set_policy(Policy::Lru);
        let access = sim.access(3u32).unwrap();

        assert_eq!(access.kind, AccessKind::Replace { evicted: PageId::new(2) });
        assert_eq!(sim.report().policy, Policy::Lru);
    }

    #[test]
    fn test_compare_policies() {
        let reports = compare_policies(&BELADY, 3).unwrap();
        let policies: Vec<Policy> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());

        assert_eq!(reports[0].faults(), 9);
        assert_eq!(reports[1].faults(), 10);
        assert!(reports.iter().all(|r| r.stats.references == 12));
    }

    #[test]
    fn test_report_display() {
        let report = create_sim(3, Policy::Fifo).run(&BELADY).unwrap();
        assert_eq!(
            report.to_string(),
            "fifo with 3 frames: 9 faults in 12 references"
        );
    }
}

//! Simulation statistics tracking.

use std::fmt;

use crate::paging::handler::{Access, AccessKind};

/// Counters collected while replaying a reference string.
///
/// The simulator is single-owner, so these are plain integers; a copy is a
/// consistent snapshot.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let stats = SimulationStats::default();
/// assert_eq!(stats.hit_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References processed.
    pub references: u64,

    /// References satisfied by a resident page.
    pub hits: u64,

    /// References that required a load.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Fold one access outcome into the counters.
    pub fn record(&mut self, access: &Access) {
        self.references += 1;
        match access.kind {
            AccessKind::Hit => self.hits += 1,
            AccessKind::Load => self.faults += 1,
            AccessKind::Replace { .. } => {
                self.faults += 1;
                self.evictions += 1;
            }
        }
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

//! Configuration constants and per-run settings.

use crate::common::{Error, Result};
use crate::paging::replacer::Policy;

/// Maximum number of slots a page table may hold.
///
/// The page table is a fixed arena, so this also bounds the resident set.
pub const TABLE_MAX: usize = 100;

/// Maximum number of physical frames in the free frame pool.
pub const POOL_MAX: usize = 100;

/// Maximum length of a single reference string.
pub const REFERENCE_MAX: usize = 100;

/// Settings for one simulation run.
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulatorConfig};
///
/// let config = SimulatorConfig::new(3, Policy::Lru);
/// assert!(config.validate().is_ok());
/// assert!(SimulatorConfig::new(0, Policy::Lru).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of physical frames (and page table slots) available.
    pub frame_capacity: usize,

    /// Eviction policy used once the free pool is drained.
    pub policy: Policy,
}

impl SimulatorConfig {
    /// Create a new config.
    pub fn new(frame_capacity: usize, policy: Policy) -> Self {
        Self {
            frame_capacity,
            policy,
        }
    }

    /// Check the frame capacity against the fixed bounds.
    ///
    /// A zero-frame pool has no eviction victim, so it is rejected here
    /// rather than discovered mid-run.
    pub fn validate(&self) -> Result<()> {
        let max = POOL_MAX.min(TABLE_MAX);
        if self.frame_capacity == 0 || self.frame_capacity > max {
            log::warn!(
                "rejecting frame capacity {} (allowed 1..={})",
                self.frame_capacity,
                max
            );
            return Err(Error::InvalidFrameCapacity {
                capacity: self.frame_capacity,
                max,
            });
        }
        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(3, Policy::Fifo)
    }
}

/// Check a reference string length against [`REFERENCE_MAX`].
pub fn validate_reference_len(len: usize) -> Result<()> {
    if len > REFERENCE_MAX {
        log::warn!("rejecting reference string of length {}", len);
        return Err(Error::ReferenceStringTooLong {
            len,
            max: REFERENCE_MAX,
        });
    }
    Ok(())
}

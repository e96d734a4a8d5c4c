//! Eviction policy implementations (replacers).
//!
//! Every policy answers one question: which resident slot should be reused
//! when the free frame pool is drained. Hits, loads and the clock are handled
//! identically for all of them by [`process_one_access`](super::process_one_access).
//!
//! - [`FifoReplacer`] - oldest arrival
//! - [`LruReplacer`] - oldest last access
//! - [`LfuReplacer`] - fewest accesses, then oldest arrival
//! - [`Policy`] - runtime-selectable wrapper over the three

use std::fmt;
use std::str::FromStr;

use crate::common::Error;
use crate::paging::page_table::{PageTable, PageTableEntry, SlotId};

mod fifo;
mod lfu;
mod lru;

pub use fifo::FifoReplacer;
pub use lfu::LfuReplacer;
pub use lru::LruReplacer;

/// A victim selection rule.
pub trait Replacer {
    /// Short lowercase name, e.g. `"lru"`.
    fn name(&self) -> &'static str;

    /// Choose the resident slot to evict.
    ///
    /// Returns None only when no slot is resident.
    fn pick_victim(&self, table: &PageTable) -> Option<SlotId>;
}

/// Resident slot with the smallest `key`.
///
/// Keys end in the arrival time, so equal primary keys go to the page loaded
/// first. `min_by_key` keeps the first minimum, so a complete tie goes to the
/// lowest slot.
pub(crate) fn min_resident_by<K, F>(table: &PageTable, key: F) -> Option<SlotId>
where
    K: Ord,
    F: Fn(&PageTableEntry) -> K,
{
    table
        .resident()
        .min_by_key(|(_, entry)| key(entry))
        .map(|(slot, _)| slot)
}

/// Runtime-selectable replacement policy.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "lfu".parse().unwrap();
/// assert_eq!(policy, Policy::Lfu);
/// assert_eq!(policy.to_string(), "lfu");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Lfu,
}

impl Policy {
    /// All policies, in a stable order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Lfu];
}

impl Replacer for Policy {
    fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => FifoReplacer.name(),
            Policy::Lru => LruReplacer.name(),
            Policy::Lfu => LfuReplacer.name(),
        }
    }

    fn pick_victim(&self, table: &PageTable) -> Option<SlotId> {
        match self {
            Policy::Fifo => FifoReplacer.pick_victim(table),
            Policy::Lru => LruReplacer.pick_victim(table),
            Policy::Lfu => LfuReplacer.pick_victim(table),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "lfu" => Ok(Policy::Lfu),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

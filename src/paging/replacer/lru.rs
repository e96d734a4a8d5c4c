//! LRU (Least-Recently-Used) replacement policy.

use super::{min_resident_by, Replacer};
use crate::paging::page_table::{PageTable, SlotId};

/// Evicts the page whose last reference is oldest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruReplacer;

impl Replacer for LruReplacer {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn pick_victim(&self, table: &PageTable) -> Option<SlotId> {
        min_resident_by(table, |e| (e.last_access_time(), e.arrival_time()))
    }
}

//! LFU (Least-Frequently-Used) replacement policy.

use super::{min_resident_by, Replacer};
use crate::paging::page_table::{PageTable, SlotId};

/// Evicts the page with the fewest references since it was loaded.
///
/// Ties go to the page that arrived first. Counts restart at 1 on reload, so
/// a page that was popular before eviction gets no credit afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct LfuReplacer;

impl Replacer for LfuReplacer {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn pick_victim(&self, table: &PageTable) -> Option<SlotId> {
        min_resident_by(table, |e| (e.access_count(), e.arrival_time()))
    }
}

//! FIFO (First-In-First-Out) replacement policy.

use super::{min_resident_by, Replacer};
use crate::paging::page_table::{PageTable, SlotId};

/// Evicts the page that was loaded earliest.
///
/// Hits do not reorder pages: only `arrival_time` matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoReplacer;

impl Replacer for FifoReplacer {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn pick_victim(&self, table: &PageTable) -> Option<SlotId> {
        min_resident_by(table, |e| e.arrival_time())
    }
}

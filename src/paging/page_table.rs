//! Page table - the fixed arena of residency slots.
//!
//! A [`PageTable`] holds one [`PageTableEntry`] per slot. Slots are addressed
//! by [`SlotId`], never by page number, so victim selection compares slots by
//! their timestamps alone.

use std::fmt;

use crate::common::config::TABLE_MAX;
use crate::common::{Error, FrameNumber, PageId, Result};
use crate::paging::Timestamp;

/// Stable index of a slot in the page table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new SlotId.
    #[inline]
    pub fn new(index: usize) -> Self {
        SlotId(index)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Residency metadata for one slot.
///
/// Fields are only written through [`PageTable::install`] and
/// [`PageTable::record_hit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    valid: bool,
    page_id: PageId,
    frame_number: FrameNumber,
    arrival_time: Timestamp,
    last_access_time: Timestamp,
    access_count: u64,
}

impl PageTableEntry {
    const EMPTY: PageTableEntry = PageTableEntry {
        valid: false,
        page_id: PageId(0),
        frame_number: FrameNumber(0),
        arrival_time: Timestamp(0),
        last_access_time: Timestamp(0),
        access_count: 0,
    };

    /// Whether the slot currently holds a resident page.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    #[inline]
    pub fn frame_number(&self) -> FrameNumber {
        self.frame_number
    }

    /// When the resident page was loaded. Unchanged by hits.
    #[inline]
    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    /// When the resident page was last referenced.
    #[inline]
    pub fn last_access_time(&self) -> Timestamp {
        self.last_access_time
    }

    /// References satisfied by this entry since it was loaded.
    #[inline]
    pub fn access_count(&self) -> u64 {
        self.access_count
    }
}

/// Bounded mapping from page identity to residency metadata.
///
/// # Example
/// ```
/// use pagesim::paging::{PageTable, SlotId, Timestamp};
/// use pagesim::{FrameNumber, PageId};
///
/// let mut table = PageTable::new(2).unwrap();
/// table.install(SlotId::new(0), PageId::new(4), FrameNumber::new(1), Timestamp::new(1));
///
/// assert_eq!(table.lookup(PageId::new(4)), Some(SlotId::new(0)));
/// assert!(!table.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Box<[PageTableEntry]>,

    /// Number of valid entries.
    resident: usize,
}

impl PageTable {
    /// Create an empty table with `capacity` slots.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCapacity` if `capacity` exceeds [`TABLE_MAX`]
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > TABLE_MAX {
            return Err(Error::InvalidFrameCapacity {
                capacity,
                max: TABLE_MAX,
            });
        }

        Ok(Self {
            entries: vec![PageTableEntry::EMPTY; capacity].into_boxed_slice(),
            resident: 0,
        })
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of valid (resident) entries.
    #[inline]
    pub fn resident_count(&self) -> usize {
        self.resident
    }

    /// Whether every slot holds a resident page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.resident == self.capacity()
    }

    /// Find the slot holding `page_id`, if it is resident.
    pub fn lookup(&self, page_id: PageId) -> Option<SlotId> {
        self.entries
            .iter()
            .position(|e| e.valid && e.page_id == page_id)
            .map(SlotId)
    }

    /// Whether `page_id` is resident.
    #[inline]
    pub fn contains(&self, page_id: PageId) -> bool {
        self.lookup(page_id).is_some()
    }

    /// First slot not holding a resident page.
    pub fn empty_slot(&self) -> Option<SlotId> {
        self.entries.iter().position(|e| !e.valid).map(SlotId)
    }

    /// Entry at `slot`, or None if out of range.
    #[inline]
    pub fn entry(&self, slot: SlotId) -> Option<&PageTableEntry> {
        self.entries.get(slot.0)
    }

    /// Iterate over valid entries with their slots, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = (SlotId, &PageTableEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.valid)
            .map(|(i, e)| (SlotId(i), e))
    }

    /// Make `slot` hold `page_id` in `frame`, loaded at `time`.
    ///
    /// Overwrites whatever the slot held before; this is both the first load
    /// into an empty slot and in-place reuse of an evicted one.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn install(&mut self, slot: SlotId, page_id: PageId, frame: FrameNumber, time: Timestamp) {
        debug_assert!(
            self.lookup(page_id).filter(|&s| s != slot).is_none(),
            "{} already resident in another slot",
            page_id
        );

        let entry = &mut self.entries[slot.0];
        if !entry.valid {
            self.resident += 1;
        }

        *entry = PageTableEntry {
            valid: true,
            page_id,
            frame_number: frame,
            arrival_time: time,
            last_access_time: time,
            access_count: 1,
        };
    }

    /// Record a reference to the page resident in `slot`.
    ///
    /// Returns the updated entry.
    ///
    /// # Panics
    /// Panics if `slot` is out of range or empty.
    pub fn record_hit(&mut self, slot: SlotId, time: Timestamp) -> &PageTableEntry {
        let entry = &mut self.entries[slot.0];
        assert!(entry.valid, "hit recorded on empty {}", slot);
        debug_assert!(time >= entry.last_access_time, "clock went backwards");

        entry.last_access_time = time;
        entry.access_count += 1;
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(n: u64) -> Timestamp {
        Timestamp::new(n)
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = PageTable::new(3).unwrap();
        assert_eq!(table.capacity(), 3);
        assert_eq!(table.resident_count(), 0);
        assert!(!table.is_full());
        assert_eq!(table.empty_slot(), Some(SlotId::new(0)));
        assert_eq!(table.resident().count(), 0);
    }

    #[test]
    fn test_table_too_large() {
        assert!(PageTable::new(TABLE_MAX).is_ok());
        assert!(PageTable::new(TABLE_MAX + 1).is_err());
    }

    #[test]
    fn test_install_sets_metadata() {
        let mut table = PageTable::new(2).unwrap();
        table.install(SlotId::new(0), PageId::new(9), FrameNumber::new(1), t(4));

        let entry = table.entry(SlotId::new(0)).unwrap();
        assert!(entry.is_valid());
        assert_eq!(entry.page_id(), PageId::new(9));
        assert_eq!(entry.frame_number(), FrameNumber::new(1));
        assert_eq!(entry.arrival_time(), t(4));
        assert_eq!(entry.last_access_time(), t(4));
        assert_eq!(entry.access_count(), 1);
        assert_eq!(table.resident_count(), 1);
    }

    #[test]
    fn test_record_hit() {
        let mut table = PageTable::new(1).unwrap();
        table.install(SlotId::new(0), PageId::new(1), FrameNumber::new(0), t(1));
        table.record_hit(SlotId::new(0), t(5));
        table.record_hit(SlotId::new(0), t(6));

        let entry = table.entry(SlotId::new(0)).unwrap();
        assert_eq!(entry.arrival_time(), t(1));
        assert_eq!(entry.last_access_time(), t(6));
        assert_eq!(entry.access_count(), 3);
    }

    #[test]
    #[should_panic(expected = "hit recorded on empty")]
    fn test_record_hit_on_empty_slot() {
        let mut table = PageTable::new(1).unwrap();
        table.record_hit(SlotId::new(0), t(1));
    }

    #[test]
    fn test_reinstall_resets_metadata() {
        let mut table = PageTable::new(1).unwrap();
        table.install(SlotId::new(0), PageId::new(1), FrameNumber::new(0), t(1));
        table.record_hit(SlotId::new(0), t(2));

        // Evict page 1 in place
        table.install(SlotId::new(0), PageId::new(2), FrameNumber::new(0), t(3));

        let entry = table.entry(SlotId::new(0)).unwrap();
        assert_eq!(entry.page_id(), PageId::new(2));
        assert_eq!(entry.arrival_time(), t(3));
        assert_eq!(entry.access_count(), 1);
        assert_eq!(table.resident_count(), 1);
        assert!(!table.contains(PageId::new(1)));
    }

    #[test]
    fn test_full_and_lookup() {
        let mut table = PageTable::new(2).unwrap();
        table.install(SlotId::new(0), PageId::new(3), FrameNumber::new(1), t(1));
        table.install(SlotId::new(1), PageId::new(8), FrameNumber::new(0), t(2));

        assert!(table.is_full());
        assert_eq!(table.empty_slot(), None);
        assert_eq!(table.lookup(PageId::new(8)), Some(SlotId::new(1)));
        assert_eq!(table.lookup(PageId::new(5)), None);

        let slots: Vec<SlotId> = table.resident().map(|(s, _)| s).collect();
        assert_eq!(slots, vec![SlotId::new(0), SlotId::new(1)]);
    }

    #[test]
    fn test_zero_capacity_table() {
        let table = PageTable::new(0).unwrap();
        assert!(table.is_full());
        assert_eq!(table.empty_slot(), None);
        assert_eq!(table.entry(SlotId::new(0)), None);
    }
}

//! Single-access handler - one reference, one state transition.

use std::fmt;

use crate::common::{Error, FrameNumber, PageId, Result};
use crate::paging::free_frames::FreeFramePool;
use crate::paging::page_table::{PageTable, SlotId};
use crate::paging::replacer::Replacer;
use crate::paging::Timestamp;

/// How a reference was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// The page was already resident.
    Hit,

    /// Fault served from the free frame pool.
    Load,

    /// Fault served by reusing `evicted`'s slot and frame.
    Replace { evicted: PageId },
}

/// Result of [`process_one_access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Frame now backing the referenced page.
    pub frame: FrameNumber,

    /// Slot now holding the referenced page.
    pub slot: SlotId,

    pub kind: AccessKind,
}

impl Access {
    /// Whether this reference was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !matches!(self.kind, AccessKind::Hit)
    }

    /// The page evicted to serve this reference, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self.kind {
            AccessKind::Replace { evicted } => Some(evicted),
            _ => None,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AccessKind::Hit => write!(f, "hit {} in {}", self.frame, self.slot),
            AccessKind::Load => write!(f, "fault, loaded into {} in {}", self.frame, self.slot),
            AccessKind::Replace { evicted } => write!(
                f,
                "fault, evicted {} from {} in {}",
                evicted, self.frame, self.slot
            ),
        }
    }
}

/// Serve one reference to `page_id` at time `now`.
///
/// 1. If the page is resident, record a hit.
/// 2. Otherwise, if a free frame remains, load the page into an empty slot.
/// 3. Otherwise, ask `replacer` for a victim and reuse its slot and frame.
///
/// The free pool is never replenished: evicted frames stay with their slot.
///
/// # Errors
/// - `Error::PageTableFull` if a free frame exists but no slot is empty
/// - `Error::NoVictim` if there is no free frame and nothing is resident
///
/// The table and pool are left untouched on error.
pub fn process_one_access<R: Replacer + ?Sized>(
    table: &mut PageTable,
    page_id: PageId,
    free_frames: &mut FreeFramePool,
    now: Timestamp,
    replacer: &R,
) -> Result<Access> {
    // Hit
    if let Some(slot) = table.lookup(page_id) {
        let frame = table.record_hit(slot, now).frame_number();
        log::trace!("{} {}: hit in {}", now, page_id, slot);
        return Ok(Access {
            frame,
            slot,
            kind: AccessKind::Hit,
        });
    }

    // Fault, free frame available
    if !free_frames.is_empty() {
        let slot = table.empty_slot().ok_or(Error::PageTableFull)?;
        if let Some(frame) = free_frames.pop() {
            table.install(slot, page_id, frame, now);
            log::trace!("{} {}: fault, loaded into {}", now, page_id, frame);
            return Ok(Access {
                frame,
                slot,
                kind: AccessKind::Load,
            });
        }
    }

    // Fault, evict in place
    let slot = replacer.pick_victim(table).ok_or(Error::NoVictim)?;
    let victim = *table.entry(slot).ok_or(Error::NoVictim)?;
    let frame = victim.frame_number();
    table.install(slot, page_id, frame, now);
    log::debug!(
        "{} {}: {} evicted {} from {}",
        now,
        page_id,
        replacer.name(),
        victim.page_id(),
        frame
    );

    Ok(Access {
        frame,
        slot,
        kind: AccessKind::Replace {
            evicted: victim.page_id(),
        },
    })
}

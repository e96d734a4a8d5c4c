//! Page replacement simulation.
//!
//! A fixed pool of frames backs a stream of page references. Every policy
//! shares the same page table, free pool, clock and access handler; only the
//! victim rule differs.
//!
//! # Components
//! - [`Simulator`] - The sequence driver, plus [`count_faults`] / [`compare_policies`]
//! - [`process_one_access`] - One reference, one state transition
//! - [`PageTable`] - Fixed arena of residency slots
//! - [`FreeFramePool`] - Frames not yet assigned
//! - [`LogicalClock`] - Explicit timestamps
//! - [`SimulationStats`] - Hit, fault and eviction counters
//! - [`replacer`] - Eviction policy implementations

mod clock;
mod free_frames;
mod handler;
mod page_table;
pub mod replacer;
mod simulator;
mod stats;

pub use clock::{LogicalClock, Timestamp};
pub use free_frames::FreeFramePool;
pub use handler::{process_one_access, Access, AccessKind};
pub use page_table::{PageTable, PageTableEntry, SlotId};
pub use simulator::{compare_policies, count_faults, SimulationReport, Simulator};
pub use stats::SimulationStats;

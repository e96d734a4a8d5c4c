//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Sequence Driver (paging::Simulator)           │   │
//! │  │      count_faults / compare_policies / LogicalClock      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Single-Access Handler (process_one_access)        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: FIFO | LRU | LFU          │   │   │
//! │  │   │          (swappable at runtime)                  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │     Page-Table State (PageTable + FreeFramePool)        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameNumber, Error, config)
//! - [`paging`] - Page table, access handler, policies and the simulator
//!
//! # Quick Start
//! ```
//! use pagesim::{count_faults, Policy};
//!
//! let refs = [1u32, 2, 1, 3];
//! assert_eq!(count_faults(Policy::Lfu, &refs, 2).unwrap(), 3);
//! ```

pub mod common;
pub mod paging;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulatorConfig, POOL_MAX, REFERENCE_MAX, TABLE_MAX};
pub use common::{Error, FrameNumber, PageId, Result};

pub use paging::replacer::{Policy, Replacer};
pub use paging::{
    compare_policies, count_faults, process_one_access, Access, AccessKind, SimulationReport,
    SimulationStats, Simulator,
};

//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The domain is closed (fixed maximum sizes), so every variant is a
/// configuration problem on the caller's side. None of them leave the page
/// table partially written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Frame capacity is zero or above the pool maximum.
    #[error("Invalid frame capacity {capacity} (must be 1..={max})")]
    InvalidFrameCapacity { capacity: usize, max: usize },

    /// Reference string exceeds the fixed maximum length.
    #[error("Reference string of length {len} exceeds maximum {max}")]
    ReferenceStringTooLong { len: usize, max: usize },

    /// A free frame exists but the page table has no empty slot for it.
    #[error("Page table is full but free frames remain")]
    PageTableFull,

    /// No free frame and no resident page to evict.
    ///
    /// Only reachable with an empty frame pool and an empty table.
    #[error("No eviction victim available")]
    NoVictim,

    /// A policy name did not match any known policy.
    #[error("Unknown replacement policy: {0}")]
    UnknownPolicy(String),
}

//! Free frame pool.

use crate::common::config::POOL_MAX;
use crate::common::{Error, FrameNumber, Result};

/// Stack of physical frames not yet assigned to any page.
///
/// The pool is filled once at setup and only drains: eviction reuses the
/// victim's frame in place and never pushes it back here.
#[derive(Debug, Clone)]
pub struct FreeFramePool {
    /// Available frames; `pop` takes from the end.
    frames: Vec<FrameNumber>,
}

impl FreeFramePool {
    /// Create a pool holding frames `0..size`.
    ///
    /// Frames are popped highest-first, matching a LIFO free list.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCapacity` if `size` exceeds [`POOL_MAX`]
    pub fn new(size: usize) -> Result<Self> {
        Self::from_frames((0..size).map(FrameNumber::new).collect())
    }

    /// Create a pool from an explicit list of frames.
    ///
    /// The last frame in `frames` is handed out first.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCapacity` if more than [`POOL_MAX`] frames are given
    pub fn from_frames(frames: Vec<FrameNumber>) -> Result<Self> {
        if frames.len() > POOL_MAX {
            return Err(Error::InvalidFrameCapacity {
                capacity: frames.len(),
                max: POOL_MAX,
            });
        }
        Ok(Self { frames })
    }

    /// Take a free frame, if any remain.
    #[inline]
    pub fn pop(&mut self) -> Option<FrameNumber> {
        self.frames.pop()
    }

    /// Number of frames still available.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the pool is drained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

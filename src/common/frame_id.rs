//! Physical frame number type.

use std::fmt;

/// Identifies a physical frame.
///
/// Frames are handed out by the free frame pool and are never confused with
/// page identities: a page is *assigned* a frame when it becomes resident.
///
/// # Example
/// ```
/// use pagesim::FrameNumber;
///
/// let frame = FrameNumber::new(5);
/// assert_eq!(frame.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameNumber(pub usize);

impl FrameNumber {
    /// Create a new FrameNumber.
    #[inline]
    pub fn new(n: usize) -> Self {
        FrameNumber(n)
    }
}

impl fmt::Display for FrameNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

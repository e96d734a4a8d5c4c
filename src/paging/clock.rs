//! Logical clock used to order references.

use std::fmt;

/// A logical point in time.
///
/// Arrival and last-access times are compared as timestamps, so recency and
/// age are defined purely by reference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a new Timestamp.
    #[inline]
    pub fn new(t: u64) -> Self {
        Timestamp(t)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}

/// Driver-owned monotonic clock.
///
/// Starts at 1 and advances once per processed reference. It is passed to
/// the access handler as a plain value, never shared.
///
/// # Example
/// ```
/// use pagesim::paging::{LogicalClock, Timestamp};
///
/// let mut clock = LogicalClock::new();
/// assert_eq!(clock.tick(), Timestamp::new(1));
/// assert_eq!(clock.tick(), Timestamp::new(2));
/// ```
#[derive(Debug, Clone)]
pub struct LogicalClock {
    next: u64,
}

impl LogicalClock {
    /// Create a clock whose first tick is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Return the current time and advance the clock.
    pub fn tick(&mut self) -> Timestamp {
        let now = Timestamp(self.next);
        self.next += 1;
        now
    }

    /// The time the next call to [`tick`](Self::tick) will return.
    pub fn peek(&self) -> Timestamp {
        Timestamp(self.next)
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_one() {
        let clock = LogicalClock::new();
        assert_eq!(clock.peek(), Timestamp::new(1));
    }

    #[test]
    fn test_clock_strictly_increasing() {
        let mut clock = LogicalClock::new();
        let mut prev = clock.tick();
        for _ in 0..50 {
            let now = clock.tick();
            assert!(now > prev);
            prev = now;
        }
        assert_eq!(clock.peek(), Timestamp::new(52));
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(format!("{}", Timestamp::new(3)), "t=3");
    }
}

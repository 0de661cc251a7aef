//! Arrival time sources.
//!
//! The store stamps every recorded arrival with [`Clock::now`]. Any weakly
//! increasing source works: equal readings are ordered by the store's own
//! arrival sequence, so FIFO rank never depends on clock resolution.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of arrival timestamps
pub trait Clock {
    /// Current reading; must never go backwards
    fn now(&mut self) -> u64;
}

// ============================================================================
// MonotonicClock
// ============================================================================

/// Logical clock: 1, 2, 3, ...
///
/// The default for books, since it makes arrival order fully deterministic.
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    ticks: u64,
}

impl MonotonicClock {
    /// Create a clock whose first reading is 1
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }
}

// ============================================================================
// SystemClock
// ============================================================================

/// Wall clock: milliseconds since the Unix epoch
///
/// Readings are clamped so they never go backwards if the system clock is
/// stepped.
#[derive(Debug, Clone, Default)]
pub struct SystemClock {
    last: u64,
}

impl SystemClock {
    /// Create a wall clock
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(whole_millis)
            .unwrap_or(0);
        self.last = self.last.max(millis);
        self.last
    }
}

/// Milliseconds in `elapsed`, pinned at `u64::MAX` instead of wrapping
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// ManualClock
// ============================================================================

/// Hand-driven clock
///
/// Clones share one reading, so a test can keep a handle and move time while
/// the book owns the other.
///
/// ```
/// use limit_order_book::orderbook::{Clock, ManualClock};
///
/// let handle = ManualClock::new(100);
/// let mut clock = handle.clone();
///
/// handle.advance(5);
/// assert_eq!(clock.now(), 105);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock reading `start`
    pub fn new(start: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Set the reading
    pub fn set(&self, value: u64) {
        self.now.set(value);
    }

    /// Move the reading forward
    pub fn advance(&self, delta: u64) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&mut self) -> u64 {
        self.now.get()
    }
}

//! Millisecond ticks and the shared tick counter.
//!
//! The counter is advanced by the timer task once per millisecond and read by the sampling
//! loop. All arithmetic on tick values wraps in `u32`, so an elapsed time stays correct across
//! a single counter overflow.

use core::sync::atomic::{AtomicU32, Ordering};

/// A point in time, in milliseconds since the counter started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub struct Tick(u32);

impl Tick {
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// The subtraction wraps, so the result is correct as long as less than `u32::MAX`
    /// milliseconds separate the two ticks.
    pub const fn since(self, earlier: Tick) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// The tick `ms` milliseconds after `self`.
    pub const fn offset(self, ms: u32) -> Tick {
        Tick(self.0.wrapping_add(ms))
    }
}

/// A wait that becomes due `period_ms` after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub struct Deadline {
    start: Tick,
    period_ms: u32,
}

impl Deadline {
    pub const fn new(start: Tick, period_ms: u32) -> Self {
        Self { start, period_ms }
    }

    pub const fn start(&self) -> Tick {
        self.start
    }

    /// The tick at which the deadline becomes due.
    pub const fn at(&self) -> Tick {
        self.start.offset(self.period_ms)
    }

    pub const fn is_due(&self, now: Tick) -> bool {
        now.since(self.start) >= self.period_ms
    }

    /// Milliseconds left until the deadline, zero once it is due.
    pub const fn remaining(&self, now: Tick) -> u32 {
        self.period_ms.saturating_sub(now.since(self.start))
    }
}

/// Free-running millisecond counter shared between the timer task and the sampling loop.
///
/// Backed by an `AtomicU32`, so a read can never observe a half-written value.
pub struct TickCounter {
    count: AtomicU32,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self::starting_at(Tick(0))
    }

    pub const fn starting_at(start: Tick) -> Self {
        Self {
            count: AtomicU32::new(start.0),
        }
    }

    /// Advance the counter by one millisecond, wrapping silently at `u32::MAX`.
    pub fn increment(&self) -> Tick {
        Tick(self.count.fetch_add(1, Ordering::Relaxed).wrapping_add(1))
    }

    pub fn now(&self) -> Tick {
        Tick(self.count.load(Ordering::Relaxed))
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_survives_counter_wrap() {
        let start = Tick::from_millis(u32::MAX - 20);
        let now = start.offset(100);

        assert_eq!(now.as_millis(), 79);
        assert_eq!(now.since(start), 100);
    }

    #[test]
    fn deadline_becomes_due_after_period() {
        let deadline = Deadline::new(Tick::from_millis(1_000), 100);

        assert!(!deadline.is_due(Tick::from_millis(1_000)));
        assert!(!deadline.is_due(Tick::from_millis(1_099)));
        assert!(deadline.is_due(Tick::from_millis(1_100)));
        assert!(deadline.is_due(Tick::from_millis(1_500)));
        assert_eq!(deadline.at(), Tick::from_millis(1_100));
    }

    #[test]
    fn deadline_remaining_saturates_at_zero() {
        let deadline = Deadline::new(Tick::from_millis(10), 100);

        assert_eq!(deadline.remaining(Tick::from_millis(10)), 100);
        assert_eq!(deadline.remaining(Tick::from_millis(85)), 25);
        assert_eq!(deadline.remaining(Tick::from_millis(300)), 0);
    }

    #[test]
    fn deadline_across_wrap_is_not_due_early() {
        let deadline = Deadline::new(Tick::from_millis(u32::MAX - 5), 100);

        // Raw value is numerically smaller than the start but only 50 ms have passed
        assert!(!deadline.is_due(Tick::from_millis(44)));
        assert!(deadline.is_due(Tick::from_millis(94)));
    }

    #[test]
    fn counter_increments_and_wraps() {
        let counter = TickCounter::starting_at(Tick::from_millis(u32::MAX - 1));

        assert_eq!(counter.increment(), Tick::from_millis(u32::MAX));
        assert_eq!(counter.increment(), Tick::from_millis(0));
        assert_eq!(counter.now(), Tick::from_millis(0));
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let counter = TickCounter::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        counter.increment();
                    }
                });
            }
        });

        assert_eq!(counter.now(), Tick::from_millis(4_000));
    }
}

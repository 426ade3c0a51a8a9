//! Time source and wait primitive for the sampling loop.

use crate::ticks::{Deadline, Tick, TickCounter};

/// A millisecond time source that can wait for a deadline.
///
/// Implementations decide how the wait happens: spinning on the tick counter, sleeping on a
/// hardware timer, or advancing a simulated clock in tests.
#[allow(async_fn_in_trait)]
pub trait Clock {
    /// Current tick.
    fn now(&self) -> Tick;

    /// Return once `deadline` is due. Returns immediately if it already is.
    async fn wait_until(&mut self, deadline: Deadline);
}

/// Busy-waiting clock over the shared tick counter.
///
/// The wait burns CPU until the counter, advanced from interrupt context, reaches the
/// deadline. Nothing else runs on the waiting executor in the meantime.
pub struct SpinClock<'a> {
    ticks: &'a TickCounter,
}

impl<'a> SpinClock<'a> {
    pub const fn new(ticks: &'a TickCounter) -> Self {
        Self { ticks }
    }
}

impl Clock for SpinClock<'_> {
    fn now(&self) -> Tick {
        self.ticks.now()
    }

    async fn wait_until(&mut self, deadline: Deadline) {
        while !deadline.is_due(self.ticks.now()) {
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn spin_clock_returns_immediately_when_due() {
        let ticks = TickCounter::starting_at(Tick::from_millis(500));
        let mut clock = SpinClock::new(&ticks);

        embassy_futures::block_on(clock.wait_until(Deadline::new(Tick::from_millis(400), 100)));

        assert_eq!(clock.now(), Tick::from_millis(500));
    }

    #[test]
    fn spin_clock_waits_for_ticks_from_another_thread() {
        let ticks = TickCounter::new();
        let deadline = Deadline::new(ticks.now(), 100);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..150 {
                    std::thread::sleep(Duration::from_micros(50));
                    ticks.increment();
                }
            });

            let mut clock = SpinClock::new(&ticks);
            embassy_futures::block_on(clock.wait_until(deadline));
            assert!(deadline.is_due(clock.now()));
        });
    }

    #[test]
    fn spin_clock_wait_terminates_across_counter_wrap() {
        let ticks = TickCounter::starting_at(Tick::from_millis(u32::MAX - 30));
        let start = ticks.now();
        let deadline = Deadline::new(start, 100);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..200 {
                    std::thread::sleep(Duration::from_micros(50));
                    ticks.increment();
                }
            });

            let mut clock = SpinClock::new(&ticks);
            embassy_futures::block_on(clock.wait_until(deadline));

            let now = clock.now();
            assert!(now.since(start) >= 100);
            // The counter has wrapped past zero by the time the wait ends
            assert!(now.as_millis() < start.as_millis());
        });
    }
}

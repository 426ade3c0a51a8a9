//! Millisecond tick counter and the firmware clocks built on it.
//!
//! [`tick_task`] runs on a high-priority interrupt executor so it keeps counting while the
//! sampling loop busy-waits in thread mode.

use embassy_time::{Duration, Ticker, Timer};
use sensor_stream::{Clock, Deadline, Tick, TickCounter};

/// The system millisecond counter, advanced only by [`tick_task`].
pub static TICKS: TickCounter = TickCounter::new();

/// Increment [`TICKS`] once per millisecond, forever.
#[embassy_executor::task]
pub async fn tick_task() -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(1));
    loop {
        ticker.next().await;
        TICKS.increment();
    }
}

/// Clock that sleeps on the embassy timer instead of spinning.
///
/// Time is still read from [`TICKS`] so both clocks agree on what "now" is.
pub struct TimerClock {
    ticks: &'static TickCounter,
}

impl TimerClock {
    pub fn new() -> Self {
        Self { ticks: &TICKS }
    }
}

impl Default for TimerClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TimerClock {
    fn now(&self) -> Tick {
        self.ticks.now()
    }

    async fn wait_until(&mut self, deadline: Deadline) {
        // The tick task may trail the timer by a tick, so re-check after every sleep
        loop {
            let remaining = deadline.remaining(self.ticks.now());
            if remaining == 0 {
                return;
            }
            Timer::after_millis(u64::from(remaining)).await;
        }
    }
}

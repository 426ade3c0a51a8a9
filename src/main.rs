//! Firmware entry point.
//!
//! Brings up the STM32H753 clock tree, starts the millisecond tick on a high-priority
//! interrupt executor and hands the thread-mode executor to the sensor streaming loop.

#![no_std]
#![no_main]

// Application modules
mod apps;
mod peripherals;

use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use peripherals::init_system;
use sensor_stream::info;

// Import panic handler and defmt RTT for debugging
#[cfg(not(feature = "debug"))]
use panic_halt as _;
#[cfg(feature = "debug")]
use {defmt_rtt as _, panic_probe as _};

/// Executor for the tick task, preempts the sampling loop
static TICK_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

// UART4 is unused, its vector drives the tick executor
#[interrupt]
unsafe fn UART4() {
    TICK_EXECUTOR.on_interrupt()
}

/// Main application entry point
///
/// Never returns: the sampling loop runs for as long as the device is powered.
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Starting sensor-stream firmware v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = init_system();

    interrupt::UART4.set_priority(Priority::P6);
    let tick_spawner = TICK_EXECUTOR.start(interrupt::UART4);
    tick_spawner.spawn(peripherals::timer::tick_task()).unwrap();

    info!("System initialized, starting sensor stream...");

    apps::streamer::run(claim_adc!(peripherals), claim_uart!(peripherals)).await
}

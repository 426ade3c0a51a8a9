//! Core of the sensor streaming firmware.
//!
//! Everything that does not touch hardware registers lives here so it can be exercised on the
//! host:
//! - Millisecond tick arithmetic and the shared tick counter
//! - The clock abstraction used to pace the sampling loop
//! - Decimal line encoding for the serial output
//! - The sampling loop itself, as an explicit context object
//! - The receiving-side line decoder
//!
//! The firmware binary supplies the STM32 implementations of [`clock::Clock`],
//! [`input::AnalogInput`] and [`serial::SerialSink`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod input;
pub mod line;
pub mod sampler;
pub mod serial;
pub mod telemetry;
pub mod ticks;

pub use clock::{Clock, SpinClock};
pub use config::{ConfigError, Pacing, SamplerConfig};
pub use fmt::Loggable;
pub use input::AnalogInput;
pub use line::{Encoded, LineBuffer, LineFormat};
pub use sampler::{Emission, SampleError, Sampler, SamplerStats};
pub use serial::SerialSink;
pub use ticks::{Deadline, Tick, TickCounter};

//! Application layer of the sensor streaming firmware.
//!
//! Applications wire the hardware abstractions from the peripherals layer into the portable
//! sampling loop from the `sensor_stream` library.

/// Periodic ADC sampling streamed over UART
pub mod streamer;

//! Sensor streaming application.
//!
//! Samples the analog sensor once per period and writes each reading to the serial link as a
//! decimal line. With the `legacy-timing` feature the loop busy-waits on the tick counter and
//! uses the fixed 4-byte output window; otherwise it sleeps between samples and sends
//! exactly the digits of each reading.

use crate::peripherals::{adc::AdcClaims, uart::UartClaims, SensorAdc, SerialLink};
use sensor_stream::{info, Sampler, SamplerConfig};

#[cfg(feature = "legacy-timing")]
use {crate::peripherals::timer::TICKS, sensor_stream::SpinClock};

#[cfg(not(feature = "legacy-timing"))]
use crate::peripherals::timer::TimerClock;

/// Bring up the ADC and UART, then stream readings forever.
///
/// # Arguments
/// * `adc` - Claimed ADC1 and sensor input pin
/// * `uart` - Claimed USART3 and its transmit pin
pub async fn run(adc: AdcClaims<'_>, uart: UartClaims<'_>) -> ! {
    #[cfg(feature = "legacy-timing")]
    let (config, clock) = (SamplerConfig::legacy(), SpinClock::new(&TICKS));
    #[cfg(not(feature = "legacy-timing"))]
    let (config, clock) = (SamplerConfig::default(), TimerClock::default());

    info!("Sampler configured: {:?}", config);

    let input = SensorAdc::new(adc, &config);
    let sink = SerialLink::new(uart);

    let mut sampler = Sampler::new(config, clock, input, sink);
    sampler.run().await
}

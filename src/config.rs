//! Compile-time configuration of the sampling loop.

use crate::line::LineFormat;

/// Time between two samples.
pub const SAMPLE_PERIOD_MS: u32 = 100;

/// Converter input the sensor is wired to.
pub const SENSOR_CHANNEL: u8 = 5;

/// Converter resolution in bits.
pub const ADC_RESOLUTION_BITS: u8 = 12;

/// Serial line speed, 8N1.
pub const UART_BAUD_RATE: u32 = 115_200;

/// Samples between two statistics log lines.
pub const STATS_INTERVAL: u32 = 100;

/// Resolutions the converter can be programmed for.
pub const SUPPORTED_RESOLUTIONS: [u8; 5] = [8, 10, 12, 14, 16];

/// A configuration the hardware cannot honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub enum ConfigError {
    /// Not one of [`SUPPORTED_RESOLUTIONS`]
    UnsupportedResolution(u8),
    /// The claimed input pin is wired to a different converter channel
    ChannelMismatch { configured: u8, wired: u8 },
    /// A zero period would transmit back to back
    ZeroPeriod,
}

/// Whether `bits` is one of [`SUPPORTED_RESOLUTIONS`].
pub const fn is_supported_resolution(bits: u8) -> bool {
    let mut i = 0;
    while i < SUPPORTED_RESOLUTIONS.len() {
        if SUPPORTED_RESOLUTIONS[i] == bits {
            return true;
        }
        i += 1;
    }
    false
}

const _: () = assert!(
    is_supported_resolution(ADC_RESOLUTION_BITS),
    "ADC_RESOLUTION_BITS must be 8, 10, 12, 14 or 16"
);

/// Where each iteration's wait is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub enum Pacing {
    /// Read the start tick at the top of every iteration.
    ///
    /// Transmit time is not part of the wait, so the cadence stretches to
    /// `period + transmit time`.
    IterationStart,
    /// Each iteration starts exactly one period after the previous one.
    ///
    /// An iteration that overruns by a full period resynchronises to the current tick.
    #[default]
    FixedRate,
}

/// Sampling loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub struct SamplerConfig {
    pub period_ms: u32,
    pub channel: u8,
    pub resolution_bits: u8,
    pub pacing: Pacing,
    pub format: LineFormat,
    /// Log statistics every this many samples, zero disables the log.
    pub stats_interval: u32,
}

impl SamplerConfig {
    /// Busy-wait era behaviour: per-iteration start tick and the fixed 4-byte output window.
    pub const fn legacy() -> Self {
        Self {
            period_ms: SAMPLE_PERIOD_MS,
            channel: SENSOR_CHANNEL,
            resolution_bits: ADC_RESOLUTION_BITS,
            pacing: Pacing::IterationStart,
            format: LineFormat::LegacyFixedWidth,
            stats_interval: STATS_INTERVAL,
        }
    }

    /// Largest raw value the converter can produce, saturating at `u16::MAX`.
    pub const fn max_reading(&self) -> u16 {
        match self.resolution_bits {
            0 => 0,
            bits if bits >= 16 => u16::MAX,
            bits => (1u16 << bits) - 1,
        }
    }

    /// Check the configuration against an input wired to converter channel `wired_channel`.
    pub const fn validate(&self, wired_channel: u8) -> Result<(), ConfigError> {
        if !is_supported_resolution(self.resolution_bits) {
            return Err(ConfigError::UnsupportedResolution(self.resolution_bits));
        }
        if self.channel != wired_channel {
            return Err(ConfigError::ChannelMismatch {
                configured: self.channel,
                wired: wired_channel,
            });
        }
        if self.period_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period_ms: SAMPLE_PERIOD_MS,
            channel: SENSOR_CHANNEL,
            resolution_bits: ADC_RESOLUTION_BITS,
            pacing: Pacing::FixedRate,
            format: LineFormat::Exact,
            stats_interval: STATS_INTERVAL,
        }
    }
}

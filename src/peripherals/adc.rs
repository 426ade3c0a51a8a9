//! Analog sensor input on ADC1.
//!
//! The sensor is wired to PB1, which is ADC1 input 5. Claiming the pin puts it in analog mode.

use embassy_stm32::{
    adc::{Adc, AdcChannel, AnyAdcChannel, Resolution, SampleTime},
    peripherals::{ADC1, PB1},
    Peri,
};
use sensor_stream::{
    config::{ADC_RESOLUTION_BITS, SENSOR_CHANNEL},
    info, AnalogInput, SamplerConfig,
};

/// ADC1 input the claimed pin (PB1) is routed to
pub const WIRED_CHANNEL: u8 = 5;

const _: () = assert!(
    SENSOR_CHANNEL == WIRED_CHANNEL,
    "SENSOR_CHANNEL must match the pin claimed by claim_adc! (PB1 = ADC1_INP5)"
);
const _: () = assert!(
    resolution(ADC_RESOLUTION_BITS).is_some(),
    "ADC_RESOLUTION_BITS has no ADC1 equivalent"
);

/// Map a resolution in bits to the ADC1 setting.
pub const fn resolution(bits: u8) -> Option<Resolution> {
    match bits {
        8 => Some(Resolution::BITS8),
        10 => Some(Resolution::BITS10),
        12 => Some(Resolution::BITS12),
        14 => Some(Resolution::BITS14),
        16 => Some(Resolution::BITS16),
        _ => None,
    }
}

/// Peripheral collection for the sensor input
pub struct AdcClaims<'d> {
    pub adc1: Peri<'d, ADC1>,
    pub input: Peri<'d, PB1>, // ADC1_INP5
}

/// Macro to claim peripherals for SensorAdc
#[macro_export]
macro_rules! claim_adc {
    ($peripherals:expr) => {{
        $crate::peripherals::adc::AdcClaims {
            adc1: $peripherals.ADC1,
            input: $peripherals.PB1, // ADC1_INP5
        }
    }};
}

/// Single-channel, blocking sensor reader.
///
/// Each [`AnalogInput::sample`] call starts one conversion and polls until the result is
/// ready.
pub struct SensorAdc<'d> {
    adc: Adc<'d, ADC1>,
    input: AnyAdcChannel<ADC1>,
}

impl<'d> SensorAdc<'d> {
    /// Configure ADC1 for the resolution and channel in `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config` names a channel other than [`WIRED_CHANNEL`] or a resolution ADC1
    /// does not support.
    pub fn new(claims: AdcClaims<'d>, config: &SamplerConfig) -> Self {
        if let Err(e) = config.validate(WIRED_CHANNEL) {
            panic!("Invalid ADC configuration: {:?}", e);
        }
        let Some(resolution) = resolution(config.resolution_bits) else {
            panic!("Unsupported ADC resolution: {}", config.resolution_bits);
        };

        let mut adc = Adc::new(claims.adc1);
        adc.set_resolution(resolution);
        // Long enough for a high impedance sensor divider
        adc.set_sample_time(SampleTime::CYCLES64_5);

        info!(
            "ADC1 ready, sensor on channel {} (PB1) at {} bits",
            config.channel,
            config.resolution_bits
        );

        Self {
            adc,
            input: claims.input.degrade_adc(),
        }
    }
}

impl AnalogInput for SensorAdc<'_> {
    fn sample(&mut self) -> u16 {
        self.adc.blocking_read(&mut self.input)
    }
}

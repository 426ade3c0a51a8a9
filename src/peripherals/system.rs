//! System initialization and clock configuration for STM32H753.
//!
//! Sets up the core clock tree and the ADC kernel clock. Peripheral clock gating for the
//! individual drivers is handled by embassy when each driver is constructed.

use embassy_stm32::{rcc::*, Config, Peripherals};

/// Initialize the STM32H753 clock tree and return the peripheral singletons.
///
/// - **480 MHz** system clock from PLL1, fed by the 64 MHz HSI
/// - **240 MHz** AHB clock
/// - **120 MHz** APB clocks (USART3 runs from APB1)
/// - **50 MHz** ADC kernel clock from PLL2_P
///
/// This also starts the embassy time driver on TIM2, which every millisecond tick is
/// derived from.
pub fn init_system() -> Peripherals {
    let mut config = Config::default();

    config.rcc.hsi = Some(HSIPrescaler::DIV1);
    config.rcc.csi = true;

    // PLL1 = 64 MHz / 4 * 60 / 2 = 480 MHz
    config.rcc.pll1 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV4,
        mul: PllMul::MUL60,
        divp: Some(PllDiv::DIV2),
        divq: None,
        divr: None,
    });

    // PLL2_P = 64 MHz / 8 * 50 / 8 = 50 MHz for the ADC
    config.rcc.pll2 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV8,
        mul: PllMul::MUL50,
        divp: Some(PllDiv::DIV8),
        divq: None,
        divr: None,
    });

    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHBPrescaler::DIV2;
    config.rcc.apb1_pre = APBPrescaler::DIV2;
    config.rcc.apb2_pre = APBPrescaler::DIV2;
    config.rcc.apb3_pre = APBPrescaler::DIV2;
    config.rcc.apb4_pre = APBPrescaler::DIV2;

    // Maximum voltage scaling for 480MHz operation
    config.rcc.voltage_scale = VoltageScale::Scale0;

    config.rcc.mux.adcsel = mux::Adcsel::PLL2_P;

    embassy_stm32::init(config)
}

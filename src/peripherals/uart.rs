//! Serial output on USART3.
//!
//! Only the transmit line (PD8) is used. Writes block until every byte has left the shift
//! register.

use embassy_stm32::{
    mode::Blocking,
    peripherals::{PD8, USART3},
    usart::{Config as UartConfig, Error, UartTx},
    Peri,
};
use sensor_stream::{config::UART_BAUD_RATE, info, SerialSink};

/// Peripheral collection for the serial link
pub struct UartClaims<'d> {
    pub usart3: Peri<'d, USART3>,
    pub tx: Peri<'d, PD8>, // USART3_TX
}

/// Macro to claim peripherals for SerialLink
#[macro_export]
macro_rules! claim_uart {
    ($peripherals:expr) => {{
        $crate::peripherals::uart::UartClaims {
            usart3: $peripherals.USART3,
            tx: $peripherals.PD8, // USART3_TX
        }
    }};
}

/// Transmit-only serial link, 8N1 at [`UART_BAUD_RATE`].
pub struct SerialLink<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> SerialLink<'d> {
    /// Configure USART3 for transmission.
    ///
    /// # Panics
    ///
    /// Panics if the baud rate cannot be derived from the APB1 clock, which means the clock
    /// tree in [`super::system::init_system`] is wrong.
    pub fn new(claims: UartClaims<'d>) -> Self {
        let mut config = UartConfig::default();
        config.baudrate = UART_BAUD_RATE;

        let tx = UartTx::new_blocking(claims.usart3, claims.tx, config)
            .expect("Invalid UART configuration");

        info!("USART3 ready at {} baud", UART_BAUD_RATE);

        Self { tx }
    }
}

impl SerialSink for SerialLink<'_> {
    type Error = Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(bytes)?;
        self.tx.blocking_flush()
    }
}

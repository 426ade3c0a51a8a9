//! Decimal text encoding of sensor readings.
//!
//! Wire format is one reading per line: ASCII decimal digits followed by CR LF. The digits are
//! produced by [`LineBuffer::encode`] and the terminator is sent separately.

/// Line terminator sent after every reading.
pub const TERMINATOR: &[u8] = b"\r\n";

/// Digits needed for the largest `u16`.
pub const MAX_DIGITS: usize = 5;

/// Window size of the legacy fixed-width output.
pub const LEGACY_WIDTH: usize = 4;

/// How a reading is laid out before transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub enum LineFormat {
    /// Exactly the decimal digits of the reading, no padding.
    #[default]
    Exact,
    /// A 4-byte window that is always sent whole.
    ///
    /// Digits are followed by a NUL when they fit, and any bytes after the NUL are whatever the
    /// previous readings left behind. Readings with 5 digits are cut to their first 4.
    LegacyFixedWidth,
}

/// Bytes ready to transmit for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded<'a> {
    pub bytes: &'a [u8],
    /// Digits were dropped to fit the output window.
    pub truncated: bool,
}

/// Output buffer owned by the sampling loop, reused for every reading.
pub struct LineBuffer {
    bytes: [u8; MAX_DIGITS],
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; MAX_DIGITS],
        }
    }

    /// Encode `value` as base-10 text in `format`.
    pub fn encode(&mut self, value: u16, format: LineFormat) -> Encoded<'_> {
        let mut text = itoa::Buffer::new();
        let digits = text.format(value).as_bytes();

        match format {
            LineFormat::Exact => {
                self.bytes[..digits.len()].copy_from_slice(digits);
                Encoded {
                    bytes: &self.bytes[..digits.len()],
                    truncated: false,
                }
            }
            LineFormat::LegacyFixedWidth => {
                let kept = digits.len().min(LEGACY_WIDTH);
                self.bytes[..kept].copy_from_slice(&digits[..kept]);
                if kept < LEGACY_WIDTH {
                    self.bytes[kept] = 0;
                }
                Encoded {
                    bytes: &self.bytes[..LEGACY_WIDTH],
                    truncated: digits.len() > LEGACY_WIDTH,
                }
            }
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

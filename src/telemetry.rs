//! Receiving side of the serial stream.
//!
//! A host reading the link sees one decimal reading per CR LF terminated line. Serial links
//! inject the odd garbage byte, so every line is validated on its own and a bad line never
//! affects the next one.

/// Why a received line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub enum LineError {
    /// Nothing but whitespace between two terminators
    Empty,
    /// A byte other than an ASCII digit
    NotDecimal,
    /// Above the converter's maximum
    OutOfRange(u32),
    /// Longer than the decoder's buffer, discarded up to the next line feed
    TooLong,
}

/// Parse one line (with or without its terminator) into a reading no larger than `max`.
pub fn parse_line(line: &[u8], max: u16) -> Result<u16, LineError> {
    let text = line.trim_ascii();
    if text.is_empty() {
        return Err(LineError::Empty);
    }

    let mut value: u32 = 0;
    for &byte in text {
        if !byte.is_ascii_digit() {
            return Err(LineError::NotDecimal);
        }
        value = value.saturating_mul(10).saturating_add(u32::from(byte - b'0'));
    }

    if value > u32::from(max) {
        return Err(LineError::OutOfRange(value));
    }
    Ok(value as u16)
}

/// Splits a byte stream into lines and parses each one.
///
/// `N` bounds the accepted line length, terminator included.
pub struct LineDecoder<const N: usize> {
    buffer: [u8; N],
    len: usize,
    max: u16,
    overflowed: bool,
}

impl<const N: usize> LineDecoder<N> {
    pub const fn new(max: u16) -> Self {
        Self {
            buffer: [0u8; N],
            len: 0,
            max,
            overflowed: false,
        }
    }

    /// Feed one received byte. Returns the parsed line when `byte` completes one.
    pub fn push(&mut self, byte: u8) -> Option<Result<u16, LineError>> {
        if byte == b'\n' {
            let result = if self.overflowed {
                Err(LineError::TooLong)
            } else {
                parse_line(&self.buffer[..self.len], self.max)
            };
            self.len = 0;
            self.overflowed = false;
            return Some(result);
        }

        if self.len < N {
            self.buffer[self.len] = byte;
            self.len += 1;
        } else {
            self.overflowed = true;
        }
        None
    }

    /// Feed a chunk of received bytes, calling `on_line` for every completed line.
    pub fn extend<F>(&mut self, bytes: &[u8], mut on_line: F)
    where
        F: FnMut(Result<u16, LineError>),
    {
        for &byte in bytes {
            if let Some(line) = self.push(byte) {
                on_line(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u16 = 4095;

    #[test]
    fn parses_terminated_reading() {
        assert_eq!(parse_line(b"1234\r\n", MAX), Ok(1234));
        assert_eq!(parse_line(b"0", MAX), Ok(0));
        assert_eq!(parse_line(b" 4095 ", MAX), Ok(4095));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_line(b"\r\n", MAX), Err(LineError::Empty));
        assert_eq!(parse_line(b"12a4", MAX), Err(LineError::NotDecimal));
        assert_eq!(parse_line(b"-12", MAX), Err(LineError::NotDecimal));
        // A legacy fixed-width line with a NUL pad
        assert_eq!(parse_line(b"7\0\0\0\r\n", MAX), Err(LineError::NotDecimal));
    }

    #[test]
    fn rejects_values_above_converter_range() {
        assert_eq!(parse_line(b"4096", MAX), Err(LineError::OutOfRange(4096)));
        assert_eq!(parse_line(b"65535", u16::MAX), Ok(65535));
        assert_eq!(
            parse_line(b"99999999999", MAX),
            Err(LineError::OutOfRange(u32::MAX))
        );
    }

    #[test]
    fn decoder_reassembles_lines_split_across_chunks() {
        let mut decoder = LineDecoder::<16>::new(MAX);
        let mut lines = Vec::new();

        decoder.extend(b"12", |line| lines.push(line));
        decoder.extend(b"3\r\n40", |line| lines.push(line));
        decoder.extend(b"95\r\n", |line| lines.push(line));

        assert_eq!(lines, vec![Ok(123), Ok(4095)]);
    }

    #[test]
    fn decoder_recovers_after_bad_line() {
        let mut decoder = LineDecoder::<16>::new(MAX);
        let mut lines = Vec::new();

        decoder.extend(b"1x\r\n5000\r\n17\r\n", |line| lines.push(line));

        assert_eq!(
            lines,
            vec![
                Err(LineError::NotDecimal),
                Err(LineError::OutOfRange(5000)),
                Ok(17)
            ]
        );
    }

    #[test]
    fn decoder_discards_overlong_line() {
        let mut decoder = LineDecoder::<4>::new(MAX);
        let mut lines = Vec::new();

        decoder.extend(b"123456789\r\n42\r\n", |line| lines.push(line));

        assert_eq!(lines, vec![Err(LineError::TooLong), Ok(42)]);
    }
}

//! Serial output sink.

/// Blocking byte transmitter.
pub trait SerialSink {
    type Error;

    /// Transmit every byte of `bytes`, blocking until the hardware has accepted them.
    ///
    /// There is no flow control: a missing receiver is not detected.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SerialSink + ?Sized> SerialSink for &mut T {
    type Error = T::Error;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).send(bytes)
    }
}

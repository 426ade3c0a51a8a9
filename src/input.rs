//! Analog sensor input.

/// One analog channel that can be converted on demand.
///
/// The channel is fixed by the implementor when it claims the input pin.
pub trait AnalogInput {
    /// Start a conversion and block until its raw result is available.
    ///
    /// The value is bounded by the converter resolution. No range check or filtering is
    /// applied: a disconnected sensor yields whatever the converter reads.
    fn sample(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn sample(&mut self) -> u16 {
        (**self).sample()
    }
}

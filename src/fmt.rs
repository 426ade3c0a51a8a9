//! Logging macros that forward to `defmt` when the `debug` feature is enabled.
//!
//! Without `debug` the arguments are only borrowed, so host builds and release firmware carry
//! no logger at all.

#[macro_export]
macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "debug")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "debug"))]
        let _ = ($( & $x ),*);
    }};
}

#[macro_export]
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "debug")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "debug"))]
        let _ = ($( & $x ),*);
    }};
}

#[macro_export]
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "debug")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "debug"))]
        let _ = ($( & $x ),*);
    }};
}

/// Values the logging macros above can format.
///
/// With `debug` this is `defmt::Format`, otherwise every type qualifies, so generic code can log
/// a value without requiring a logger.
#[cfg(feature = "debug")]
pub trait Loggable: defmt::Format {}
#[cfg(feature = "debug")]
impl<T: defmt::Format + ?Sized> Loggable for T {}

#[cfg(not(feature = "debug"))]
pub trait Loggable {}
#[cfg(not(feature = "debug"))]
impl<T: ?Sized> Loggable for T {}

pub mod adc;
pub mod system;
pub mod timer;
pub mod uart;

pub use adc::SensorAdc;
pub use system::init_system;
pub use uart::SerialLink;

//! Application-Layer: Frame-Treiber und synthetische Sensorquelle.

pub mod driver;
pub mod sensor;

pub use driver::FrameDriver;
pub use sensor::WobbleSensor;

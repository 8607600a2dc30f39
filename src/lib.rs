//! Tilt Curve Library.
//! Federgedämpfte kubische Bézier-Kurve, deren Griffe einem Neigungssensor folgen.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{FrameDriver, WobbleSensor};
pub use core::{
    ControlPoint, CubicCurve, Orientation, OrientationSlot, SimulationClock, SpringIntegrator,
    TiltMapper,
};
pub use shared::{CurveSnapshot, SimulationOptions, TangentSegment};

//! Core-Domänentypen: Kontrollpunkte, Feder-Integration, Neigungs-Abbildung,
//! Bézier-Abtastung und der Simulationstakt.

pub mod bezier;
pub mod control_point;
pub mod orientation;
pub mod simulation;
pub mod spring;
pub mod tilt;
pub mod vector;

pub use bezier::{cubic_bezier, cubic_bezier_derivative, CubicCurve};
pub use control_point::ControlPoint;
pub use orientation::OrientationSlot;
pub use simulation::SimulationClock;
pub use spring::SpringIntegrator;
pub use tilt::{Orientation, TiltMapper};

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration und den Render-Snapshot, die zwischen `core`
//! und `app` bzw. einem externen Renderer geteilt werden.

pub mod options;
mod snapshot;

pub use options::SimulationOptions;
pub use snapshot::{CurveSnapshot, TangentSegment};

//! Abbildung von Neigungswerten (Roll, Pitch) auf Zielpositionen der beiden Griffe.

use crate::shared::options::SimulationOptions;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Orientierungs-Messwert des Neigungssensors (Radiant).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Rollwinkel, verschiebt den Fokuspunkt horizontal
    pub roll: f32,
    /// Nickwinkel, verschiebt den Fokuspunkt vertikal
    pub pitch: f32,
}

impl Orientation {
    pub fn new(roll: f32, pitch: f32) -> Self {
        Self { roll, pitch }
    }

    /// Gibt `true` zurück, wenn beide Winkel endlich sind.
    pub fn is_finite(&self) -> bool {
        self.roll.is_finite() && self.pitch.is_finite()
    }
}

/// Bildet Neigung linear auf einen Fokuspunkt ab und leitet daraus
/// die beiden Griff-Ziele mit gegenläufigem Versatz ab.
///
/// Es wird weder geglättet noch begrenzt: Sensorrauschen geht ungefiltert
/// in die Ziele, die Dämpfung übernimmt der Feder-Integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltMapper {
    /// Verschiebung in Einheiten pro Radiant
    pub sensitivity: f32,
    /// Versatz der Griffe vom Fokuspunkt: Griff 1 = (-x, +y), Griff 2 = (+x, -y)
    pub handle_offset: Vec2,
}

impl TiltMapper {
    pub fn new(sensitivity: f32, handle_offset: Vec2) -> Self {
        Self {
            sensitivity,
            handle_offset,
        }
    }

    pub fn from_options(options: &SimulationOptions) -> Self {
        Self::new(
            options.tilt_sensitivity,
            Vec2::from_array(options.handle_offset),
        )
    }

    /// Fokuspunkt = Szenenmitte + (roll, pitch) · Empfindlichkeit.
    pub fn focal_point(&self, orientation: Orientation, center: Vec2) -> Vec2 {
        center + Vec2::new(orientation.roll, orientation.pitch) * self.sensitivity
    }

    /// Liefert die Zielpositionen für Griff 1 und Griff 2.
    pub fn map_to_targets(&self, orientation: Orientation, center: Vec2) -> (Vec2, Vec2) {
        let focal = self.focal_point(orientation, center);
        let offset = self.handle_offset;
        (
            focal + Vec2::new(-offset.x, offset.y),
            focal + Vec2::new(offset.x, -offset.y),
        )
    }
}

impl Default for TiltMapper {
    fn default() -> Self {
        Self::from_options(&SimulationOptions::default())
    }
}

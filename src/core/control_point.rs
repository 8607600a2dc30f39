//! Einzelner Kontrollpunkt der Kurve: fixiert (Endpunkt) oder federnd (Griff).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kontrollpunkt mit Position, Geschwindigkeit und Zielposition.
///
/// Fixierte Punkte (`locked`) sind die Kurven-Endpunkte: ihre Position wird
/// einmal gesetzt und danach nie verändert, `target` wird ignoriert.
/// Freie Punkte werden vom Feder-Integrator Richtung `target` gezogen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Aktuelle Position
    pub position: Vec2,
    /// Aktuelle Geschwindigkeit (Einheiten pro Sekunde)
    pub velocity: Vec2,
    /// Ruhelage, zu der der Punkt gezogen wird
    pub target: Vec2,
    /// `true` für Endpunkte
    pub locked: bool,
}

impl ControlPoint {
    /// Erstellt einen fixierten Endpunkt.
    pub fn locked(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
            locked: true,
        }
    }

    /// Erstellt einen freien Griff in Ruhe (Ziel = eigene Position).
    pub fn free(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
            locked: false,
        }
    }

    /// Setzt die Zielposition. Für fixierte Punkte wirkungslos.
    pub fn set_target(&mut self, target: Vec2) {
        if !self.locked {
            self.target = target;
        }
    }

    /// Abstand zur Zielposition (0 für fixierte Punkte).
    pub fn distance_to_target(&self) -> f32 {
        if self.locked {
            0.0
        } else {
            self.position.distance(self.target)
        }
    }

    /// Punkt liegt (fast) im Ziel und bewegt sich (fast) nicht mehr.
    pub fn is_at_rest(&self, epsilon: f32) -> bool {
        self.distance_to_target() <= epsilon && self.velocity.length() <= epsilon
    }
}

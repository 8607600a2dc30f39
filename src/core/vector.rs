//! Vektor-Hilfsfunktionen auf Basis von `glam::Vec2`.
//!
//! Addition, Skalierung und Länge liefert `glam` direkt. Hier liegen nur
//! die Varianten mit Untergrenze für Divisoren.

use glam::Vec2;

/// Standard-Untergrenze für Längen als Divisor (Render-Einheiten).
pub const MIN_DIVISOR_LENGTH: f32 = 1.0;

/// Euklidische Länge, nach unten auf `floor` begrenzt.
pub fn length_floored(v: Vec2, floor: f32) -> f32 {
    v.length().max(floor)
}

/// Normiert `v` mit begrenztem Divisor.
///
/// Kurze Vektoren (|v| < `floor`) werden nicht auf Länge 1 aufgeblasen,
/// sondern nur durch `floor` geteilt. Ein Null-Vektor bleibt Null.
pub fn normalize_floored(v: Vec2, floor: f32) -> Vec2 {
    let divisor = length_floored(v, floor);
    if divisor <= 0.0 {
        return Vec2::ZERO;
    }
    v / divisor
}

/// Gibt `true` zurück, wenn beide Komponenten endlich sind.
pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

//! Kubische Bézier-Kurve: Auswertung, Ableitung und Abtastung für das Rendering.

use super::vector::normalize_floored;
use crate::shared::TangentSegment;
use glam::Vec2;

/// B(t) = (1-t)³·A + 3(1-t)²t·B + 3(1-t)t²·C + t³·D
pub fn cubic_bezier(a: Vec2, b: Vec2, c: Vec2, d: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;
    u2 * u * a + 3.0 * u2 * t * b + 3.0 * u * t2 * c + t2 * t * d
}

/// B'(t) = 3(1-t)²·(B-A) + 6(1-t)t·(C-B) + 3t²·(D-C)
pub fn cubic_bezier_derivative(a: Vec2, b: Vec2, c: Vec2, d: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    3.0 * u * u * (b - a) + 6.0 * u * t * (c - b) + 3.0 * t * t * (d - c)
}

/// Die vier Kontrollpunkte einer kubischen Kurve (A und D sind die Endpunkte).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    pub d: Vec2,
}

impl CubicCurve {
    pub fn new(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Self {
        Self { a, b, c, d }
    }

    /// Position für t ∈ [0, 1].
    pub fn position(&self, t: f32) -> Vec2 {
        cubic_bezier(self.a, self.b, self.c, self.d, t)
    }

    /// Erste Ableitung für t ∈ [0, 1].
    pub fn derivative(&self, t: f32) -> Vec2 {
        cubic_bezier_derivative(self.a, self.b, self.c, self.d, t)
    }
}

/// Tastet die Kurve an `samples` gleichmäßig verteilten t-Werten ab (0 und 1 inklusive).
///
/// Weniger als 2 Samples werden auf 2 angehoben. Erster und letzter Punkt
/// sind exakt A und D (t wird dort nicht aus einer Division berechnet).
pub fn sample_polyline(curve: &CubicCurve, samples: usize) -> Vec<Vec2> {
    let samples = samples.max(2);
    let last = samples - 1;
    let mut points = Vec::with_capacity(samples);
    points.push(curve.a);
    for i in 1..last {
        let t = i as f32 / last as f32;
        points.push(curve.position(t));
    }
    points.push(curve.d);
    points
}

/// Tangenten-Marker an `count` inneren t-Werten `i / (count + 1)`.
///
/// Die Richtung wird mit Untergrenze `min_magnitude` normiert und auf
/// `length` skaliert. Nahezu stehende Ableitungen ergeben kurze Marker.
pub fn sample_tangents(
    curve: &CubicCurve,
    count: usize,
    length: f32,
    min_magnitude: f32,
) -> Vec<TangentSegment> {
    let divisions = (count + 1) as f32;
    (1..=count)
        .map(|i| {
            let t = i as f32 / divisions;
            let origin = curve.position(t);
            let direction = normalize_floored(curve.derivative(t), min_magnitude);
            TangentSegment {
                origin,
                tip: origin + direction * length,
            }
        })
        .collect()
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(curve: &CubicCurve, samples: usize) -> f32 {
    polyline_length(&sample_polyline(curve, samples))
}

/// Summe der Segmentlängen einer Polylinie.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

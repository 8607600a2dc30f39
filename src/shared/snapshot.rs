//! Kurven-Snapshot als expliziter Übergabevertrag zwischen Simulation und Renderer.
//!
//! Wird pro Frame neu gebaut und gehört dem Aufrufer. Die Simulation hält
//! keine Referenz darauf.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Tangenten-Marker: Strecke vom Kurvenpunkt in Tangentenrichtung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentSegment {
    /// Punkt auf der Kurve
    pub origin: Vec2,
    /// Spitze des Markers
    pub tip: Vec2,
}

impl TangentSegment {
    /// Richtung des Markers (Spitze − Ursprung).
    pub fn direction(&self) -> Vec2 {
        self.tip - self.origin
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Dichte Abtastung der Kurve von t = 0 bis t = 1
    pub polyline: Vec<Vec2>,
    /// Tangenten-Marker an inneren t-Werten
    pub tangent_segments: Vec<TangentSegment>,
    /// Aktuelle Positionen aller Kontrollpunkte (für Marker)
    pub control_points: Vec<Vec2>,
}

impl CurveSnapshot {
    /// Erster Polylinien-Punkt (Kurvenstart).
    pub fn start(&self) -> Option<Vec2> {
        self.polyline.first().copied()
    }

    /// Letzter Polylinien-Punkt (Kurvenende).
    pub fn end(&self) -> Option<Vec2> {
        self.polyline.last().copied()
    }

    /// Serialisiert den Snapshot als formatiertes JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_no_endpoints() {
        let snapshot = CurveSnapshot::default();
        assert_eq!(snapshot.start(), None);
        assert_eq!(snapshot.end(), None);
    }

    #[test]
    fn test_json_contains_all_parts() {
        let snapshot = CurveSnapshot {
            polyline: vec![Vec2::ZERO, Vec2::new(1.0, 2.0)],
            tangent_segments: vec![TangentSegment {
                origin: Vec2::ZERO,
                tip: Vec2::new(0.0, 32.0),
            }],
            control_points: vec![Vec2::ZERO; 4],
        };
        let json = snapshot.to_json().expect("Serialisierung muss klappen");
        assert!(json.contains("polyline"));
        assert!(json.contains("tangent_segments"));
        assert!(json.contains("control_points"));

        let parsed: CurveSnapshot = serde_json::from_str(&json).expect("JSON gültig");
        assert_eq!(parsed.tangent_segments[0].direction(), Vec2::new(0.0, 32.0));
    }
}

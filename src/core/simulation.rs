//! Simulationstakt: besitzt die Kontrollpunkte und erzeugt pro Frame einen Snapshot.
//!
//! Ablauf pro `tick`:
//! 1. Neuer Neigungswert → Ziele der freien Griffe überschreiben
//! 2. Alle Kontrollpunkte integrieren (fixierte bleiben stehen)
//! 3. Polylinie und Tangenten-Marker abtasten

use super::bezier::{sample_polyline, sample_tangents, CubicCurve};
use super::control_point::ControlPoint;
use super::orientation::OrientationSlot;
use super::spring::{is_valid_dt, SpringIntegrator};
use super::tilt::{Orientation, TiltMapper};
use super::vector::is_finite_vec;
use crate::shared::{CurveSnapshot, SimulationOptions};
use anyhow::{bail, ensure};
use glam::Vec2;

/// Anzahl Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Index des ersten freien Griffs.
const HANDLE_1: usize = 1;
/// Index des zweiten freien Griffs.
const HANDLE_2: usize = 2;

/// Abstand der Endpunkte vom Szenenrand (horizontal, vertikal).
const ENDPOINT_INSET: Vec2 = Vec2::new(40.0, 80.0);
/// Horizontaler Abstand der Griffe von der Szenenmitte.
const HANDLE_SPREAD: f32 = 110.0;

/// Besitzt den kompletten veränderlichen Zustand einer Kurven-Szene.
///
/// Layout der Punkte: `[Start (fix), Griff 1, Griff 2, Ende (fix)]`.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    points: Vec<ControlPoint>,
    center: Vec2,
    spring: SpringIntegrator,
    tilt: TiltMapper,
    options: SimulationOptions,
    frame_count: u64,
}

impl SimulationClock {
    /// Baut die Standard-Szene aus `options.scene_size`.
    ///
    /// Start unten links, Ende oben rechts, Griffe links/rechts der Mitte in Ruhe.
    pub fn new(options: SimulationOptions) -> Self {
        let size = Vec2::from_array(options.scene_size);
        let center = size * 0.5;
        let points = vec![
            ControlPoint::locked(Vec2::new(ENDPOINT_INSET.x, size.y - ENDPOINT_INSET.y)),
            ControlPoint::free(center - Vec2::new(HANDLE_SPREAD, 0.0)),
            ControlPoint::free(center + Vec2::new(HANDLE_SPREAD, 0.0)),
            ControlPoint::locked(Vec2::new(size.x - ENDPOINT_INSET.x, ENDPOINT_INSET.y)),
        ];

        Self::with_parts(points, center, options)
    }

    /// Baut eine Szene aus vorgegebenen Punkten.
    ///
    /// Erwartet genau vier Punkte: Endpunkte fixiert, Griffe frei, alle Werte endlich.
    pub fn from_points(
        points: Vec<ControlPoint>,
        center: Vec2,
        options: SimulationOptions,
    ) -> anyhow::Result<Self> {
        ensure!(
            points.len() == CONTROL_POINT_COUNT,
            "Kurve braucht {} Kontrollpunkte, erhalten: {}",
            CONTROL_POINT_COUNT,
            points.len()
        );
        for (index, point) in points.iter().enumerate() {
            let is_endpoint = index == 0 || index == CONTROL_POINT_COUNT - 1;
            if point.locked != is_endpoint {
                bail!(
                    "Kontrollpunkt {} muss {} sein",
                    index,
                    if is_endpoint { "fixiert" } else { "frei" }
                );
            }
            if ![point.position, point.velocity, point.target]
                .into_iter()
                .all(is_finite_vec)
            {
                bail!("Kontrollpunkt {} enthält nicht-endliche Werte", index);
            }
        }
        ensure!(is_finite_vec(center), "Szenenmitte nicht endlich: {:?}", center);

        Ok(Self::with_parts(points, center, options))
    }

    fn with_parts(points: Vec<ControlPoint>, center: Vec2, options: SimulationOptions) -> Self {
        Self {
            points,
            center,
            spring: SpringIntegrator::from_options(&options),
            tilt: TiltMapper::from_options(&options),
            options,
            frame_count: 0,
        }
    }

    /// Ein Frame: Ziele aktualisieren, integrieren, abtasten.
    ///
    /// Ungültige `dt` überspringen nur die Physik, der Snapshot wird trotzdem
    /// aus den unveränderten Positionen gebaut. Fehlt ein Messwert, bleiben
    /// die bisherigen Ziele bestehen.
    pub fn tick(&mut self, dt: f32, orientation: Option<Orientation>) -> CurveSnapshot {
        self.frame_count += 1;

        match orientation {
            Some(o) if o.is_finite() => self.apply_orientation(o),
            Some(o) => log::debug!("Frame {}: Messwert ignoriert {:?}", self.frame_count, o),
            None => {}
        }

        if is_valid_dt(dt) {
            self.integrate(dt);
        } else {
            log::debug!(
                "Frame {}: ungültiges dt {}, Physik übersprungen",
                self.frame_count,
                dt
            );
        }

        log::trace!(
            "Frame {}: Griffe bei {:?} / {:?}",
            self.frame_count,
            self.points[HANDLE_1].position,
            self.points[HANDLE_2].position
        );

        self.snapshot()
    }

    /// Wie [`Self::tick`], liest den Messwert synchron aus dem Slot.
    pub fn tick_with_slot(&mut self, dt: f32, slot: &OrientationSlot) -> CurveSnapshot {
        self.tick(dt, slot.latest())
    }

    /// Tastet den aktuellen Zustand ab, ohne die Zeit fortzuschreiben.
    pub fn snapshot(&self) -> CurveSnapshot {
        let curve = self.curve();
        CurveSnapshot {
            polyline: sample_polyline(&curve, self.options.polyline_samples),
            tangent_segments: sample_tangents(
                &curve,
                self.options.tangent_samples,
                self.options.tangent_length,
                self.options.tangent_min_magnitude,
            ),
            control_points: self.points.iter().map(|p| p.position).collect(),
        }
    }

    /// Aktuelle Kurve aus den vier Punkt-Positionen.
    pub fn curve(&self) -> CubicCurve {
        CubicCurve::new(
            self.points[0].position,
            self.points[HANDLE_1].position,
            self.points[HANDLE_2].position,
            self.points[CONTROL_POINT_COUNT - 1].position,
        )
    }

    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Verschiebt die Szenenmitte (z.B. nach Größenänderung der Ansicht).
    ///
    /// Die Ziele folgen erst mit dem nächsten Messwert.
    pub fn set_center(&mut self, center: Vec2) {
        if is_finite_vec(center) {
            self.center = center;
        }
    }

    /// Anzahl bisheriger `tick`-Aufrufe.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Alle freien Punkte liegen innerhalb `epsilon` in Ruhe auf ihrem Ziel.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.points.iter().all(|p| p.is_at_rest(epsilon))
    }

    fn apply_orientation(&mut self, orientation: Orientation) {
        let (target_1, target_2) = self.tilt.map_to_targets(orientation, self.center);
        self.points[HANDLE_1].set_target(target_1);
        self.points[HANDLE_2].set_target(target_2);
    }

    fn integrate(&mut self, dt: f32) {
        let frame_dt = if dt > self.options.max_frame_dt {
            log::debug!(
                "Frame {}: dt {:.3}s auf {:.3}s gekappt",
                self.frame_count,
                dt,
                self.options.max_frame_dt
            );
            self.options.max_frame_dt
        } else {
            dt
        };

        for point in &mut self.points {
            self.spring
                .integrate_substepped(point, frame_dt, self.options.max_substep);
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(SimulationOptions::default())
    }
}

#[cfg(test)]
mod tests;

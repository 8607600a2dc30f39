//! Feder-Dämpfer-Integration für freie Kontrollpunkte (semi-implizites Euler).

use super::control_point::ControlPoint;
use crate::shared::options::SimulationOptions;

/// Obergrenze für Teilschritte pro Frame, hält `tick` zeitlich beschränkt.
pub const MAX_SUBSTEPS: u32 = 64;

/// Gibt `true` zurück, wenn `dt` als Zeitschritt verwendbar ist.
pub fn is_valid_dt(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Feder-Integrator mit prozessweit festen Parametern.
///
/// ```text
/// a  = (target - position) * stiffness - velocity * damping
/// v' = v + a * dt
/// p' = p + v' * dt
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringIntegrator {
    /// Federkonstante
    pub stiffness: f32,
    /// Dämpfung (wirkt gegen die Geschwindigkeit)
    pub damping: f32,
}

impl SpringIntegrator {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }

    pub fn from_options(options: &SimulationOptions) -> Self {
        Self::new(options.stiffness, options.damping)
    }

    /// Ein Integrationsschritt in-place.
    ///
    /// Fixierte Punkte und ungültige `dt` (≤ 0, NaN, ∞) bleiben unverändert.
    pub fn integrate(&self, point: &mut ControlPoint, dt: f32) {
        if point.locked || !is_valid_dt(dt) {
            return;
        }

        let displacement = point.target - point.position;
        let acceleration = displacement * self.stiffness - point.velocity * self.damping;
        point.velocity += acceleration * dt;
        point.position += point.velocity * dt;
    }

    /// Wertvariante von [`Self::integrate`].
    pub fn step(&self, mut point: ControlPoint, dt: f32) -> ControlPoint {
        self.integrate(&mut point, dt);
        point
    }

    /// Integriert `dt` in gleich langen Teilschritten von höchstens `max_step`.
    ///
    /// Bei `dt <= max_step` entspricht das genau einem `integrate`-Aufruf.
    /// Gibt die Anzahl der ausgeführten Teilschritte zurück.
    pub fn integrate_substepped(&self, point: &mut ControlPoint, dt: f32, max_step: f32) -> u32 {
        if point.locked || !is_valid_dt(dt) {
            return 0;
        }

        let steps = substep_count(dt, max_step);
        let h = dt / steps as f32;
        for _ in 0..steps {
            self.integrate(point, h);
        }
        steps
    }
}

/// Anzahl Teilschritte für `dt` bei maximaler Schrittweite `max_step`.
pub fn substep_count(dt: f32, max_step: f32) -> u32 {
    if !is_valid_dt(max_step) || dt <= max_step {
        return 1;
    }
    ((dt / max_step).ceil() as u32).clamp(1, MAX_SUBSTEPS)
}

impl Default for SpringIntegrator {
    fn default() -> Self {
        Self::from_options(&SimulationOptions::default())
    }
}

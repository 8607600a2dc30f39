//! Expliziter Frame-Treiber: misst `dt` und ruft pro Frame genau einmal `tick` auf.

use crate::core::{OrientationSlot, SimulationClock};
use crate::shared::CurveSnapshot;
use std::time::Instant;

/// Zeitschritt des ersten Frames (noch kein Vorgänger zum Messen).
pub const NOMINAL_DT: f32 = 1.0 / 60.0;

/// Treibt eine Simulation Frame für Frame.
///
/// Einziger Schreiber der Simulation; der Sensor liefert nur über den Slot zu.
#[derive(Debug)]
pub struct FrameDriver {
    clock: SimulationClock,
    slot: OrientationSlot,
    last_frame: Option<Instant>,
}

impl FrameDriver {
    pub fn new(clock: SimulationClock, slot: OrientationSlot) -> Self {
        Self {
            clock,
            slot,
            last_frame: None,
        }
    }

    /// Frame zum Zeitpunkt `now`; `dt` ergibt sich aus dem vorherigen Aufruf.
    pub fn frame_at(&mut self, now: Instant) -> CurveSnapshot {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => NOMINAL_DT,
        };
        self.last_frame = Some(now);
        self.step(dt)
    }

    /// Frame mit explizit vorgegebenem `dt`.
    pub fn step(&mut self, dt: f32) -> CurveSnapshot {
        self.clock.tick_with_slot(dt, &self.slot)
    }

    /// Führt `frames` Frames mit festem `dt` aus und reicht jeden Snapshot weiter.
    ///
    /// Gibt den letzten Snapshot zurück (bei `frames == 0` den aktuellen Zustand).
    pub fn run_fixed(
        &mut self,
        frames: u32,
        dt: f32,
        mut on_frame: impl FnMut(&CurveSnapshot),
    ) -> CurveSnapshot {
        let mut last = None;
        for _ in 0..frames {
            let snapshot = self.step(dt);
            on_frame(&snapshot);
            last = Some(snapshot);
        }
        last.unwrap_or_else(|| self.clock.snapshot())
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn slot(&self) -> &OrientationSlot {
        &self.slot
    }

    /// Beendet den Treiber und gibt die Simulation zurück.
    pub fn into_clock(self) -> SimulationClock {
        self.clock
    }
}

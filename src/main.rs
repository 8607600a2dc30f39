//! Tilt Curve Demo.
//!
//! Headless-Lauf: ein synthetischer Neigungssensor bewegt die Griffe,
//! der Frame-Treiber tastet die Kurve ab. Optional wird der letzte
//! Snapshot als JSON geschrieben (`tilt_curve [SNAPSHOT_JSON]`).

use anyhow::Context;
use std::path::PathBuf;
use tilt_curve::core::bezier::polyline_length;
use tilt_curve::{FrameDriver, OrientationSlot, SimulationClock, SimulationOptions, WobbleSensor};

/// Fester Frame-Zeitschritt des Headless-Laufs.
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Tilt Curve v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = SimulationOptions::load_from_file(&SimulationOptions::config_path());
        options.validate().context("Ungültige Optionen")?;
        let snapshot_path = std::env::args_os().nth(1).map(PathBuf::from);

        let slot = OrientationSlot::new();
        let sensor = WobbleSensor::spawn(slot.clone(), options.sensor_rate_hz)?;
        let frames = options.demo_frames;
        let mut driver = FrameDriver::new(SimulationClock::new(options), slot);

        let mut stats = RunStats::default();
        let last = driver.run_fixed(frames, FRAME_DT, |snapshot| stats.record(snapshot));

        sensor.stop();
        driver.slot().clear();

        log::info!(
            "{} Frames simuliert, Griff-Weg gesamt {:.1}, Kurvenlänge zuletzt {:.1}",
            driver.clock().frame_count(),
            stats.handle_travel,
            polyline_length(&last.polyline)
        );

        if let Some(path) = snapshot_path {
            let json = last.to_json()?;
            std::fs::write(&path, json)
                .with_context(|| format!("Snapshot nicht schreibbar: {}", path.display()))?;
            log::info!("Letzter Snapshot gespeichert nach: {}", path.display());
        }

        Ok(())
    }
}

/// Laufende Auswertung über alle Frames.
#[derive(Default)]
struct RunStats {
    previous_handles: Option<Vec<glam::Vec2>>,
    handle_travel: f32,
}

impl RunStats {
    /// Summiert den Weg der beiden freien Griffe; die fixierten Endpunkte zählen nicht.
    fn record(&mut self, snapshot: &tilt_curve::CurveSnapshot) {
        let handles = handle_positions(snapshot);
        if let Some(previous) = &self.previous_handles {
            self.handle_travel += previous
                .iter()
                .zip(&handles)
                .map(|(a, b)| a.distance(*b))
                .sum::<f32>();
        }
        self.previous_handles = Some(handles);
    }
}

/// Positionen der Griffe (Punkte 1 und 2 im Layout Start, Griff, Griff, Ende).
fn handle_positions(snapshot: &tilt_curve::CurveSnapshot) -> Vec<glam::Vec2> {
    snapshot
        .control_points
        .get(1..3)
        .map(<[glam::Vec2]>::to_vec)
        .unwrap_or_default()
}

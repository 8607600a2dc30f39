//! Synthetischer Neigungssensor für Headless-Läufe.
//!
//! Schreibt aus einem eigenen Thread eine sanfte Taumelbewegung in den
//! `OrientationSlot`, in eigenem Takt und unabhängig vom Frame-Treiber.

use crate::core::{Orientation, OrientationSlot};
use anyhow::Context;
use std::f32::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Maximaler Rollwinkel der Taumelbewegung (Radiant).
pub const WOBBLE_AMPLITUDE: f32 = 0.6;
/// Grundfrequenz der Taumelbewegung (Hz).
pub const WOBBLE_FREQUENCY: f32 = 0.25;

/// Hintergrund-Thread, der periodisch Messwerte veröffentlicht.
///
/// Wird beim Drop gestoppt und eingesammelt.
#[derive(Debug)]
pub struct WobbleSensor {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<u64>>,
}

impl WobbleSensor {
    /// Startet den Sensor-Thread mit `rate_hz` Messwerten pro Sekunde.
    pub fn spawn(slot: OrientationSlot, rate_hz: f32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            rate_hz.is_finite() && rate_hz > 0.0,
            "Sensor-Frequenz ungültig: {}",
            rate_hz
        );
        let interval = Duration::from_secs_f32(1.0 / rate_hz);
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        // Erster Messwert synchron, damit schon der erste Frame ein Ziel hat
        let initial = u64::from(slot.publish(Self::sample(0.0)));

        let handle = thread::Builder::new()
            .name("wobble-sensor".into())
            .spawn(move || {
                let started = Instant::now();
                let mut published = initial;
                loop {
                    thread::sleep(interval);
                    if thread_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    if slot.publish(Self::sample(started.elapsed().as_secs_f32())) {
                        published += 1;
                    }
                }
                published
            })
            .context("Sensor-Thread konnte nicht gestartet werden")?;

        log::info!("Neigungssensor gestartet ({:.0} Hz)", rate_hz);
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Messwert zum Zeitpunkt `elapsed` (Sekunden seit Start).
    ///
    /// Roll und Pitch laufen mit unterschiedlicher Frequenz, damit die
    /// Kurve nicht nur auf einer Achse pendelt.
    pub fn sample(elapsed: f32) -> Orientation {
        let phase = TAU * WOBBLE_FREQUENCY * elapsed;
        Orientation::new(
            WOBBLE_AMPLITUDE * phase.sin(),
            WOBBLE_AMPLITUDE * 0.6 * (phase * 0.7).cos(),
        )
    }

    /// Stoppt den Thread und gibt die Anzahl veröffentlichter Messwerte zurück.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        self.stop.store(true, Ordering::Relaxed);
        let Some(handle) = self.handle.take() else {
            return 0;
        };
        match handle.join() {
            Ok(published) => {
                log::info!("Neigungssensor gestoppt, {} Messwerte gesendet", published);
                published
            }
            Err(_) => {
                log::error!("Sensor-Thread ist abgestürzt");
                0
            }
        }
    }
}

impl Drop for WobbleSensor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//! Zentrale Konfiguration der Kurven-Simulation.
//!
//! `SimulationOptions` wird beim Aufbau der Szene gelesen und danach nicht
//! mehr verändert. Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Physik ──────────────────────────────────────────────────────────

/// Federkonstante der Griffe.
pub const STIFFNESS: f32 = 120.0;
/// Dämpfung der Griffe (wirkt gegen die Geschwindigkeit).
pub const DAMPING: f32 = 16.0;
/// Größter Frame-Zeitschritt in Sekunden; längere Frames werden gekappt.
pub const MAX_FRAME_DT: f32 = 0.25;
/// Stabilitätsgrenze eines Integrationsschritts in Sekunden.
///
/// Frames bis zu dieser Länge werden in genau einem Schritt integriert,
/// erst darüber wird unterteilt.
pub const MAX_SUBSTEP: f32 = 1.0 / 30.0;

// ── Neigung ─────────────────────────────────────────────────────────

/// Verschiebung des Fokuspunkts in Einheiten pro Radiant.
pub const TILT_SENSITIVITY: f32 = 130.0;
/// Versatz der Griff-Ziele vom Fokuspunkt [lateral, vertikal].
pub const HANDLE_OFFSET: [f32; 2] = [70.0, 20.0];

// ── Abtastung ───────────────────────────────────────────────────────

/// Anzahl Polylinien-Punkte (t = 0 … 1 inklusive).
pub const POLYLINE_SAMPLES: usize = 101;
/// Anzahl Tangenten-Marker im Kurveninneren.
pub const TANGENT_SAMPLES: usize = 8;
/// Länge eines Tangenten-Markers.
pub const TANGENT_LENGTH: f32 = 32.0;
/// Untergrenze des Ableitungsbetrags beim Normieren.
pub const TANGENT_MIN_MAGNITUDE: f32 = 1.0;

// ── Szene / Demo ────────────────────────────────────────────────────

/// Standard-Szenengröße [Breite, Höhe].
pub const SCENE_SIZE: [f32; 2] = [400.0, 800.0];
/// Anzahl Frames im Headless-Demo.
pub const DEMO_FRAMES: u32 = 600;
/// Sendefrequenz des synthetischen Neigungssensors.
pub const SENSOR_RATE_HZ: f32 = 60.0;

/// Dateiname der Konfiguration neben der Binary.
pub const CONFIG_FILE_NAME: &str = "tilt_curve.toml";

/// Alle Konstanten der Simulation, als TOML ladbar.
/// Fehlende Schlüssel fallen auf die Standardwerte zurück.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    // ── Physik ──────────────────────────────────────────────────
    /// Federkonstante
    pub stiffness: f32,
    /// Dämpfung
    pub damping: f32,
    /// Größter Frame-Zeitschritt (Sekunden)
    pub max_frame_dt: f32,
    /// Längster Frame ohne Unterteilung (Sekunden)
    pub max_substep: f32,

    // ── Neigung ─────────────────────────────────────────────────
    /// Einheiten pro Radiant
    pub tilt_sensitivity: f32,
    /// Griff-Versatz [lateral, vertikal]
    pub handle_offset: [f32; 2],

    // ── Abtastung ───────────────────────────────────────────────
    pub polyline_samples: usize,
    pub tangent_samples: usize,
    pub tangent_length: f32,
    pub tangent_min_magnitude: f32,

    // ── Szene / Demo ────────────────────────────────────────────
    /// Szenengröße [Breite, Höhe] für den Standard-Aufbau
    pub scene_size: [f32; 2],
    pub demo_frames: u32,
    pub sensor_rate_hz: f32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            damping: DAMPING,
            max_frame_dt: MAX_FRAME_DT,
            max_substep: MAX_SUBSTEP,

            tilt_sensitivity: TILT_SENSITIVITY,
            handle_offset: HANDLE_OFFSET,

            polyline_samples: POLYLINE_SAMPLES,
            tangent_samples: TANGENT_SAMPLES,
            tangent_length: TANGENT_LENGTH,
            tangent_min_magnitude: TANGENT_MIN_MAGNITUDE,

            scene_size: SCENE_SIZE,
            demo_frames: DEMO_FRAMES,
            sensor_rate_hz: SENSOR_RATE_HZ,
        }
    }
}

impl SimulationOptions {
    /// Liest die Simulations-Konstanten aus `path`.
    ///
    /// Fehlt die Datei oder ist sie kein gültiges TOML, läuft die Szene mit
    /// den eingebauten Konstanten weiter.
    pub fn load_from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::info!(
                    "Keine Simulations-Konfiguration unter {} ({}), nutze eingebaute Konstanten",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!(
                "Simulations-Konfiguration {} nicht lesbar, nutze eingebaute Konstanten: {}",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Schreibt die Konstanten als TOML, z.B. als Vorlage zum Anpassen.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Konfiguration nicht schreibbar: {}", path.display()))?;
        log::info!("Simulations-Konfiguration geschrieben: {}", path.display());
        Ok(())
    }

    /// `tilt_curve.toml` im Verzeichnis der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Prüft die Werte auf physikalisch sinnvolle Bereiche.
    pub fn validate(&self) -> anyhow::Result<()> {
        let floats = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("max_frame_dt", self.max_frame_dt),
            ("max_substep", self.max_substep),
            ("tilt_sensitivity", self.tilt_sensitivity),
            ("handle_offset[0]", self.handle_offset[0]),
            ("handle_offset[1]", self.handle_offset[1]),
            ("tangent_length", self.tangent_length),
            ("tangent_min_magnitude", self.tangent_min_magnitude),
            ("scene_size[0]", self.scene_size[0]),
            ("scene_size[1]", self.scene_size[1]),
            ("sensor_rate_hz", self.sensor_rate_hz),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            bail!("{} ist nicht endlich: {}", name, value);
        }

        if self.stiffness <= 0.0 {
            bail!("stiffness muss > 0 sein (ist {})", self.stiffness);
        }
        if self.damping < 0.0 {
            bail!("damping darf nicht negativ sein (ist {})", self.damping);
        }
        if self.max_frame_dt <= 0.0 || self.max_substep <= 0.0 {
            bail!(
                "max_frame_dt und max_substep müssen > 0 sein ({} / {})",
                self.max_frame_dt,
                self.max_substep
            );
        }
        if self.polyline_samples < 2 {
            bail!(
                "polyline_samples muss mindestens 2 sein (ist {})",
                self.polyline_samples
            );
        }
        if self.tangent_min_magnitude <= 0.0 {
            bail!(
                "tangent_min_magnitude muss > 0 sein (ist {})",
                self.tangent_min_magnitude
            );
        }
        if self.scene_size[0] <= 0.0 || self.scene_size[1] <= 0.0 {
            bail!("scene_size muss positiv sein: {:?}", self.scene_size);
        }
        if self.sensor_rate_hz <= 0.0 {
            bail!("sensor_rate_hz muss > 0 sein (ist {})", self.sensor_rate_hz);
        }
        Ok(())
    }
}

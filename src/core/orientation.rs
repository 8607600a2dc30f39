//! Ein-Slot-Übergabe des jeweils letzten Orientierungs-Messwerts.
//!
//! Der Sensor schreibt aus beliebigem Thread, `tick` liest synchron.
//! Keine Queue: ein neuer Wert überschreibt den alten.

use super::tilt::Orientation;
use std::sync::{Arc, Mutex, MutexGuard};

/// Teilbarer Handle auf den zuletzt gemeldeten Messwert.
#[derive(Debug, Clone, Default)]
pub struct OrientationSlot {
    latest: Arc<Mutex<Option<Orientation>>>,
}

impl OrientationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Überschreibt den Slot. Nicht-endliche Messwerte werden verworfen.
    ///
    /// Gibt `true` zurück, wenn der Wert übernommen wurde.
    pub fn publish(&self, orientation: Orientation) -> bool {
        if !orientation.is_finite() {
            log::debug!("Ungültiger Orientierungswert verworfen: {:?}", orientation);
            return false;
        }
        *self.lock() = Some(orientation);
        true
    }

    /// Letzter gültiger Messwert (bleibt im Slot stehen).
    pub fn latest(&self) -> Option<Orientation> {
        *self.lock()
    }

    /// Setzt den Slot zurück, z.B. beim Abmelden der Sensorquelle.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<Orientation>> {
        // Inhalt ist ein reiner Wert, nach Panik eines Schreibers weiterhin konsistent
        self.latest.lock().unwrap_or_else(|poisoned| {
            log::warn!("Orientation-Lock vergiftet, verwende letzten Wert weiter");
            poisoned.into_inner()
        })
    }
}

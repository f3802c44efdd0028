//! Visitor preferences
//!
//! Persisted as JSON in LocalStorage so sound/motion choices survive a
//! reload. Native builds stub the storage round-trip.

use serde::{Deserialize, Serialize};

/// Scene quality presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Particle count for the hero field at this preset.
    pub fn particle_count(&self) -> usize {
        match self {
            QualityPreset::Low => 500,
            QualityPreset::Medium => 1000,
            QualityPreset::High => 1500,
        }
    }
}

/// Page settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Scene quality preset
    pub quality: QualityPreset,

    /// Sound feedback muted (sound is opt-in, so this starts true)
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    /// Freeze the pulse/tilt animation for motion-sensitive visitors
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            muted: true,
            master_volume: 0.8,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "technova_settings";

    /// Toggle mute and report the new state.
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_muted() {
        let settings = Settings::default();
        assert!(settings.muted);
        assert_eq!(settings.quality, QualityPreset::Medium);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_toggle_muted_round_trips() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_muted());
        assert!(settings.toggle_muted());
    }

    #[test]
    fn test_preset_particle_counts() {
        assert_eq!(QualityPreset::Low.particle_count(), 500);
        assert_eq!(QualityPreset::Medium.particle_count(), 1000);
        assert_eq!(QualityPreset::High.particle_count(), 1500);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.muted = false;
        settings.quality = QualityPreset::High;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(!back.muted);
        assert_eq!(back.quality, QualityPreset::High);
    }
}

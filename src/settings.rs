//! Simulation settings
//!
//! Loaded from a JSON file; every field falls back to its default when
//! missing, so an empty object `{}` is a valid settings file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::{Rect, SpreadRange};

/// Quality preset levels
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

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Pool capacity for this preset.
    ///
    /// The pairwise sweep is quadratic, so even High stays in the low
    /// hundreds.
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 50,
            QualityPreset::Medium => DEFAULT_MAX_PARTICLES,
            QualityPreset::High => 250,
        }
    }
}

/// Where particles spawn and how their starting state is randomized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Overrides the preset's capacity when set
    pub max_particles: Option<usize>,
    /// Baseline life every particle starts with
    pub particle_life: f32,
    pub spread_x: SpreadRange,
    pub spread_y: SpreadRange,
    pub spread_z: SpreadRange,
    pub spread_gravity: SpreadRange,
    pub spread_fade: SpreadRange,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            origin_x: PLANE_WIDTH / 2.0,
            origin_y: PLANE_HEIGHT / 2.0,
            max_particles: None,
            particle_life: DEFAULT_PARTICLE_LIFE,
            spread_x: DEFAULT_SPREAD_X,
            spread_y: DEFAULT_SPREAD_Y,
            spread_z: DEFAULT_SPREAD_Z,
            spread_gravity: DEFAULT_SPREAD_GRAVITY,
            spread_fade: DEFAULT_SPREAD_FADE,
        }
    }
}

/// Full settings for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: QualityPreset,
    /// RNG seed; same seed, same run
    pub seed: u64,
    /// Width of the simulated plane (bounds far-x)
    pub plane_width: f32,
    /// Height of the simulated plane (bounds far-y)
    pub plane_height: f32,
    pub generator: GeneratorSettings,
    /// Frames the headless driver runs
    pub frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            seed: 0,
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            generator: GeneratorSettings::default(),
            frames: 600,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the generator cannot sample from.
    ///
    /// Reversed spreads are fine here; the generator swaps them.
    pub fn validate(&self) -> SimResult<()> {
        let g = &self.generator;
        if !g.particle_life.is_finite() || g.particle_life <= 0.0 {
            return Err(SimError::InvalidParticleLife {
                value: g.particle_life,
            });
        }
        for (name, spread) in [
            ("x", g.spread_x),
            ("y", g.spread_y),
            ("z", g.spread_z),
            ("gravity", g.spread_gravity),
            ("fade", g.spread_fade),
        ] {
            SpreadRange::new(name, spread.min, spread.max)?;
        }
        Ok(())
    }

    /// Effective pool capacity
    pub fn max_particles(&self) -> usize {
        self.generator
            .max_particles
            .unwrap_or_else(|| self.quality.max_particles())
    }

    /// Bounds rectangle in far-edge form
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.plane_width, self.plane_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_particles(), DEFAULT_MAX_PARTICLES);
        assert_eq!(settings.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_partial_generator_override() {
        let json = r#"{
            "quality": "High",
            "generator": { "max_particles": 12, "spread_x": { "min": -3.0, "max": 3.0 } }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.quality, QualityPreset::High);
        assert_eq!(settings.max_particles(), 12);
        assert_eq!(settings.generator.spread_x, SpreadRange::fixed(-3.0, 3.0));
        assert_eq!(settings.generator.spread_y, DEFAULT_SPREAD_Y);
    }

    #[test]
    fn test_preset_capacity() {
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 50);
        assert_eq!(Settings::from_preset(QualityPreset::High).max_particles(), 250);
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
    }

    #[test]
    fn test_invalid_life_rejected() {
        let json = r#"{ "generator": { "particle_life": 0.0 } }"#;
        assert!(matches!(
            Settings::from_json(json),
            Err(SimError::InvalidParticleLife { .. })
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SimError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::from_preset(QualityPreset::Low);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Settings::load("/nonexistent/sparkfall.json"),
            Err(SimError::Io(_))
        ));
    }
}

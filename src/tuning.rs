//! Data-driven game balance
//!
//! Every number that shapes how a round feels lives here so it can be
//! tweaked from a JSON file without touching the simulation. Missing keys
//! fall back to the defaults, so a tuning file only needs the overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Simulation balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Boat ===
    /// Horizontal boat speed (pixels per tick)
    pub boat_speed: f32,
    /// Shortest wake-particle cooldown (ticks)
    pub particle_cooldown_min: i32,
    /// Longest wake-particle cooldown (ticks)
    pub particle_cooldown_max: i32,
    /// Horizontal wake-particle speed (pixels per tick)
    pub particle_speed: f32,
    /// Initial upward kick of a wake particle (pixels per tick, negative is up)
    pub particle_lift: f32,
    /// Downward acceleration applied to particles every tick
    pub gravity: f32,
    /// Live particle cap (emission is skipped while full)
    pub max_particles: usize,

    // === Water ===
    /// Wave amplitude in pixels
    pub wave_amplitude: f32,
    /// Phase advance per tick
    pub wave_speed: f32,

    // === Line ===
    /// Length change per tick while casting or reeling
    pub line_step: f32,
    /// Maximum line length
    pub line_max_length: f32,

    // === Fish ===
    /// Fish velocity components are sampled from `-fish_speed_max..=fish_speed_max`
    pub fish_speed_max: i32,

    // === Evil fish spawning ===
    /// Delay before the first evil fish (ms)
    pub spawn_interval_initial_ms: u64,
    /// Interval reduction applied after every spawn (ms)
    pub spawn_interval_step_ms: u64,
    /// Interval never shrinks below this (ms)
    pub spawn_interval_floor_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            boat_speed: 5.0,
            particle_cooldown_min: 20,
            particle_cooldown_max: 40,
            particle_speed: 2.0,
            particle_lift: -1.0,
            gravity: 0.5,
            max_particles: 256,

            wave_amplitude: 10.0,
            wave_speed: 1.0,

            line_step: 5.0,
            line_max_length: 450.0,

            fish_speed_max: 3,

            spawn_interval_initial_ms: 20_000,
            spawn_interval_step_ms: 1_000,
            spawn_interval_floor_ms: 5_000,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break the simulation clamps
    pub fn validate(&self) -> Result<()> {
        if !(self.boat_speed >= 0.0) {
            return Err(Error::invalid("boat_speed", "must be non-negative"));
        }
        if self.particle_cooldown_min < 1 {
            return Err(Error::invalid("particle_cooldown_min", "must be at least 1"));
        }
        if self.particle_cooldown_max < self.particle_cooldown_min {
            return Err(Error::invalid(
                "particle_cooldown_max",
                format!("must be >= particle_cooldown_min ({})", self.particle_cooldown_min),
            ));
        }
        if !(self.line_step > 0.0) {
            return Err(Error::invalid("line_step", "must be positive"));
        }
        if !(self.line_max_length >= 0.0) {
            return Err(Error::invalid("line_max_length", "must be non-negative"));
        }
        if self.fish_speed_max < 0 {
            return Err(Error::invalid("fish_speed_max", "must be non-negative"));
        }
        if self.spawn_interval_floor_ms == 0 {
            return Err(Error::invalid("spawn_interval_floor_ms", "must be positive"));
        }
        if self.spawn_interval_initial_ms < self.spawn_interval_floor_ms {
            return Err(Error::invalid(
                "spawn_interval_initial_ms",
                format!(
                    "must be >= spawn_interval_floor_ms ({})",
                    self.spawn_interval_floor_ms
                ),
            ));
        }
        if !(self.wave_speed > 0.0) || !self.wave_speed.is_finite() {
            return Err(Error::invalid("wave_speed", "must be positive and finite"));
        }
        let finite = [
            ("wave_amplitude", self.wave_amplitude),
            ("gravity", self.gravity),
            ("particle_speed", self.particle_speed),
            ("particle_lift", self.particle_lift),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(Error::invalid(field, "must be finite"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "boat_speed": 8.0, "line_max_length": 300 }"#)
            .expect("partial tuning should parse");
        assert_eq!(tuning.boat_speed, 8.0);
        assert_eq!(tuning.line_max_length, 300.0);
        assert_eq!(tuning.spawn_interval_initial_ms, 20_000);
        assert_eq!(tuning.gravity, 0.5);
    }

    #[test]
    fn test_rejects_inverted_cooldown() {
        let json = r#"{ "particle_cooldown_min": 30, "particle_cooldown_max": 10 }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Invalid { field: "particle_cooldown_max", .. }));
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let err = Tuning::from_json(r#"{ "spawn_interval_initial_ms": 1000 }"#).unwrap_err();
        assert!(matches!(err, Error::Invalid { field: "spawn_interval_initial_ms", .. }));
    }

    #[test]
    fn test_rejects_backwards_or_still_waves() {
        for json in [r#"{ "wave_speed": -1 }"#, r#"{ "wave_speed": 0 }"#] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, Error::Invalid { field: "wave_speed", .. }));
        }
    }

    #[test]
    fn test_rejects_non_finite_particle_motion() {
        let tuning = Tuning {
            particle_speed: f32::NAN,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(matches!(err, Error::Invalid { field: "particle_speed", .. }));

        let tuning = Tuning {
            particle_lift: f32::NEG_INFINITY,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(matches!(err, Error::Invalid { field: "particle_lift", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ boat_speed: ").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let tuning = Tuning {
            gravity: 0.8,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}

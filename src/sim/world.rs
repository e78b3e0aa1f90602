//! World dimensions and sprite sizes
//!
//! Sprite sizes are only used for bounding-box math; the simulation never
//! touches image data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::error::{Error, Result};

/// Static description of the play field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Depth of the water, measured up from the bottom of the world
    pub water_band: f32,
    /// Number of regular fish in the pool
    pub fish_count: usize,
    pub boat_size: Vec2,
    pub fish_size: Vec2,
    pub evil_fish_size: Vec2,
    pub particle_size: Vec2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            water_band: WATER_BAND,
            fish_count: FISH_COUNT,
            boat_size: BOAT_SIZE,
            fish_size: FISH_SIZE,
            evil_fish_size: EVIL_FISH_SIZE,
            particle_size: PARTICLE_SIZE,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f32, height: f32, water_band: f32, fish_count: usize) -> Self {
        Self {
            width,
            height,
            water_band,
            fish_count,
            ..Default::default()
        }
    }

    /// Resting y of the water surface (no wave displacement)
    #[inline]
    pub fn water_top(&self) -> f32 {
        self.height - self.water_band
    }

    /// The visible world
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Region fish must stay inside: below the surface, above the floor
    pub fn confinement(&self) -> Rect {
        Rect::new(0.0, self.water_top(), self.width, self.water_band)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::invalid("width/height", "world must have positive area"));
        }
        if !(self.water_band > 0.0 && self.water_band <= self.height) {
            return Err(Error::invalid(
                "water_band",
                format!("must be in (0, {}]", self.height),
            ));
        }
        if self.boat_size.x > self.width || self.boat_size.min_element() <= 0.0 {
            return Err(Error::invalid("boat_size", "boat must be positive and fit the world"));
        }
        // Fish placement samples a half-open range, so it needs at least one pixel of slack
        let fish_sizes = [
            ("fish_size", self.fish_size),
            ("evil_fish_size", self.evil_fish_size),
        ];
        for (field, size) in fish_sizes {
            if size.min_element() <= 0.0 || size.x >= self.width || size.y >= self.water_band {
                return Err(Error::invalid(
                    field,
                    "fish must be positive and smaller than the water",
                ));
            }
        }
        if self.particle_size.min_element() <= 0.0 {
            return Err(Error::invalid("particle_size", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world() {
        let world = WorldConfig::default();
        assert!(world.validate().is_ok());
        assert_eq!(world.water_top(), 100.0);
        assert_eq!(world.confinement().bottom(), 600.0);
    }

    #[test]
    fn test_fish_must_fit_water() {
        let world = WorldConfig::new(800.0, 600.0, 15.0, 9);
        assert!(matches!(
            world.validate(),
            Err(Error::Invalid { field: "fish_size", .. })
        ));
    }

    #[test]
    fn test_band_deeper_than_world() {
        let world = WorldConfig::new(800.0, 600.0, 700.0, 9);
        assert!(matches!(
            world.validate(),
            Err(Error::Invalid { field: "water_band", .. })
        ));
    }
}

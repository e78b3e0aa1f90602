//! Fish and evil fish
//!
//! Both kinds share one entity type and the same bouncing motion. What
//! happens on capture is looked up from the kind's behavior table rather
//! than specialised per type.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::Facing;
use super::world::WorldConfig;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FishKind {
    Normal,
    Evil,
}

/// Capture consequences for a fish kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishBehavior {
    /// Resample position/velocity instead of leaving the fish in place
    pub resets_on_capture: bool,
    /// Hooking this fish ends the round
    pub ends_round: bool,
    /// Score awarded per capture
    pub points: u64,
}

impl FishKind {
    pub const fn behavior(self) -> FishBehavior {
        match self {
            FishKind::Normal => FishBehavior {
                resets_on_capture: true,
                ends_round: false,
                points: 1,
            },
            FishKind::Evil => FishBehavior {
                resets_on_capture: false,
                ends_round: true,
                points: 0,
            },
        }
    }

    /// Sprite size from the world config
    pub fn size(self, world: &WorldConfig) -> Vec2 {
        match self {
            FishKind::Normal => world.fish_size,
            FishKind::Evil => world.evil_fish_size,
        }
    }
}

/// A fish entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    pub id: u32,
    pub kind: FishKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Integer-valued velocity (pixels per tick)
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Fish {
    /// Create a fish at a random spot inside the water
    pub fn spawn<R: Rng>(
        id: u32,
        kind: FishKind,
        world: &WorldConfig,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Self {
        let mut fish = Self {
            id,
            kind,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: kind.size(world),
            facing: Facing::Right,
        };
        fish.reset(world, tuning, rng);
        fish
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Resample position and velocity (initial placement and respawn after capture)
    pub fn reset<R: Rng>(&mut self, world: &WorldConfig, tuning: &Tuning, rng: &mut R) {
        let (min, max) = self.travel_range(world);
        // Whole-pixel placement in the half-open range [min, max)
        self.pos = Vec2::new(
            min.x + rng.random_range(0..(max.x - min.x).max(1.0) as u32) as f32,
            min.y + rng.random_range(0..(max.y - min.y).max(1.0) as u32) as f32,
        );
        let speed = tuning.fish_speed_max;
        self.vel = Vec2::new(
            rng.random_range(-speed..=speed) as f32,
            rng.random_range(-speed..=speed) as f32,
        );
        self.update_facing();
    }

    /// Move one tick, bouncing off the confinement edges
    pub fn update(&mut self, world: &WorldConfig) {
        let (min, max) = self.travel_range(world);
        self.pos += self.vel;

        if self.pos.x < min.x || self.pos.x > max.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(min.x, max.x);
        }
        if self.pos.y < min.y || self.pos.y > max.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(min.y, max.y);
        }
        self.update_facing();
    }

    /// Legal range for the top-left corner
    fn travel_range(&self, world: &WorldConfig) -> (Vec2, Vec2) {
        let band = world.confinement();
        let min = band.pos;
        let max = Vec2::new(band.right() - self.size.x, band.bottom() - self.size.y).max(min);
        (min, max)
    }

    fn update_facing(&mut self) {
        if self.vel.x > 0.0 {
            self.facing = Facing::Right;
        } else if self.vel.x < 0.0 {
            self.facing = Facing::Left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_behavior_table() {
        assert!(FishKind::Normal.behavior().resets_on_capture);
        assert_eq!(FishKind::Normal.behavior().points, 1);
        assert!(!FishKind::Evil.behavior().resets_on_capture);
        assert!(FishKind::Evil.behavior().ends_round);
        assert_eq!(FishKind::Evil.behavior().points, 0);
    }

    #[test]
    fn test_reset_samples_inside_water() {
        let world = WorldConfig::default();
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..200 {
            let fish = Fish::spawn(id, FishKind::Normal, &world, &tuning, &mut rng);
            assert!(world.confinement().contains_rect(&fish.rect()));
            assert!(fish.vel.x.abs() <= 3.0 && fish.vel.y.abs() <= 3.0);
            assert_eq!(fish.vel.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_bounce_off_right_wall() {
        let world = WorldConfig::default();
        let mut fish = Fish {
            id: 1,
            kind: FishKind::Normal,
            pos: Vec2::new(758.0, 300.0),
            vel: Vec2::new(3.0, 0.0),
            size: world.fish_size,
            facing: Facing::Right,
        };
        fish.update(&world);
        assert_eq!(fish.pos.x, 760.0);
        assert_eq!(fish.vel.x, -3.0);
        assert_eq!(fish.facing, Facing::Left);
    }

    #[test]
    fn test_bounce_off_surface() {
        let world = WorldConfig::default();
        let mut fish = Fish {
            id: 1,
            kind: FishKind::Evil,
            pos: Vec2::new(300.0, 101.0),
            vel: Vec2::new(0.0, -3.0),
            size: world.evil_fish_size,
            facing: Facing::Left,
        };
        fish.update(&world);
        assert_eq!(fish.pos.y, world.water_top());
        assert_eq!(fish.vel.y, 3.0);
        // Zero horizontal speed keeps the previous facing
        assert_eq!(fish.facing, Facing::Left);
    }

    proptest! {
        #[test]
        fn prop_fish_stay_confined(
            seed in any::<u64>(),
            ticks in 1usize..600,
            evil in any::<bool>(),
        ) {
            let world = WorldConfig::default();
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let kind = if evil { FishKind::Evil } else { FishKind::Normal };
            let mut fish = Fish::spawn(1, kind, &world, &tuning, &mut rng);
            for _ in 0..ticks {
                fish.update(&world);
                prop_assert!(world.confinement().contains_rect(&fish.rect()));
            }
        }
    }
}

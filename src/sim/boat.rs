//! The player's boat
//!
//! Horizontal motion comes from input; vertical position is slaved to the
//! water surface under the boat's center. While moving, the boat sheds wake
//! particles off its trailing edge on a randomized cooldown.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::particle::Particle;
use super::state::Facing;
use super::wave::{Wave, combined_height};
use super::world::WorldConfig;
use crate::tuning::Tuning;

/// Gap between the hull edge and a freshly emitted wake particle
const WAKE_GAP: f32 = 5.0;

/// The player-controlled boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Last direction moved; idle frames keep it
    pub facing: Facing,
    /// Whether a direction was held this tick
    pub moving: bool,
    /// Summed wave displacement under the boat this tick
    pub vertical_offset: f32,
    /// Ticks until the next wake particle (only counts down while moving)
    pub particle_cooldown: i32,
}

impl Boat {
    /// Boat centered on the world, riding the flat water line
    pub fn new(world: &WorldConfig) -> Self {
        let size = world.boat_size;
        Self {
            pos: Vec2::new(world.width / 2.0 - size.x / 2.0, world.water_top() - size.y),
            size,
            facing: Facing::Right,
            moving: false,
            vertical_offset: 0.0,
            particle_cooldown: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Largest legal x for the left edge
    #[inline]
    fn max_x(&self, world: &WorldConfig) -> f32 {
        (world.width - self.size.x).max(0.0)
    }

    /// Advance one tick; returns a wake particle if one was shed
    pub fn update<R: Rng>(
        &mut self,
        held: Option<Facing>,
        waves: &[Wave],
        world: &WorldConfig,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Particle> {
        self.moving = held.is_some();
        if let Some(direction) = held {
            self.pos.x += direction.sign() * tuning.boat_speed;
            self.facing = direction;
        }
        self.pos.x = self.pos.x.clamp(0.0, self.max_x(world));

        // Ride the water: bottom edge follows the surface under the hull center
        self.vertical_offset = combined_height(waves, self.center_x());
        self.pos.y = world.water_top() + self.vertical_offset - self.size.y;

        if !self.moving {
            return None;
        }

        let wake = if self.particle_cooldown <= 0 {
            self.particle_cooldown =
                rng.random_range(tuning.particle_cooldown_min..=tuning.particle_cooldown_max);
            Some(self.shed_wake(tuning))
        } else {
            None
        };
        self.particle_cooldown -= 1;
        wake
    }

    /// Particle thrown off the edge opposite the direction of travel
    fn shed_wake(&self, tuning: &Tuning) -> Particle {
        let rect = self.rect();
        let side = self.facing.opposite();
        let x = match side {
            Facing::Left => rect.left() - WAKE_GAP,
            Facing::Right => rect.right() + WAKE_GAP,
        };
        Particle::new(
            Vec2::new(x, rect.center().y),
            Vec2::new(side.sign() * tuning.particle_speed, tuning.particle_lift),
            side,
        )
    }
}

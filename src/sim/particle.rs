//! Decorative wake particles
//!
//! Particles never affect gameplay. They fall under constant gravity and are
//! tombstoned once they leave the world; dead entries are swept at the end of
//! the tick so updates never reshuffle the collection mid-iteration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::Facing;

/// A single wake droplet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Boat side the droplet came off (cosmetic)
    pub side: Facing,
    /// Cleared once the particle leaves the world; swept at end of tick
    pub alive: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, side: Facing) -> Self {
        Self {
            pos,
            vel,
            side,
            alive: true,
        }
    }

    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::from_center(self.pos, size)
    }

    /// Apply gravity, move, and tombstone if fully off-screen
    pub fn update(&mut self, gravity: f32, size: Vec2, bounds: &Rect) {
        if !self.alive {
            return;
        }
        self.vel.y += gravity;
        self.pos += self.vel;
        if self.rect(size).is_outside(bounds) {
            self.alive = false;
        }
    }
}

/// Owning collection of live particles
#[derive(Debug, Clone, Default)]
pub struct Particles {
    items: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a particle unless the cap is reached; returns whether it was added
    pub fn emit(&mut self, particle: Particle, cap: usize) -> bool {
        if self.items.len() >= cap {
            return false;
        }
        self.items.push(particle);
        true
    }

    /// Advance every live particle one tick
    pub fn update(&mut self, gravity: f32, size: Vec2, bounds: &Rect) {
        for particle in &mut self.items {
            particle.update(gravity, size, bounds);
        }
    }

    /// Drop tombstoned particles; returns how many were removed
    pub fn sweep(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|p| p.alive);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter().filter(|p| p.alive)
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

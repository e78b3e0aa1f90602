//! Hook collision and capture resolution
//!
//! The only collider on the player side is the line tip. Every fish whose
//! bounding box contains that point is captured in the same tick.

use glam::Vec2;
use rand::Rng;

use super::fish::{Fish, FishKind};
use super::world::WorldConfig;
use crate::tuning::Tuning;

/// A single fish hooked this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub fish_id: u32,
    pub kind: FishKind,
}

/// Result of resolving the hook against every fish
#[derive(Debug, Clone, Default)]
pub struct CaptureOutcome {
    pub captures: Vec<Capture>,
    /// Score earned this tick
    pub points: u64,
    /// A round-ending fish was hooked
    pub ends_round: bool,
}

/// Indices of every fish whose bounds contain the hook point
pub fn hooked_indices(tip: Vec2, fish: &[Fish]) -> Vec<usize> {
    fish.iter()
        .enumerate()
        .filter(|(_, f)| f.rect().contains_point(tip))
        .map(|(i, _)| i)
        .collect()
}

/// Test the hook against all fish and apply each kind's capture behavior
pub fn resolve_captures<R: Rng>(
    tip: Vec2,
    fish: &mut [Fish],
    world: &WorldConfig,
    tuning: &Tuning,
    rng: &mut R,
) -> CaptureOutcome {
    let mut outcome = CaptureOutcome::default();

    for index in hooked_indices(tip, fish) {
        let hooked = &mut fish[index];
        let behavior = hooked.kind.behavior();

        outcome.captures.push(Capture {
            fish_id: hooked.id,
            kind: hooked.kind,
        });
        outcome.points += behavior.points;
        outcome.ends_round |= behavior.ends_round;

        if behavior.resets_on_capture {
            hooked.reset(world, tuning, rng);
        }
    }

    outcome
}

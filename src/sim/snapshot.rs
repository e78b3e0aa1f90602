//! Read-only view of a round for the presentation layer
//!
//! Captured after every tick. Renderers draw from this and never touch
//! `GameState` directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fish::FishKind;
use super::geometry::Rect;
use super::state::{Facing, GamePhase, GameState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatView {
    pub rect: Rect,
    pub facing: Facing,
    pub moving: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineView {
    pub anchor: Vec2,
    pub tip: Vec2,
    pub length: f32,
    pub casting: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishView {
    pub id: u32,
    pub kind: FishKind,
    pub rect: Rect,
    pub facing: Facing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub rect: Rect,
    pub side: Facing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveView {
    pub amplitude: f32,
    pub wavelength: f32,
    pub offset: f32,
    pub baseline: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tick: u64,
    pub boat: BoatView,
    pub line: LineView,
    pub fish: Vec<FishView>,
    pub evil_fish: Vec<FishView>,
    pub particles: Vec<ParticleView>,
    pub waves: Vec<WaveView>,
    pub score: u64,
    pub elapsed_ms: u64,
    pub spawn_interval_ms: u64,
    pub phase: GamePhase,
    pub terminal: bool,
}

impl SessionSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let (evil, regular): (Vec<_>, Vec<_>) = state
            .fish
            .iter()
            .map(|f| FishView {
                id: f.id,
                kind: f.kind,
                rect: f.rect(),
                facing: f.facing,
            })
            .partition(|view| view.kind == FishKind::Evil);

        Self {
            tick: state.time_ticks,
            boat: BoatView {
                rect: state.boat.rect(),
                facing: state.boat.facing,
                moving: state.boat.moving,
            },
            line: LineView {
                anchor: state.line.anchor,
                tip: state.line.tip(),
                length: state.line.length,
                casting: state.line.is_casting(),
            },
            fish: regular,
            evil_fish: evil,
            particles: state
                .particles
                .iter()
                .map(|p| ParticleView {
                    rect: p.rect(state.world.particle_size),
                    side: p.side,
                })
                .collect(),
            waves: state
                .waves
                .iter()
                .map(|w| WaveView {
                    amplitude: w.amplitude,
                    wavelength: w.wavelength,
                    offset: w.offset,
                    baseline: w.baseline,
                })
                .collect(),
            score: state.score,
            elapsed_ms: state.elapsed_ms,
            spawn_interval_ms: state.spawner.interval_ms,
            phase: state.phase,
            terminal: state.terminal,
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

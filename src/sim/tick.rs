//! Fixed timestep simulation tick
//!
//! Core game loop that advances a round deterministically. Order within a
//! tick: input, boat, line, fish, particles, hook collisions, spawning, wave
//! phase, end-of-tick sweep.

use super::autopilot;
use super::collision::resolve_captures;
use super::fish::FishKind;
use super::snapshot::SessionSnapshot;
use super::state::{Facing, GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Cast/reel toggle pressed this tick (one-shot)
    pub toggle_cast: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Demo mode - the boat plays itself
    pub autopilot: bool,
}

impl TickInput {
    /// Held direction; left wins if both are held
    pub fn held_direction(&self) -> Option<Facing> {
        if self.move_left {
            Some(Facing::Left)
        } else if self.move_right {
            Some(Facing::Right)
        } else {
            None
        }
    }
}

/// Advance the round by one step of `dt_ms` and return the resulting frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) -> SessionSnapshot {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::debug!("Paused at {} ms", state.elapsed_ms);
                return SessionSnapshot::capture(state);
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return SessionSnapshot::capture(state),
        GamePhase::Playing => {}
    }

    let mut input = input.clone();
    if input.autopilot {
        autopilot::steer(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    state.elapsed_ms = state.elapsed_ms.saturating_add(dt_ms);

    if input.toggle_cast {
        state.line.toggle();
    }

    // Boat rides the current wave phase and may shed a wake particle
    let wake = state.boat.update(
        input.held_direction(),
        &state.waves,
        &state.world,
        &state.tuning,
        &mut state.rng,
    );
    if let Some(particle) = wake {
        state.particles.emit(particle, state.tuning.max_particles);
    }

    state.line.update(&state.boat, &state.tuning);

    for fish in &mut state.fish {
        fish.update(&state.world);
    }

    state.particles.update(
        state.tuning.gravity,
        state.world.particle_size,
        &state.world.bounds(),
    );

    // Hook collisions against the post-move positions
    let outcome = resolve_captures(
        state.line.tip(),
        &mut state.fish,
        &state.world,
        &state.tuning,
        &mut state.rng,
    );
    for capture in &outcome.captures {
        match capture.kind {
            FishKind::Normal => {
                state.score += capture.kind.behavior().points;
                log::debug!("Caught fish {} (score {})", capture.fish_id, state.score);
                let score = state.score;
                state.push_event(GameEvent::FishCaught {
                    id: capture.fish_id,
                    score,
                });
            }
            FishKind::Evil => {
                log::debug!("Hooked evil fish {}", capture.fish_id);
                state.push_event(GameEvent::EvilFishCaught {
                    id: capture.fish_id,
                });
            }
        }
    }
    if outcome.ends_round && !state.terminal {
        state.terminal = true;
    }

    // New evil fish join after collisions, so they are first tested next tick
    if state.spawner.poll(state.elapsed_ms) {
        let id = state.spawn_fish(FishKind::Evil);
        let next_interval_ms = state.spawner.interval_ms;
        log::info!(
            "Evil fish {} spawned at {} ms (next in {} ms)",
            id,
            state.elapsed_ms,
            next_interval_ms
        );
        state.push_event(GameEvent::EvilFishSpawned { id, next_interval_ms });
    }

    for wave in &mut state.waves {
        wave.advance();
    }

    // End of tick: drop dead particles, then consume the terminal flag
    state.particles.sweep();
    if state.terminal {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Round over: score={}, time={}",
            state.score,
            crate::format_elapsed(state.elapsed_ms)
        );
        let (score, elapsed_ms) = (state.score, state.elapsed_ms);
        state.push_event(GameEvent::RoundOver { score, elapsed_ms });
    }

    SessionSnapshot::capture(state)
}

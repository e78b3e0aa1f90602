//! Round state and shared simulation types
//!
//! A `GameState` is one round: it owns every entity collection, the RNG and
//! the round clock. Only `tick` mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boat::Boat;
use super::fish::{Fish, FishKind};
use super::line::FishingLine;
use super::particle::Particles;
use super::spawn::SpawnScheduler;
use super::wave::{Wave, surface_profile};
use super::world::WorldConfig;
use crate::error::Result;
use crate::tuning::Tuning;

/// Horizontal facing of an entity (renderers pick or flip sprites from this)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen; nothing advances
    Paused,
    /// An evil fish was hooked
    GameOver,
}

/// Notable things that happened during a tick (sound/flash hooks)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FishCaught { id: u32, score: u64 },
    EvilFishCaught { id: u32 },
    EvilFishSpawned { id: u32, next_interval_ms: u64 },
    RoundOver { score: u64, elapsed_ms: u64 },
}

/// RNG state wrapper for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: WorldConfig,
    pub tuning: Tuning,
    pub rng_state: RngState,
    pub(crate) rng: Pcg32,
    /// Score (regular fish caught)
    pub score: u64,
    /// Round clock (ms since start, frozen while paused)
    pub elapsed_ms: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Set once, in the tick an evil fish is hooked
    pub terminal: bool,
    pub waves: Vec<Wave>,
    pub boat: Boat,
    pub line: FishingLine,
    /// Regular and evil fish, in spawn order
    pub fish: Vec<Fish>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Particles,
    pub spawner: SpawnScheduler,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Start a round: one wave, the boat centered, `fish_count` regular fish
    pub fn new(world: WorldConfig, tuning: Tuning, seed: u64) -> Result<Self> {
        world.validate()?;
        tuning.validate()?;

        let rng_state = RngState::new(seed);
        let waves = vec![Wave::new(
            tuning.wave_amplitude,
            world.width,
            tuning.wave_speed,
            world.water_top(),
        )];
        let boat = Boat::new(&world);
        let line = FishingLine::new(&boat);
        let spawner = SpawnScheduler::new(&tuning);

        let mut state = Self {
            rng: rng_state.to_rng(),
            rng_state,
            score: 0,
            elapsed_ms: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            terminal: false,
            waves,
            boat,
            line,
            fish: Vec::with_capacity(world.fish_count),
            particles: Particles::new(),
            spawner,
            events: Vec::new(),
            next_id: 1,
            world,
            tuning,
        };

        for _ in 0..state.world.fish_count {
            state.spawn_fish(FishKind::Normal);
        }

        log::info!(
            "Round started: seed={}, world={}x{}, fish={}",
            seed,
            state.world.width,
            state.world.height,
            state.world.fish_count
        );
        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a fish of the given kind at a random spot; returns its id
    pub fn spawn_fish(&mut self, kind: FishKind) -> u32 {
        let id = self.next_entity_id();
        let fish = Fish::spawn(id, kind, &self.world, &self.tuning, &mut self.rng);
        self.fish.push(fish);
        id
    }

    pub fn regular_fish(&self) -> impl Iterator<Item = &Fish> {
        self.fish.iter().filter(|f| f.kind == FishKind::Normal)
    }

    pub fn evil_fish(&self) -> impl Iterator<Item = &Fish> {
        self.fish.iter().filter(|f| f.kind == FishKind::Evil)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Water surface points every `step` pixels across the world, for drawing
    pub fn wave_profile(&self, step: f32) -> Vec<Vec2> {
        surface_profile(&self.waves, self.world.width, step)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Start a round with default sprite sizes and tuning
pub fn init_round(
    world_width: f32,
    world_height: f32,
    water_band: f32,
    fish_count: usize,
    seed: u64,
) -> Result<GameState> {
    let world = WorldConfig::new(world_width, world_height, water_band, fish_count);
    GameState::new(world, Tuning::default(), seed)
}

/// Whether the round has ended
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

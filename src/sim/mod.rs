//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (dt comes from the caller)
//! - Seeded RNG only
//! - Stable iteration order (entities kept in spawn order)
//! - No rendering or platform dependencies

mod autopilot;
pub mod boat;
pub mod clock;
pub mod collision;
pub mod fish;
pub mod geometry;
pub mod line;
pub mod particle;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod wave;
pub mod world;

pub use boat::Boat;
pub use clock::{Clock, FrameStepper, ManualClock, SystemClock, run_frame};
pub use collision::{Capture, CaptureOutcome, hooked_indices, resolve_captures};
pub use fish::{Fish, FishBehavior, FishKind};
pub use geometry::Rect;
pub use line::{FishingLine, LineState};
pub use particle::{Particle, Particles};
pub use snapshot::{BoatView, FishView, LineView, ParticleView, SessionSnapshot, WaveView};
pub use spawn::SpawnScheduler;
pub use state::{Facing, GameEvent, GamePhase, GameState, RngState, init_round, is_terminal};
pub use tick::{TickInput, tick};
pub use wave::{Wave, combined_height, surface_profile};
pub use world::WorldConfig;

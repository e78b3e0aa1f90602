//! Evil fish spawn timing
//!
//! The gap between spawns shrinks by a fixed step after every spawn, down to
//! a floor. Difficulty therefore ramps per spawn event, not continuously.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Round time of the last spawn (round start counts as one)
    pub last_spawn_ms: u64,
    /// Current gap to the next spawn
    pub interval_ms: u64,
    pub step_ms: u64,
    pub floor_ms: u64,
    /// Number of spawns so far
    pub spawned: u32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            last_spawn_ms: 0,
            interval_ms: tuning.spawn_interval_initial_ms.max(tuning.spawn_interval_floor_ms),
            step_ms: tuning.spawn_interval_step_ms,
            floor_ms: tuning.spawn_interval_floor_ms,
            spawned: 0,
        }
    }

    /// Round time at which the next spawn fires
    pub fn next_spawn_ms(&self) -> u64 {
        self.last_spawn_ms.saturating_add(self.interval_ms)
    }

    /// Check the clock; returns true if a spawn is due (at most one per call)
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_spawn_ms() {
            return false;
        }
        self.last_spawn_ms = now_ms;
        self.interval_ms = self.interval_ms.saturating_sub(self.step_ms).max(self.floor_ms);
        self.spawned = self.spawned.saturating_add(1);
        true
    }
}

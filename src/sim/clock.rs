//! Clock sources and fixed-rate frame pacing
//!
//! The round never reads wall time itself. A host samples a `Clock` once per
//! rendered frame and `FrameStepper` turns the gap into whole simulation
//! steps, carrying the remainder to the next frame.

use std::time::Instant;

use super::snapshot::SessionSnapshot;
use super::state::{GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, TICK_RATE_HZ};

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// Accumulator that converts frame time into fixed simulation steps
///
/// Time is tracked in `ms * tick_rate` units so step boundaries are exact:
/// at 30 Hz the step lengths come out as 33, 33, 34 ms and never drift.
#[derive(Debug, Clone)]
pub struct FrameStepper {
    tick_rate_hz: u64,
    max_substeps: u32,
    accumulator: u64,
    sim_units: u64,
    last_ms: Option<u64>,
}

impl FrameStepper {
    pub fn new(tick_rate_hz: u64, max_substeps: u32) -> Self {
        Self {
            tick_rate_hz: tick_rate_hz.max(1),
            max_substeps: max_substeps.max(1),
            accumulator: 0,
            sim_units: 0,
            last_ms: None,
        }
    }

    /// Units consumed by one step (one second's worth of ms)
    const STEP_UNITS: u64 = 1000;

    /// Feed a clock reading; returns the dt (ms) of each step to run now
    ///
    /// The first reading only establishes the baseline. Long stalls are
    /// clamped so a hitch never turns into a burst of catch-up steps.
    pub fn advance(&mut self, now_ms: u64) -> Vec<u64> {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return Vec::new();
        };
        let frame_ms = now_ms.saturating_sub(last).min(MAX_FRAME_MS);
        self.accumulator += frame_ms * self.tick_rate_hz;

        let mut steps = Vec::new();
        while self.accumulator >= Self::STEP_UNITS && steps.len() < self.max_substeps as usize {
            let before = self.sim_units / self.tick_rate_hz;
            self.sim_units += Self::STEP_UNITS;
            self.accumulator -= Self::STEP_UNITS;
            steps.push(self.sim_units / self.tick_rate_hz - before);
        }
        steps
    }

    /// Forget the baseline (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.last_ms = None;
    }
}

impl Default for FrameStepper {
    fn default() -> Self {
        Self::new(TICK_RATE_HZ, MAX_SUBSTEPS)
    }
}

/// Run every step due this frame; returns the newest snapshot if any ran
///
/// One-shot inputs are cleared after the first step so a single key press
/// never toggles twice when a frame needs catch-up steps.
pub fn run_frame<C: Clock>(
    state: &mut GameState,
    stepper: &mut FrameStepper,
    clock: &C,
    input: &mut TickInput,
) -> Option<SessionSnapshot> {
    let mut latest = None;
    for dt_ms in stepper.advance(clock.now_ms()) {
        latest = Some(tick(state, input, dt_ms));
        input.toggle_cast = false;
        input.pause = false;
        if state.phase == GamePhase::GameOver {
            break;
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::init_round;

    #[test]
    fn test_first_reading_is_baseline() {
        let mut stepper = FrameStepper::new(30, 8);
        assert!(stepper.advance(5_000).is_empty());
        assert_eq!(stepper.advance(5_100), vec![33, 33, 34]);
    }

    #[test]
    fn test_steps_sum_to_elapsed() {
        let mut stepper = FrameStepper::new(30, 8);
        let mut clock = ManualClock::new(0);
        stepper.advance(clock.now_ms());
        let mut total = 0;
        for _ in 0..600 {
            clock.advance(16);
            total += stepper.advance(clock.now_ms()).iter().sum::<u64>();
        }
        // 9600 ms at 30 Hz: 288 whole steps, exactly 9600 ms of sim time
        assert_eq!(total, 9_600);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut stepper = FrameStepper::new(30, 8);
        stepper.advance(0);
        let steps = stepper.advance(60_000);
        assert!(steps.len() <= 8);
        assert!(steps.iter().sum::<u64>() <= MAX_FRAME_MS);
    }

    #[test]
    fn test_reset_forgets_baseline() {
        let mut stepper = FrameStepper::new(30, 8);
        stepper.advance(0);
        assert_eq!(stepper.advance(100), vec![33, 33, 34]);
        stepper.reset();
        // The gap across the suspend is never replayed
        assert!(stepper.advance(10_000).is_empty());
        assert_eq!(stepper.advance(10_034), vec![33]);
    }

    #[test]
    fn test_run_frame_consumes_one_shot_input() {
        let mut state = init_round(800.0, 600.0, 500.0, 0, 8).unwrap();
        let mut stepper = FrameStepper::default();
        let mut clock = ManualClock::new(0);
        let mut input = TickInput {
            toggle_cast: true,
            ..Default::default()
        };

        assert!(run_frame(&mut state, &mut stepper, &clock, &mut input).is_none());
        clock.advance(100);
        let snapshot = run_frame(&mut state, &mut stepper, &clock, &mut input).unwrap();

        assert_eq!(snapshot.tick, 3);
        assert_eq!(snapshot.elapsed_ms, 100);
        assert!(!input.toggle_cast);
        // Toggled once, then extended on each of the three steps
        assert!(snapshot.line.casting);
        assert_eq!(snapshot.line.length, 15.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}

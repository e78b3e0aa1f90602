//! Water surface oscillator
//!
//! A wave is a sine over the world width whose phase drifts every tick.
//! Several waves can be layered; their heights simply add.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Phase units per radian (offset is divided by this inside the sine)
const PHASE_DIVISOR: f32 = 10.0;

/// A single sinusoidal water surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    /// Peak displacement in pixels
    pub amplitude: f32,
    /// Horizontal distance covering two full periods (usually the world width)
    pub wavelength: f32,
    /// Phase advance per tick
    pub speed: f32,
    /// Accumulated phase; only ever grows
    pub offset: f32,
    /// Resting y of the surface
    pub baseline: f32,
}

impl Wave {
    pub fn new(amplitude: f32, wavelength: f32, speed: f32, baseline: f32) -> Self {
        Self {
            amplitude,
            wavelength,
            speed,
            offset: 0.0,
            baseline,
        }
    }

    /// Step the phase forward by one tick
    pub fn advance(&mut self) {
        self.offset += self.speed;
    }

    /// Vertical displacement of the surface at `x`
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        let theta = x / self.wavelength * 4.0 * std::f32::consts::PI + self.offset / PHASE_DIVISOR;
        self.amplitude * theta.sin()
    }
}

/// Sum of every wave's displacement at `x`
pub fn combined_height(waves: &[Wave], x: f32) -> f32 {
    waves.iter().map(|wave| wave.height_at(x)).sum()
}

/// Sample the combined water surface across `[0, width]` every `step` pixels
///
/// Points are absolute (baseline of the first wave plus the summed offset),
/// ready for the renderer to fill down to the world floor.
pub fn surface_profile(waves: &[Wave], width: f32, step: f32) -> Vec<Vec2> {
    let Some(first) = waves.first() else {
        return Vec::new();
    };
    let step = step.max(1.0);
    let samples = (width / step).ceil() as usize;

    (0..=samples)
        .map(|i| {
            let x = (i as f32 * step).min(width);
            Vec2::new(x, first.baseline + combined_height(waves, x))
        })
        .collect()
}

//! Fishing line hanging from the boat
//!
//! The line is rigidly anchored under the boat's center. Its only dynamic
//! property is length, which grows while casting and shrinks while reeling.
//! Collision uses the tip point alone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boat::Boat;
use crate::tuning::Tuning;

/// Lengths at or below this count as fully reeled in
const REELED_EPSILON: f32 = 1.0;

/// Line state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineState {
    /// Retracting toward zero
    #[default]
    Idle,
    /// Extending toward max length
    Casting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FishingLine {
    /// Top of the line (boat center, boat bottom)
    pub anchor: Vec2,
    pub length: f32,
    pub state: LineState,
}

impl FishingLine {
    pub fn new(boat: &Boat) -> Self {
        Self {
            anchor: Vec2::new(boat.center_x(), boat.bottom()),
            length: 0.0,
            state: LineState::Idle,
        }
    }

    #[inline]
    pub fn is_casting(&self) -> bool {
        self.state == LineState::Casting
    }

    /// Flip between casting and reeling
    pub fn toggle(&mut self) {
        self.state = match self.state {
            LineState::Idle => LineState::Casting,
            LineState::Casting => LineState::Idle,
        };
    }

    /// Grow or shrink by one step, then re-anchor to the boat
    pub fn update(&mut self, boat: &Boat, tuning: &Tuning) {
        match self.state {
            LineState::Casting => {
                if self.length < tuning.line_max_length {
                    self.length = (self.length + tuning.line_step).min(tuning.line_max_length);
                }
            }
            LineState::Idle => {
                if self.length > REELED_EPSILON {
                    self.length = (self.length - tuning.line_step).max(0.0);
                }
            }
        }
        self.anchor = Vec2::new(boat.center_x(), boat.bottom());
    }

    /// The hitbox point
    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.anchor + Vec2::new(0.0, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::WorldConfig;
    use proptest::prelude::*;

    fn setup() -> (Boat, FishingLine, Tuning) {
        let boat = Boat::new(&WorldConfig::default());
        let line = FishingLine::new(&boat);
        (boat, line, Tuning::default())
    }

    #[test]
    fn test_cast_reaches_max_on_tick_90() {
        let (boat, mut line, tuning) = setup();
        line.toggle();
        for tick in 1..=90 {
            line.update(&boat, &tuning);
            assert_eq!(line.length, tick as f32 * 5.0);
        }
        assert_eq!(line.length, 450.0);

        for _ in 0..10 {
            line.update(&boat, &tuning);
            assert_eq!(line.length, 450.0);
        }
    }

    #[test]
    fn test_reel_back_to_zero() {
        let (boat, mut line, tuning) = setup();
        line.toggle();
        for _ in 0..20 {
            line.update(&boat, &tuning);
        }
        assert_eq!(line.length, 100.0);

        line.toggle();
        assert!(!line.is_casting());
        for _ in 0..40 {
            line.update(&boat, &tuning);
        }
        assert_eq!(line.length, 0.0);
    }

    #[test]
    fn test_tip_follows_boat() {
        let (mut boat, mut line, tuning) = setup();
        line.toggle();
        line.update(&boat, &tuning);
        boat.pos += Vec2::new(30.0, 4.0);
        line.update(&boat, &tuning);

        assert_eq!(line.anchor, Vec2::new(boat.center_x(), boat.bottom()));
        assert_eq!(line.tip(), Vec2::new(boat.center_x(), boat.bottom() + 10.0));
    }

    #[test]
    fn test_odd_step_never_goes_negative() {
        let (boat, mut line, _) = setup();
        let tuning = Tuning {
            line_step: 7.0,
            line_max_length: 20.0,
            ..Default::default()
        };
        line.toggle();
        for _ in 0..5 {
            line.update(&boat, &tuning);
        }
        assert_eq!(line.length, 20.0);
        line.toggle();
        for _ in 0..5 {
            line.update(&boat, &tuning);
        }
        assert_eq!(line.length, 0.0);
    }

    proptest! {
        #[test]
        fn prop_length_bounded_and_directional(
            toggles in prop::collection::vec(any::<bool>(), 1..400),
        ) {
            let (boat, mut line, tuning) = setup();
            for toggle in toggles {
                if toggle {
                    line.toggle();
                }
                let before = line.length;
                line.update(&boat, &tuning);
                prop_assert!((0.0..=450.0).contains(&line.length));
                if line.length > before {
                    prop_assert!(line.is_casting());
                }
                if line.length < before {
                    prop_assert!(!line.is_casting());
                }
            }
        }
    }
}

//! Demo mode: the boat plays itself
//!
//! Chases the regular fish closest to the boat horizontally, drops the line
//! when lined up, and reels in as soon as an evil fish gets near the hook.

use super::fish::Fish;
use super::state::GameState;
use super::tick::TickInput;

/// Evil fish closer than this to the hook trigger a reel-in
const DANGER_RADIUS: f32 = 90.0;

/// Overwrite movement and cast input with the autopilot's choice
pub(crate) fn steer(state: &GameState, input: &mut TickInput) {
    let tip = state.line.tip();
    let boat_x = state.boat.center_x();

    let danger = state
        .evil_fish()
        .any(|evil| evil.rect().center().distance(tip) < DANGER_RADIUS);

    let target = state.regular_fish().min_by(|a, b| {
        horizontal_gap(a, boat_x)
            .partial_cmp(&horizontal_gap(b, boat_x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    input.move_left = false;
    input.move_right = false;

    let want_cast = match target {
        Some(fish) => {
            let rect = fish.rect();
            let dx = rect.center().x - boat_x;
            if dx.abs() > state.tuning.boat_speed {
                if dx < 0.0 {
                    input.move_left = true;
                } else {
                    input.move_right = true;
                }
            }
            let lined_up = dx.abs() <= rect.width() / 2.0;
            lined_up && !danger && tip.y < rect.bottom()
        }
        None => false,
    };

    input.toggle_cast = want_cast != state.line.is_casting();
}

fn horizontal_gap(fish: &Fish, x: f32) -> f32 {
    (fish.rect().center().x - x).abs()
}

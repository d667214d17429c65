use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::rewards::Reward;

/// The controller's phases. A spin runs Idle -> Spinning -> Revealing and
/// back to Idle; there is no cancellation once it starts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Revealing,
}

/// Picks the resting angle: a random offset forward of where the rapid
/// stage left the wheel. The full turns of a spin come from the rapid
/// stage itself, so the settle only ever decelerates forward.
pub fn plan_final_angle(current: f64, rng: &mut impl Rng) -> f64 {
    current + rng.gen_range(0.0..360.0)
}

/// Maps a resting angle to a wedge index. Wedge order must match the
/// generated reward order; all weighting happened at generation time.
pub fn selected_index(final_angle: f64, wedge_count: usize) -> usize {
    let normalized = final_angle.rem_euclid(360.0);
    let wedge_width = 360.0 / wedge_count as f64;
    let index = (normalized / wedge_width).floor() as usize;
    index.min(wedge_count - 1)
}

/// What the reveal shows: the wedge under the pointer and how many
/// celebration bursts fire. Real pins get exactly one burst, fakes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub index: usize,
    pub celebration_bursts: u32,
}

pub fn resolve_spin(final_angle: f64, rewards: &[Reward]) -> SpinOutcome {
    let index = selected_index(final_angle, rewards.len());
    let celebration_bursts = if rewards[index].is_real { 1 } else { 0 };
    SpinOutcome { index, celebration_bursts }
}

/// Eased deceleration for the settle animation: 1 - (1-t)^4.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

// Animation timing, matching the rapid-spin-then-settle sequence. The
// rapid stage adds a full turn per tick, ten turns over its 500ms.
pub const RAPID_SPIN_TICK_MS: u32 = 50;
pub const RAPID_SPIN_DURATION_MS: u32 = 500;
pub const SETTLE_DURATION_MS: f64 = 1000.0;

// Celebration burst shown for real rewards only.
pub const CELEBRATION_PARTICLES: usize = 50;
pub const CELEBRATION_DURATION_MS: u32 = 3000;
pub const PARTICLE_ANIMATION_MS: u32 = 2000;
pub const PARTICLE_MAX_DELAY_MS: u32 = 1000;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reward(is_real: bool) -> Reward {
        Reward {
            name: "N100 Recharge Pin".to_string(),
            code: "123456789012345".to_string(),
            is_real,
            value: if is_real { 100 } else { 0 },
        }
    }

    #[test]
    fn test_selected_index_is_deterministic() {
        // 15 wedges, 24 degrees each
        assert_eq!(selected_index(0.0, 15), 0);
        assert_eq!(selected_index(23.9, 15), 0);
        assert_eq!(selected_index(24.0, 15), 1);
        assert_eq!(selected_index(359.9, 15), 14);
        // full turns fall out
        assert_eq!(selected_index(3600.0 + 48.5, 15), 2);
    }

    #[test]
    fn test_selected_index_stays_in_bounds() {
        for wedges in [1usize, 4, 15] {
            let mut angle = 0.0;
            while angle < 720.0 {
                assert!(selected_index(angle, wedges) < wedges);
                angle += 0.37;
            }
            assert!(selected_index(360.0, wedges) < wedges);
        }
    }

    #[test]
    fn test_settle_target_moves_forward_from_any_start() {
        // A second spin starts from the previous resting angle; the settle
        // target must still lie ahead of it, never behind.
        let mut rng = StdRng::seed_from_u64(3);
        for start in [0.0, 3725.3, 7310.8, 100_000.5] {
            for _ in 0..50 {
                let angle = plan_final_angle(start, &mut rng);
                assert!(angle >= start);
                assert!(angle < start + 360.0);
            }
        }
    }

    #[test]
    fn test_real_reward_gets_exactly_one_burst() {
        let rewards = vec![reward(false), reward(true), reward(false)];
        // 15 wedges would be 24 degrees wide; with 3 wedges, 120. Angle 130
        // lands on index 1, the real pin.
        let outcome = resolve_spin(130.0, &rewards);
        assert_eq!(outcome.index, 1);
        assert_eq!(outcome.celebration_bursts, 1);
    }

    #[test]
    fn test_fake_reward_gets_no_burst() {
        let rewards = vec![reward(false), reward(true), reward(false)];
        let outcome = resolve_spin(10.0, &rewards);
        assert_eq!(outcome.index, 0);
        assert_eq!(outcome.celebration_bursts, 0);
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}

//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Terminal result of a simulation step.
///
/// Wins are named for the side that ultimately benefits: a ball escaping
/// past the right edge scores for the left bat, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ball exited past the right edge
    LeftBatWin,
    /// Ball exited past the left edge
    RightBatWin,
}

/// One bat: a vertical run of cells along its column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bat {
    /// Top cell row
    pub y: i32,
    /// Length in cells
    pub size: i32,
}

impl Default for Bat {
    fn default() -> Self {
        Self {
            y: BAT_START_Y,
            size: BAT_START_SIZE,
        }
    }
}

impl Bat {
    /// Bottom edge row of the collision span, one past the last drawn cell
    pub fn bottom(&self) -> i32 {
        self.y + self.size
    }

    /// Shrink by one cell, floored at [`BAT_MIN_SIZE`]
    fn shrink(&mut self) {
        if self.size > BAT_MIN_SIZE {
            self.size -= 1;
        }
    }

    /// Slide by `delta` rows. A move that would leave the grid is rejected
    /// outright, not clamped.
    pub(super) fn slide(&mut self, delta: i32) {
        if self.y + delta >= 0 && self.bottom() + delta < GRID_SIZE {
            self.y += delta;
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Bat defending the left edge (column 0)
    pub left_bat: Bat,
    /// Bat defending the right edge (column 6)
    pub right_bat: Bat,
    /// Ball cell coordinates, each in `[0, 6]`
    pub ball_pos: IVec2,
    /// Ball velocity per tick. `x` is always ±1; `y` stays in `[-1, 1]`
    /// except for a transient ±2 after an edge-cell spin.
    pub ball_vel: IVec2,
    /// Set by a terminal [`step`](super::step), cleared by [`reset`](Self::reset)
    pub(crate) round_over: bool,
}

impl GameState {
    /// Create a freshly served state
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut state = Self {
            left_bat: Bat::default(),
            right_bat: Bat::default(),
            ball_pos: IVec2::ZERO,
            ball_vel: IVec2::ZERO,
            round_over: false,
        };
        state.reset(rng);
        state
    }

    /// Start a new round: bats re-centered and restored to full size, ball
    /// served from a random center cell with a random diagonal velocity.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.left_bat = Bat::default();
        self.right_bat = Bat::default();
        self.ball_pos = IVec2::new(rng.random_range(3..=4), rng.random_range(3..=4));
        self.ball_vel = IVec2::new(random_step(rng), random_step(rng));
        self.round_over = false;
    }

    /// Shrink both bats by one cell, each independently floored at
    /// [`BAT_MIN_SIZE`]. Idempotent at the floor.
    pub fn increase_difficulty(&mut self) {
        self.left_bat.shrink();
        self.right_bat.shrink();
    }

    /// Apply spin to the vertical velocity, but only while it is still
    /// within `[-1, 1]` - repeated edge hits in one rally must not
    /// accelerate the ball without bound.
    pub(super) fn adjust_ball_dy(&mut self, change: i32) {
        if (-1..=1).contains(&self.ball_vel.y) {
            self.ball_vel.y += change;
        }
    }
}

/// Uniform ±1
fn random_step<R: Rng>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) { 1 } else { -1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reset_randomization_domain() {
        for seed in 0..64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let state = GameState::new(&mut rng);
            assert!((3..=4).contains(&state.ball_pos.x));
            assert!((3..=4).contains(&state.ball_pos.y));
            assert!(state.ball_vel.x == 1 || state.ball_vel.x == -1);
            assert!(state.ball_vel.y == 1 || state.ball_vel.y == -1);
            assert_eq!(state.left_bat, Bat { y: 2, size: 4 });
            assert_eq!(state.right_bat, Bat { y: 2, size: 4 });
        }
    }

    #[test]
    fn test_difficulty_floor() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(&mut rng);
        for _ in 0..10 {
            state.increase_difficulty();
        }
        assert_eq!(state.left_bat.size, 1);
        assert_eq!(state.right_bat.size, 1);
        state.increase_difficulty();
        assert_eq!(state.left_bat.size, 1);
    }

    #[test]
    fn test_bats_shrink_independently() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(&mut rng);
        state.left_bat.size = 1;
        state.right_bat.size = 3;
        state.increase_difficulty();
        assert_eq!(state.left_bat.size, 1);
        assert_eq!(state.right_bat.size, 2);
    }

    #[test]
    fn test_spin_only_applied_within_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState::new(&mut rng);

        state.ball_vel.y = 1;
        state.adjust_ball_dy(1);
        assert_eq!(state.ball_vel.y, 2);

        // Already beyond the adjustable range: no further acceleration
        state.adjust_ball_dy(1);
        assert_eq!(state.ball_vel.y, 2);

        state.ball_vel.y = -2;
        state.adjust_ball_dy(-1);
        assert_eq!(state.ball_vel.y, -2);
    }

    #[test]
    fn test_slide_rejected_at_grid_edges() {
        let mut bat = Bat { y: 0, size: 4 };
        bat.slide(-1);
        assert_eq!(bat.y, 0);

        // A size-4 bat at row 2 already touches the bottom row
        let mut bat = Bat { y: 2, size: 4 };
        bat.slide(1);
        assert_eq!(bat.y, 2);

        let mut bat = Bat { y: 2, size: 3 };
        bat.slide(1);
        assert_eq!(bat.y, 3);
    }
}

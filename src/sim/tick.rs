//! Single-tick simulation advance
//!
//! [`step`] moves the ball through one discrete timestep and reports a
//! terminal outcome when the ball escapes the grid; [`drive_bats`] is the
//! reactive controller that chases the incoming ball.

use super::state::{Bat, GameState, Outcome};
use crate::consts::*;

/// Advance the ball by one tick.
///
/// Resolution order is fixed: vertical wall reflection first (against the
/// prospective row), then horizontal edge resolution (against the
/// prospective column), then the move itself. A terminal outcome leaves
/// the ball where it was; the caller must [`reset`](GameState::reset)
/// before stepping again.
pub fn step(state: &mut GameState) -> Option<Outcome> {
    debug_assert!(
        !state.round_over,
        "step called after a terminal outcome without reset"
    );

    if state.ball_pos.y + state.ball_vel.y >= GRID_SIZE || state.ball_pos.y + state.ball_vel.y < 0
    {
        state.ball_vel.y = -state.ball_vel.y;
    }

    let next_x = state.ball_pos.x + state.ball_vel.x;
    if next_x >= GRID_SIZE {
        state.round_over = true;
        return Some(Outcome::LeftBatWin);
    }
    if next_x < 0 {
        state.round_over = true;
        return Some(Outcome::RightBatWin);
    }
    if next_x == 0 {
        deflect(state, Side::Left);
    } else if next_x == GRID_MAX {
        deflect(state, Side::Right);
    }

    state.ball_pos += state.ball_vel;
    // An edge-cell spin can leave |dy| at 2 after the wall check has
    // already passed this tick; keep the ball on the grid.
    state.ball_pos.y = state.ball_pos.y.clamp(0, GRID_MAX);
    None
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Bounce the ball off the bat guarding `side`, if the ball is on it.
///
/// The bat's top and bottom edge cells add spin pushing the ball away from
/// the bat body; a hit strictly inside the span reflects cleanly. A ball
/// outside the span is a miss and sails on toward the edge.
fn deflect(state: &mut GameState, side: Side) {
    let bat = match side {
        Side::Left => state.left_bat,
        Side::Right => state.right_bat,
    };
    let y = state.ball_pos.y;
    if y == bat.y {
        state.ball_vel.x = -state.ball_vel.x;
        state.adjust_ball_dy(1);
    } else if y == bat.bottom() {
        state.ball_vel.x = -state.ball_vel.x;
        state.adjust_ball_dy(-1);
    } else if y > bat.y && y < bat.bottom() {
        state.ball_vel.x = -state.ball_vel.x;
    }
}

/// Reactive bat controller, run once per tick.
///
/// Only the bat on the side the ball is heading toward reacts; it chases
/// the ball's row at one cell per tick. The receding bat never moves.
pub fn drive_bats(state: &mut GameState) {
    if state.ball_vel.x < 0 {
        chase(state.ball_pos.y, &mut state.left_bat);
    } else if state.ball_vel.x > 0 {
        chase(state.ball_pos.y, &mut state.right_bat);
    }
}

fn chase(ball_y: i32, bat: &mut Bat) {
    // Doubled comparison keeps the half-cell midpoint exact without
    // floats; a ball exactly on the midpoint sits in the dead zone.
    let midpoint = 2 * bat.y + bat.size;
    if 2 * ball_y > midpoint {
        bat.slide(1);
    } else if 2 * ball_y < midpoint {
        bat.slide(-1);
    }
}

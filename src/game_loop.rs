//! Round orchestration
//!
//! Drives the simulation tick loop: turn counting, difficulty escalation,
//! the round timeout, flash feedback on round end, and frame drawing. The
//! matrix and clock are capability traits, so the same loop runs against
//! real hardware, the terminal emulator, or test doubles.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::display::{Clock, LedMatrix, Rgb};
use crate::sim::{Bat, GameState, Outcome, drive_bats, step};

/// Owns the game state and collaborator handles; one instance per process.
pub struct Game<M, C> {
    state: GameState,
    rng: Pcg32,
    turn_counter: u32,
    matrix: M,
    clock: C,
}

impl<M: LedMatrix, C: Clock> Game<M, C> {
    /// Create a game with a served state derived from `seed`
    pub fn new(matrix: M, clock: C, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(&mut rng);
        Self {
            state,
            rng,
            turn_counter: 0,
            matrix,
            clock,
        }
    }

    /// Run the tick loop until the process is terminated
    pub fn run(&mut self) {
        loop {
            self.advance_turn();
        }
    }

    /// One orchestrator turn: escalation and timeout bookkeeping, then
    /// either a simulation step with a frame draw or a round-end flash
    /// and reset.
    pub fn advance_turn(&mut self) {
        self.matrix.set_all(BACKGROUND_COLOR);

        self.turn_counter += 1;
        if self.turn_counter % DIFFICULTY_INTERVAL == 0 {
            self.state.increase_difficulty();
            log::debug!(
                "difficulty up: bat sizes {}/{}",
                self.state.left_bat.size,
                self.state.right_bat.size
            );
        }

        if self.turn_counter > ROUND_TURN_LIMIT {
            log::info!("round abandoned after {} turns", ROUND_TURN_LIMIT);
            self.end_round(BALL_COLOR);
            return;
        }

        drive_bats(&mut self.state);
        match step(&mut self.state) {
            Some(outcome) => {
                log::info!("round over: {outcome:?}");
                let highlight = match outcome {
                    Outcome::LeftBatWin => LEFT_BAT_COLOR,
                    Outcome::RightBatWin => RIGHT_BAT_COLOR,
                };
                self.end_round(highlight);
            }
            None => {
                self.draw_frame();
                self.clock.sleep(FRAME_DELAY);
            }
        }
    }

    fn end_round(&mut self, highlight: Rgb) {
        self.flash(highlight);
        self.turn_counter = 0;
        self.state.reset(&mut self.rng);
    }

    /// Blocking whole-display cue: alternate highlight and background
    /// [`FLASH_REPEATS`] times, holding each phase for [`FLASH_DELAY`].
    fn flash(&mut self, highlight: Rgb) {
        for _ in 0..FLASH_REPEATS {
            self.matrix.set_all(highlight);
            self.matrix.show();
            self.clock.sleep(FLASH_DELAY);
            self.matrix.set_all(BACKGROUND_COLOR);
            self.matrix.show();
            self.clock.sleep(FLASH_DELAY);
        }
    }

    fn draw_frame(&mut self) {
        self.matrix
            .set_pixel(self.state.ball_pos.x, self.state.ball_pos.y, BALL_COLOR);
        self.draw_bat(0, self.state.left_bat, LEFT_BAT_COLOR);
        self.draw_bat(GRID_MAX, self.state.right_bat, RIGHT_BAT_COLOR);
        self.matrix.show();
    }

    /// Bat columns are repainted over the background first, so a ball that
    /// slipped past is not left drawn on them.
    fn draw_bat(&mut self, x: i32, bat: Bat, color: Rgb) {
        for y in 0..GRID_SIZE {
            self.matrix.set_pixel(x, y, BACKGROUND_COLOR);
        }
        for y in bat.y..bat.bottom() {
            self.matrix.set_pixel(x, y, color);
        }
    }
}

//! LED Pong - a self-playing pong game on a 7x7 RGB LED matrix
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, bat collisions, controller)
//! - `game_loop`: Round orchestration (turn counting, difficulty, flash feedback)
//! - `display`: Matrix and clock capability traits consumed by the game loop
//! - `renderer`: Terminal emulator for the LED matrix

pub mod display;
pub mod game_loop;
pub mod renderer;
pub mod sim;

pub use display::{Clock, LedMatrix, Rgb, SystemClock};
pub use game_loop::Game;
pub use renderer::TermMatrix;
pub use sim::{GameState, Outcome};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    use crate::display::Rgb;

    /// Matrix edge length in cells
    pub const GRID_SIZE: i32 = 7;
    /// Largest valid cell coordinate
    pub const GRID_MAX: i32 = GRID_SIZE - 1;

    /// Bat defaults - a fresh round centers both bats at this row
    pub const BAT_START_Y: i32 = 2;
    pub const BAT_START_SIZE: i32 = 4;
    /// Difficulty shrinks bats down to this, never below
    pub const BAT_MIN_SIZE: i32 = 1;

    /// Turns between difficulty escalations
    pub const DIFFICULTY_INTERVAL: u32 = 30;
    /// Turns after which a round is abandoned with no winner
    pub const ROUND_TURN_LIMIT: u32 = 150;

    /// Inter-frame pacing
    pub const FRAME_DELAY: Duration = Duration::from_millis(50);
    /// Hold time of each flash phase
    pub const FLASH_DELAY: Duration = Duration::from_millis(200);
    /// Highlight/background alternations per flash cue
    pub const FLASH_REPEATS: u32 = 5;

    /// Palette
    pub const BACKGROUND_COLOR: Rgb = Rgb::new(0, 100, 0);
    pub const LEFT_BAT_COLOR: Rgb = Rgb::new(255, 0, 0);
    pub const RIGHT_BAT_COLOR: Rgb = Rgb::new(0, 0, 255);
    pub const BALL_COLOR: Rgb = Rgb::new(200, 200, 200);
}

//! LED pong entry point
//!
//! Wires the terminal matrix emulator and the wall clock into the game
//! loop and runs it until the process is terminated.

use led_pong::display::SystemClock;
use led_pong::game_loop::Game;
use led_pong::renderer::TermMatrix;

fn main() {
    env_logger::init();

    let seed = rand::random::<u64>();
    log::info!("led-pong starting (seed {seed})");

    let mut game = Game::new(TermMatrix::new(), SystemClock, seed);
    game.run();
}

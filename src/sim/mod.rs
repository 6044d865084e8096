//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer cell coordinates only
//! - Caller-supplied seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Bat, GameState, Outcome};
pub use tick::{drive_bats, step};

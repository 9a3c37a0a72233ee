//! Grid Snake on macroquad.
//!
//! - `geometry`: integer cells, overlap tests and toroidal wrapping
//! - `snake` / `apple`: the game rules, window-independent
//! - `input`: per-tick key snapshot
//! - `clock`: fixed tick pacing
//! - `session`: the loop that polls, draws and updates
//! - `config`: optional JSON overrides for window and grid

pub mod apple;
pub mod clock;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod input;
pub mod session;
pub mod snake;

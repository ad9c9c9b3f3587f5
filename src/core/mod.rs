//! Core engine types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{RoundConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::RoundError;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};

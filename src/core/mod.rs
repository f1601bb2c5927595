//! Core engine types: sides, RNG, configuration and errors.
//!
//! Everything else in the crate builds on these. Nothing here knows about
//! words or phases beyond what configuration needs.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{AiProfile, AiProfileTable, BattleConfig, Difficulty, PhaseTiming};
pub use error::{BattleError, Result};
pub use rng::BattleRng;
pub use side::{Side, SideMap};

//! Headless battles for balance checks and end-to-end tests.
//!
//! A `PlayerAgent` stands in for the human. `run_battle` drives a `Battle`
//! on the virtual clock until it ends, collecting every `TurnResult` and a
//! `Progress` the way a host would.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use vocab_battle::core::{BattleConfig, Difficulty};
//! use vocab_battle::lexicon::catalog;
//! use vocab_battle::sim::{run_series, OracleAgent, SimConfig};
//!
//! let sim = SimConfig::new().with_difficulty(Difficulty::MIN);
//! let dict = catalog::standard().unwrap();
//! let mut agent = OracleAgent::new(Duration::from_secs(1));
//!
//! let summary = run_series(&sim, &BattleConfig::default(), &dict, 5, &mut agent).unwrap();
//! assert_eq!(summary.player_wins, 5);
//! ```

pub mod agent;
pub mod runner;

pub use agent::{IdleAgent, Intent, OracleAgent, PlannedAnswer, PlayerAgent, ScriptedAgent};
pub use runner::{run_battle, run_series, BattleReport, SeriesSummary, SimConfig};

//! Turn and phase state machine.
//!
//! - `engine`: `Battle`, the state machine itself
//! - `state`: `Phase`, `BattleState`, `TurnResult`, `BattleOutcome`
//! - `timer`: single-slot cancellable `PhaseTimer`
//! - `events`: `BattleListener` callbacks and the `BattleEvent` recorder
//! - `progress`: per-part and per-word learning counters

pub mod engine;
pub mod events;
pub mod progress;
pub mod state;
pub mod timer;

pub use engine::Battle;
pub use events::{BattleEvent, BattleListener};
pub use progress::{Progress, Stat};
pub use state::{BattleOutcome, BattleState, Phase, PlayerSubmission, TurnResult};
pub use timer::{PhaseTimer, TimerKind};

//! # vocab-battle
//!
//! Turn-based vocabulary battle engine: the player builds English words from
//! morphological parts (prefixes, roots, suffixes) to answer timed prompts
//! while a simulated opponent answers the same prompts.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, storage or sound. The engine reports what
//!    happened through `BattleListener` and leaves presentation to the host.
//!
//! 2. **Virtual Time**: The host reports elapsed time with
//!    `Battle::advance`. Nothing reads a wall clock, so battles are
//!    reproducible and tests run instantly.
//!
//! 3. **Seeded Randomness**: Prompt picks and AI answers draw from
//!    `BattleRng` (ChaCha8). The same seed and inputs replay the same battle.
//!
//! 4. **Configuration Over Constants**: Profiles, damage constants and phase
//!    delays live in `BattleConfig` and load from TOML.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `lexicon`: parts, words, prompt templates and the built-in catalog
//! - `rules`: prompt selection, validation, damage, AI simulation
//! - `battle`: the turn/phase state machine and progress tracking
//! - `sim`: headless battles driven by scripted agents
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use vocab_battle::{catalog, Battle, BattleConfig, BattleEvent, Phase};
//!
//! let dictionary = catalog::standard().unwrap();
//! let mut battle = Battle::new(BattleConfig::default(), dictionary, 42).unwrap();
//! let mut events: Vec<BattleEvent> = Vec::new();
//!
//! battle.start_battle(&mut events);
//! battle.advance(Duration::from_millis(1000), &mut events);
//! assert_eq!(battle.state().phase, Phase::Answer);
//! ```

pub mod battle;
pub mod core;
pub mod lexicon;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    AiProfile, AiProfileTable, BattleConfig, BattleError, BattleRng, Difficulty, PhaseTiming,
    Result, Side, SideMap,
};

pub use crate::lexicon::{
    catalog, Dictionary, DictionaryBuilder, Part, PartId, PartKind, PartList, PromptTemplate, Word,
    WordId,
};

pub use crate::rules::{
    calc_damage, simulate_ai_answer, validate_against_prompt, AiAnswer, DamageBreakdown,
    DamageInput, DamageTable, Prompt, PromptId, PromptSelector, MAX_COMBO,
};

pub use crate::battle::{
    Battle, BattleEvent, BattleListener, BattleOutcome, BattleState, Phase, PlayerSubmission,
    Progress, Stat, TurnResult,
};

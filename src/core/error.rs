//! Engine error type.
//!
//! Gameplay itself never fails: unmatched words validate false and an empty
//! AI pool means the AI did not answer. Errors cover configuration and
//! catalog authoring faults, plus user actions attempted in the wrong phase.

use thiserror::Error;

use crate::battle::Phase;
use crate::lexicon::{PartId, WordId};

#[derive(Error, Debug)]
pub enum BattleError {
    #[error("difficulty {0} is outside 1..=5")]
    InvalidDifficulty(u8),

    #[error("AI profile for difficulty {difficulty} is invalid: {reason}")]
    InvalidProfile { difficulty: u8, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("prompt pool for difficulty {0} is empty")]
    EmptyPromptPool(u8),

    #[error("prompt \"{prompt}\" has no word that satisfies it")]
    UnsatisfiablePrompt { prompt: String },

    #[error("unknown part {0} referenced in catalog")]
    UnknownPart(PartId),

    #[error("part {0} registered twice")]
    DuplicatePart(PartId),

    #[error("word {0} registered twice")]
    DuplicateWord(WordId),

    #[error("word {0} has no parts or empty text")]
    EmptyWord(WordId),

    #[error("prompt template at level {level} requires no parts")]
    EmptyPromptTemplate { level: u8 },

    #[error("word {id} text \"{text}\" does not match its parts \"{composed}\"")]
    WordTextMismatch {
        id: WordId,
        text: String,
        composed: String,
    },

    #[error("{phase} phase does not accept player input")]
    NotAccepting { phase: Phase },

    #[error("cannot change difficulty during a battle")]
    BattleInProgress,

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BattleError>;

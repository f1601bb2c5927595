//! Game rules: prompt selection, answer validation, damage and the AI.
//!
//! Every function here is pure apart from the caller-supplied `BattleRng`.
//! The battle state machine in `crate::battle` composes them into turns.

pub mod ai;
pub mod damage;
pub mod prompt;
pub mod validate;

pub use ai::{simulate_ai_answer, AiAnswer, MIN_LATENCY_SEC};
pub use damage::{calc_damage, DamageBreakdown, DamageInput, DamageTable, MAX_COMBO};
pub use prompt::{Prompt, PromptId, PromptSelector};
pub use validate::validate_against_prompt;

//! Opponent answer simulation.
//!
//! The AI's turn is two independent draws:
//!
//! 1. **Knowledge**: with probability `accuracy` it knows an answer and picks
//!    one uniformly from the words it is allowed to use.
//! 2. **Timing**: latency is `base_answer_sec ± jitter_sec`, never below
//!    [`MIN_LATENCY_SEC`].
//!
//! It scores only when it picked a word and answered within the time limit,
//! so profiles can tune vocabulary and speed separately.

use serde::{Deserialize, Serialize};

use super::prompt::Prompt;
use crate::core::{AiProfile, BattleRng};
use crate::lexicon::{Dictionary, Word, WordId};

/// Floor for simulated latency.
pub const MIN_LATENCY_SEC: f64 = 0.2;

/// The AI's answer for one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiAnswer {
    /// Chosen word, if the AI knew an answer.
    pub word: Option<WordId>,
    pub word_text: Option<String>,
    pub latency_sec: f64,
    pub in_time: bool,
}

impl AiAnswer {
    /// A chosen word that arrived in time.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.word.is_some() && self.in_time
    }

    /// Time left on the clock when the AI answered, never negative.
    #[must_use]
    pub fn remaining_sec(&self, time_limit_sec: u32) -> f64 {
        (f64::from(time_limit_sec) - self.latency_sec).max(0.0)
    }
}

/// Simulate the AI's answer to a prompt.
///
/// Draw order is fixed (knowledge, pick, latency) so a seed replays exactly.
pub fn simulate_ai_answer(
    profile: &AiProfile,
    prompt: &Prompt,
    dictionary: &Dictionary,
    rng: &mut BattleRng,
) -> AiAnswer {
    let eligible = dictionary.eligible_words_for_prompt(prompt, profile.vocab_level_max);

    let knows = rng.gen_bool(profile.accuracy) && !eligible.is_empty();
    let chosen: Option<&Word> = if knows {
        rng.choose(&eligible).copied()
    } else {
        None
    };

    let latency_sec = draw_latency(profile, rng);
    let in_time = latency_sec <= f64::from(prompt.time_limit_sec);

    AiAnswer {
        word: chosen.map(|w| w.id),
        word_text: chosen.map(|w| w.text.clone()),
        latency_sec,
        in_time,
    }
}

fn draw_latency(profile: &AiProfile, rng: &mut BattleRng) -> f64 {
    let latency = profile.base_answer_sec + rng.gen_signed_unit() * profile.jitter_sec;
    latency.max(MIN_LATENCY_SEC)
}

//! Scripted stand-ins for the human player.

use std::collections::VecDeque;
use std::time::Duration;

use crate::lexicon::{Dictionary, PartList};
use crate::rules::Prompt;

/// Agents are not limited by vocabulary level.
const ANY_LEVEL: u8 = u8::MAX;

/// What an agent does with one prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedAnswer {
    /// Parts to tap, in order.
    pub parts: PartList,
    /// How long after the answer window opens to submit.
    pub think_time: Duration,
}

/// Decides the player's answer for each prompt.
pub trait PlayerAgent {
    /// Called once per turn when the answer window opens.
    ///
    /// `None` lets the countdown run out.
    fn plan(&mut self, prompt: &Prompt, dictionary: &Dictionary) -> Option<PlannedAnswer>;
}

/// Any catalog word satisfying the prompt.
fn correct_parts(prompt: &Prompt, dictionary: &Dictionary) -> Option<PartList> {
    dictionary
        .eligible_words_for_prompt(prompt, ANY_LEVEL)
        .first()
        .map(|w| w.parts.clone())
}

/// Always answers correctly after a fixed delay.
#[derive(Clone, Debug)]
pub struct OracleAgent {
    think_time: Duration,
}

impl OracleAgent {
    #[must_use]
    pub fn new(think_time: Duration) -> Self {
        Self { think_time }
    }
}

impl PlayerAgent for OracleAgent {
    fn plan(&mut self, prompt: &Prompt, dictionary: &Dictionary) -> Option<PlannedAnswer> {
        correct_parts(prompt, dictionary).map(|parts| PlannedAnswer {
            parts,
            think_time: self.think_time,
        })
    }
}

/// Never answers.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleAgent;

impl PlayerAgent for IdleAgent {
    fn plan(&mut self, _prompt: &Prompt, _dictionary: &Dictionary) -> Option<PlannedAnswer> {
        None
    }
}

/// One scripted turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Submit a valid word after the delay.
    Correct(Duration),
    /// Submit an empty selection after the delay.
    Wrong(Duration),
    /// Let the clock run out.
    Silent,
}

/// Plays a fixed list of intents, then stays silent.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Intent>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Intents not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PlayerAgent for ScriptedAgent {
    fn plan(&mut self, prompt: &Prompt, dictionary: &Dictionary) -> Option<PlannedAnswer> {
        match self.script.pop_front().unwrap_or(Intent::Silent) {
            Intent::Correct(think_time) => {
                correct_parts(prompt, dictionary).map(|parts| PlannedAnswer { parts, think_time })
            }
            Intent::Wrong(think_time) => Some(PlannedAnswer {
                parts: PartList::new(),
                think_time,
            }),
            Intent::Silent => None,
        }
    }
}

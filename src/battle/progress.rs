//! Learning progress across battles.
//!
//! `Progress` counts how often each part and word came up and whether the
//! player got it right. The engine never stores it: the host owns a
//! `Progress`, feeds it every `TurnResult`, and persists it however it
//! likes (it is `Serialize`). Maps are `im::OrdMap`, so snapshotting for a
//! background save is an O(1) clone.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::state::TurnResult;
use crate::lexicon::{PartId, WordId};

/// Seen/correct/wrong counters for one part or word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stat {
    pub seen: u32,
    pub correct: u32,
    pub wrong: u32,
}

impl Stat {
    pub fn record(&mut self, correct: bool) {
        self.seen = self.seen.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.wrong = self.wrong.saturating_add(1);
        }
    }

    /// Correct answers as a rounded percentage of sightings; 0 if never seen.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.seen == 0 {
            return 0;
        }
        ((f64::from(self.correct) / f64::from(self.seen)) * 100.0).round() as u32
    }
}

/// Per-part and per-word counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub part: OrdMap<PartId, Stat>,
    pub word: OrdMap<WordId, Stat>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one judged turn into the counters.
    ///
    /// The submitted word (if it matched the catalog) is counted once. Every
    /// practiced part (the prompt's required parts plus the word's parts) is
    /// counted once, even when it appears in both.
    pub fn record_turn(&mut self, result: &TurnResult) {
        let correct = result.player_correct;

        if let Some(word) = result.player.word() {
            bump(&mut self.word, word, correct);
        }
        for part in result.practiced_parts() {
            bump(&mut self.part, part, correct);
        }
    }

    #[must_use]
    pub fn part_stat(&self, id: PartId) -> Stat {
        self.part.get(&id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn word_stat(&self, id: WordId) -> Stat {
        self.word.get(&id).copied().unwrap_or_default()
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.part.clear();
        self.word.clear();
    }
}

fn bump<K: Ord + Clone>(map: &mut OrdMap<K, Stat>, key: K, correct: bool) {
    let mut stat = map.get(&key).copied().unwrap_or_default();
    stat.record(correct);
    map.insert(key, stat);
}

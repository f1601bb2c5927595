//! Battle state and per-turn results.
//!
//! ## Phases
//!
//! `Idle` until a battle starts, then the cycle
//! `Intro → Answer → Judge → Hp → (Intro | End)`.
//! Only `Answer` accepts player input.
//!
//! ## Ownership
//!
//! `BattleState` is plain data owned by `Battle` and mutated only by its
//! transition methods. Callers get a shared reference for rendering; it is
//! `Serialize` so a host can snapshot it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, Side, SideMap};
use crate::lexicon::{PartId, PartList, WordId};
use crate::rules::{AiAnswer, DamageBreakdown, Prompt};

/// Battle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No battle running.
    #[default]
    Idle,
    /// Prompt shown, answer window not yet open.
    Intro,
    /// Player may compose and submit.
    Answer,
    /// Turn result shown.
    Judge,
    /// HP change shown.
    Hp,
    /// Battle over.
    End,
}

impl Phase {
    /// Whether a battle is underway (not `Idle` or `End`).
    #[must_use]
    pub const fn in_battle(self) -> bool {
        !matches!(self, Phase::Idle | Phase::End)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Intro => "Intro",
            Phase::Answer => "Answer",
            Phase::Judge => "Judge",
            Phase::Hp => "Hp",
            Phase::End => "End",
        };
        f.write_str(name)
    }
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    PlayerWon,
    AiWon,
    /// Both sides reached 0 HP on the same turn.
    Draw,
}

impl BattleOutcome {
    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            BattleOutcome::PlayerWon => Some(Side::Player),
            BattleOutcome::AiWon => Some(Side::Ai),
            BattleOutcome::Draw => None,
        }
    }

    /// Decide the outcome from remaining HP, or `None` if both still stand.
    #[must_use]
    pub fn from_hp(hp: &SideMap<u32>) -> Option<Self> {
        match (hp[Side::Player] == 0, hp[Side::Ai] == 0) {
            (true, true) => Some(BattleOutcome::Draw),
            (false, true) => Some(BattleOutcome::PlayerWon),
            (true, false) => Some(BattleOutcome::AiWon),
            (false, false) => None,
        }
    }
}

/// What the player handed in this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSubmission {
    /// The countdown expired first.
    TimedOut,
    /// The player submitted a composition.
    Submitted {
        /// Tapped parts in order.
        parts: PartList,
        /// Concatenated surface text.
        text: String,
        /// Catalog word with that text, if any.
        word: Option<WordId>,
        /// Parts of the matched word, empty when nothing matched.
        word_parts: PartList,
    },
}

impl PlayerSubmission {
    /// Composed text, empty on timeout.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            PlayerSubmission::TimedOut => "",
            PlayerSubmission::Submitted { text, .. } => text,
        }
    }

    /// Matched catalog word.
    #[must_use]
    pub fn word(&self) -> Option<WordId> {
        match self {
            PlayerSubmission::TimedOut => None,
            PlayerSubmission::Submitted { word, .. } => *word,
        }
    }
}

/// Everything decided by one judge step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub turn_index: u32,
    pub prompt: Prompt,
    pub player: PlayerSubmission,
    pub ai: AiAnswer,
    pub player_correct: bool,
    pub ai_correct: bool,
    pub player_damage_to_ai: DamageBreakdown,
    pub ai_damage_to_player: DamageBreakdown,
    /// Player streak after this turn.
    pub player_combo: u32,
    /// AI streak after this turn.
    pub ai_combo: u32,
    /// Seconds left on the player's clock when judged. Zero on timeout.
    pub player_remaining_sec: f64,
}

impl TurnResult {
    /// Damage dealt *to* `side` this turn.
    #[must_use]
    pub fn damage_to(&self, side: Side) -> DamageBreakdown {
        match side {
            Side::Player => self.ai_damage_to_player,
            Side::Ai => self.player_damage_to_ai,
        }
    }

    /// Whether `side` answered correctly.
    #[must_use]
    pub fn correct(&self, side: Side) -> bool {
        match side {
            Side::Player => self.player_correct,
            Side::Ai => self.ai_correct,
        }
    }

    /// Parts the player practiced: the prompt's required parts followed by
    /// the matched word's parts, each listed once.
    #[must_use]
    pub fn practiced_parts(&self) -> SmallVec<[PartId; 8]> {
        let mut parts: SmallVec<[PartId; 8]> = SmallVec::new();
        let word_parts: &[PartId] = match &self.player {
            PlayerSubmission::Submitted { word_parts, .. } => word_parts.as_slice(),
            PlayerSubmission::TimedOut => &[],
        };

        for &id in self.prompt.requires_parts.iter().chain(word_parts) {
            if !parts.contains(&id) {
                parts.push(id);
            }
        }
        parts
    }
}

/// Observable battle state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub difficulty: Difficulty,
    pub phase: Phase,
    /// Current HP, within `[0, max_hp]`.
    pub hp: SideMap<u32>,
    pub max_hp: SideMap<u32>,
    /// Consecutive correct answers, within `[0, combo_cap]`.
    pub combo: SideMap<u32>,
    /// 1-based once a battle starts.
    pub turn_index: u32,
    /// Parts tapped so far this turn.
    pub selection: PartList,
    pub prompt: Option<Prompt>,
    pub last_result: Option<TurnResult>,
    pub outcome: Option<BattleOutcome>,
}

impl BattleState {
    /// Fresh idle state.
    #[must_use]
    pub fn new(difficulty: Difficulty, player_max_hp: u32, ai_max_hp: u32) -> Self {
        let max_hp = SideMap::new(|side| match side {
            Side::Player => player_max_hp,
            Side::Ai => ai_max_hp,
        });

        Self {
            difficulty,
            phase: Phase::Idle,
            hp: max_hp,
            max_hp,
            combo: SideMap::with_value(0),
            turn_index: 0,
            selection: PartList::new(),
            prompt: None,
            last_result: None,
            outcome: None,
        }
    }

    #[must_use]
    pub fn player_hp(&self) -> u32 {
        self.hp[Side::Player]
    }

    #[must_use]
    pub fn ai_hp(&self) -> u32 {
        self.hp[Side::Ai]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_outcome_from_hp() {
        let hp = |p, a| SideMap::new(|s| if s == Side::Player { p } else { a });

        assert_eq!(BattleOutcome::from_hp(&hp(10, 5)), None);
        assert_eq!(BattleOutcome::from_hp(&hp(10, 0)), Some(BattleOutcome::PlayerWon));
        assert_eq!(BattleOutcome::from_hp(&hp(0, 5)), Some(BattleOutcome::AiWon));
        assert_eq!(BattleOutcome::from_hp(&hp(0, 0)), Some(BattleOutcome::Draw));
        assert_eq!(BattleOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_phase_in_battle() {
        assert!(!Phase::Idle.in_battle());
        assert!(Phase::Answer.in_battle());
        assert!(!Phase::End.in_battle());
        assert_eq!(Phase::Hp.to_string(), "Hp");
    }

    #[test]
    fn test_submission_accessors() {
        let sub = PlayerSubmission::Submitted {
            parts: smallvec![PartId::new(1), PartId::new(20)],
            text: "report".to_string(),
            word: Some(WordId::new(1)),
            word_parts: smallvec![PartId::new(1), PartId::new(20)],
        };

        assert_eq!(sub.text(), "report");
        assert_eq!(sub.word(), Some(WordId::new(1)));
        assert_eq!(PlayerSubmission::TimedOut.text(), "");
        assert_eq!(PlayerSubmission::TimedOut.word(), None);
    }

    #[test]
    fn test_new_state_is_idle_at_full_hp() {
        let state = BattleState::new(Difficulty::default(), 50, 40);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.player_hp(), 50);
        assert_eq!(state.ai_hp(), 40);
        assert_eq!(state.combo[Side::Player], 0);
        assert!(state.prompt.is_none());
    }
}

//! The battle state machine.
//!
//! `Battle` owns the `BattleState`, the phase timer and the virtual clock.
//! Hosts drive it with two kinds of calls:
//!
//! - **Input**: `start_battle`, `set_difficulty`, `add_part`,
//!   `remove_part_at`, `clear_selection`, `submit`, `abandon`.
//! - **Time**: `advance(dt, listener)` moves the clock and fires whatever
//!   timers fall due, in order.
//!
//! ## Turn Cycle
//!
//! ```text
//! start_battle ─► Intro ──intro delay──► Answer ──submit / countdown──► Judge
//!                   ▲                                                   │
//!                   │                                             judge delay
//!                   │                                                   ▼
//!                   └────────── hp delay (both alive) ─────────────────  Hp
//!                                                                       │
//!                                                         hp delay (a side at 0)
//!                                                                       ▼
//!                                                                      End
//! ```
//!
//! ## Timing
//!
//! Each follow-up timer is scheduled from the deadline of the timer that
//! caused it, not from the clock at the time `advance` noticed it. Advancing
//! by 10 s once and by 10 ms a thousand times therefore replay identical
//! transitions. A fired timer only acts when its kind belongs to the current
//! phase.
//!
//! ## Randomness
//!
//! Prompt picks and AI answers draw from separate streams split off the battle
//! seed, so the AI's draws never shift which prompt comes next.

use std::time::Duration;
use tracing::{debug, info};

use super::events::BattleListener;
use super::state::{BattleOutcome, BattleState, Phase, PlayerSubmission, TurnResult};
use super::timer::{PhaseTimer, ScheduledTimer, TimerKind};
use crate::core::{AiProfile, BattleConfig, BattleError, BattleRng, Difficulty, Result, Side};
use crate::lexicon::{Dictionary, PartId, PartList};
use crate::rules::{
    simulate_ai_answer, validate_against_prompt, DamageBreakdown, DamageInput, Prompt,
    PromptSelector,
};

/// A single player-versus-AI battle.
#[derive(Clone, Debug)]
pub struct Battle {
    config: BattleConfig,
    dictionary: Dictionary,
    selector: PromptSelector,
    state: BattleState,
    timer: PhaseTimer,
    now: Duration,
    /// Countdown value shown outside `Answer`.
    frozen_remaining: Duration,
    prompt_rng: BattleRng,
    ai_rng: BattleRng,
}

impl Battle {
    /// Create an idle battle at the default difficulty.
    ///
    /// Fails if the configuration is invalid or the dictionary leaves some
    /// difficulty without prompts.
    pub fn new(config: BattleConfig, dictionary: Dictionary, seed: u64) -> Result<Self> {
        config.validate()?;
        let selector = PromptSelector::new(&dictionary)?;

        let rng = BattleRng::new(seed);
        let difficulty = Difficulty::default();
        let state = BattleState::new(
            difficulty,
            config.player_max_hp,
            config.profiles.get(difficulty).max_hp,
        );

        Ok(Self {
            prompt_rng: rng.for_context("prompt"),
            ai_rng: rng.for_context("ai"),
            config,
            dictionary,
            selector,
            state,
            timer: PhaseTimer::new(),
            now: Duration::ZERO,
            frozen_remaining: Duration::ZERO,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// AI profile for the current difficulty.
    #[must_use]
    pub fn profile(&self) -> &AiProfile {
        self.config.profiles.get(self.state.difficulty)
    }

    /// Current prompt, if a battle is running.
    #[must_use]
    pub fn prompt(&self) -> Option<&Prompt> {
        self.state.prompt.as_ref()
    }

    /// Virtual time since the battle was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Kind of the pending timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.timer.pending().map(|(kind, _)| kind)
    }

    /// Countdown seconds for display.
    ///
    /// Live during `Answer`. Otherwise the full time limit during `Intro` and
    /// the value at the moment of judging afterwards.
    #[must_use]
    pub fn remaining_sec(&self) -> f64 {
        match (self.state.phase, self.timer.pending()) {
            (Phase::Answer, Some((TimerKind::Countdown, deadline))) => {
                deadline.saturating_sub(self.now).as_secs_f64()
            }
            _ => self.frozen_remaining.as_secs_f64(),
        }
    }

    /// Text of the current selection.
    #[must_use]
    pub fn composed_text(&self) -> String {
        self.dictionary.build_word_from_parts(&self.state.selection)
    }

    // === Lifecycle ===

    /// Reset both sides and begin turn 1.
    ///
    /// Allowed from any phase; a running battle is discarded.
    pub fn start_battle(&mut self, listener: &mut impl BattleListener) {
        self.timer.cancel();

        let ai_max_hp = self.profile().max_hp;
        let state = &mut self.state;
        state.max_hp[Side::Player] = self.config.player_max_hp;
        state.max_hp[Side::Ai] = ai_max_hp;
        state.hp = state.max_hp;
        for (_, combo) in state.combo.iter_mut() {
            *combo = 0;
        }
        state.turn_index = 1;
        state.last_result = None;
        state.outcome = None;

        info!(
            difficulty = %self.state.difficulty,
            opponent = %self.profile().name,
            player_hp = self.state.hp[Side::Player],
            ai_hp = self.state.hp[Side::Ai],
            "battle started"
        );

        self.enter_intro(self.now, listener);
    }

    /// Change difficulty between battles.
    ///
    /// Resets the AI's max and current HP to the new profile's value.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        if self.state.phase.in_battle() {
            return Err(BattleError::BattleInProgress);
        }

        self.state.difficulty = difficulty;
        let max_hp = self.profile().max_hp;
        self.state.max_hp[Side::Ai] = max_hp;
        self.state.hp[Side::Ai] = max_hp;
        debug!(%difficulty, ai_max_hp = max_hp, "difficulty changed");
        Ok(())
    }

    /// Leave the battle without finishing it.
    pub fn abandon(&mut self) {
        if self.state.phase == Phase::Idle {
            return;
        }
        self.timer.cancel();
        self.state.phase = Phase::Idle;
        self.state.prompt = None;
        self.state.selection.clear();
        info!(turn = self.state.turn_index, "battle abandoned");
    }

    // === Player input (Answer only) ===

    /// Append a part to the selection.
    pub fn add_part(&mut self, id: PartId) -> Result<()> {
        self.require_answer()?;
        self.state.selection.push(id);
        Ok(())
    }

    /// Remove the part at `index`. Out-of-range indices remove nothing.
    pub fn remove_part_at(&mut self, index: usize) -> Result<Option<PartId>> {
        self.require_answer()?;
        if index < self.state.selection.len() {
            Ok(Some(self.state.selection.remove(index)))
        } else {
            Ok(None)
        }
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.require_answer()?;
        self.state.selection.clear();
        Ok(())
    }

    /// Submit the current selection and judge the turn now.
    pub fn submit(&mut self, listener: &mut impl BattleListener) -> Result<()> {
        self.require_answer()?;
        let remaining = self.countdown_remaining();
        let submission = self.compose_submission();
        self.judge(submission, remaining, self.now, listener);
        Ok(())
    }

    fn require_answer(&self) -> Result<()> {
        match self.state.phase {
            Phase::Answer => Ok(()),
            phase => Err(BattleError::NotAccepting { phase }),
        }
    }

    fn countdown_remaining(&self) -> Duration {
        match self.timer.pending() {
            Some((TimerKind::Countdown, deadline)) => deadline.saturating_sub(self.now),
            _ => Duration::ZERO,
        }
    }

    fn compose_submission(&self) -> PlayerSubmission {
        let parts: PartList = self.state.selection.clone();
        let text = self.dictionary.build_word_from_parts(&parts);
        let matched = self.dictionary.find_word(&text);

        PlayerSubmission::Submitted {
            word: matched.map(|w| w.id),
            word_parts: matched.map(|w| w.parts.clone()).unwrap_or_default(),
            parts,
            text,
        }
    }

    // === Time ===

    /// Move the virtual clock forward and fire every timer that falls due.
    pub fn advance(&mut self, dt: Duration, listener: &mut impl BattleListener) {
        self.now = self.now.saturating_add(dt);

        while let Some(fired) = self.timer.take_due(self.now) {
            if fired.kind.phase() != self.state.phase {
                debug!(kind = ?fired.kind, phase = %self.state.phase, "ignoring stale timer");
                continue;
            }
            self.fire(fired, listener);
        }
    }

    fn fire(&mut self, fired: ScheduledTimer, listener: &mut impl BattleListener) {
        let at = fired.deadline;
        match fired.kind {
            TimerKind::IntroDelay => self.enter_answer(at, listener),
            TimerKind::Countdown => {
                self.judge(PlayerSubmission::TimedOut, Duration::ZERO, at, listener);
            }
            TimerKind::JudgeDelay => self.enter_hp(at, listener),
            TimerKind::HpDelay => self.finish_turn(at, listener),
        }
    }

    // === Transitions ===

    fn enter_phase(&mut self, phase: Phase, listener: &mut impl BattleListener) {
        debug!(
            from = %self.state.phase,
            to = %phase,
            turn = self.state.turn_index,
            "phase transition"
        );
        self.state.phase = phase;
        listener.on_phase_enter(phase);
    }

    fn enter_intro(&mut self, at: Duration, listener: &mut impl BattleListener) {
        let difficulty = self.state.difficulty;
        let time_limit_sec = self.profile().time_limit_sec;
        let prompt = self
            .selector
            .pick_prompt(difficulty, time_limit_sec, &mut self.prompt_rng);

        self.state.prompt = Some(prompt);
        self.state.selection.clear();
        self.frozen_remaining = Duration::from_secs(u64::from(time_limit_sec));

        self.enter_phase(Phase::Intro, listener);
        self.timer.schedule(TimerKind::IntroDelay, at + self.config.timing.intro());
    }

    fn enter_answer(&mut self, at: Duration, listener: &mut impl BattleListener) {
        let limit = self.frozen_remaining;
        self.enter_phase(Phase::Answer, listener);
        self.timer.schedule(TimerKind::Countdown, at + limit);
    }

    /// Decide the whole turn in one step.
    fn judge(
        &mut self,
        player: PlayerSubmission,
        remaining: Duration,
        at: Duration,
        listener: &mut impl BattleListener,
    ) {
        self.timer.cancel();
        self.frozen_remaining = remaining;

        let Some(prompt) = self.state.prompt.clone() else {
            return;
        };
        let player_remaining_sec = remaining.as_secs_f64();

        let player_word = player.word().and_then(|id| self.dictionary.word(id));
        let player_correct = validate_against_prompt(player_word, &prompt);

        let profile = self.config.profiles.get(self.state.difficulty);
        let ai = simulate_ai_answer(profile, &prompt, &self.dictionary, &mut self.ai_rng);
        let ai_correct = ai.is_correct();
        let ai_remaining_sec = ai.remaining_sec(prompt.time_limit_sec);

        let player_combo = self.bump_combo(Side::Player, player_correct);
        let ai_combo = self.bump_combo(Side::Ai, ai_correct);

        let player_damage_to_ai = self.damage(player_correct, player_remaining_sec, player_combo);
        let ai_damage_to_player = self.damage(ai_correct, ai_remaining_sec, ai_combo);

        let result = TurnResult {
            turn_index: self.state.turn_index,
            prompt,
            player,
            ai,
            player_correct,
            ai_correct,
            player_damage_to_ai,
            ai_damage_to_player,
            player_combo,
            ai_combo,
            player_remaining_sec,
        };

        debug!(
            turn = result.turn_index,
            player_text = result.player.text(),
            player_correct,
            ai_correct,
            to_ai = player_damage_to_ai.total,
            to_player = ai_damage_to_player.total,
            "turn judged"
        );

        self.state.last_result = Some(result);
        self.enter_phase(Phase::Judge, listener);
        if let Some(result) = &self.state.last_result {
            listener.on_turn_result(result);
        }
        self.timer.schedule(TimerKind::JudgeDelay, at + self.config.timing.judge());
    }

    fn bump_combo(&mut self, side: Side, correct: bool) -> u32 {
        let combo = &mut self.state.combo[side];
        *combo = if correct {
            combo.saturating_add(1).min(self.config.combo_cap)
        } else {
            0
        };
        *combo
    }

    fn damage(&self, correct: bool, remaining_sec: f64, combo_streak: u32) -> DamageBreakdown {
        if !correct {
            return DamageBreakdown::ZERO;
        }
        self.config.damage.calc(DamageInput {
            remaining_sec,
            combo_streak,
        })
    }

    fn enter_hp(&mut self, at: Duration, listener: &mut impl BattleListener) {
        if let Some(result) = &self.state.last_result {
            for side in Side::ALL {
                let hp = &mut self.state.hp[side];
                *hp = hp.saturating_sub(result.damage_to(side).total);
            }
        }

        self.enter_phase(Phase::Hp, listener);
        self.timer.schedule(TimerKind::HpDelay, at + self.config.timing.hp());
    }

    fn finish_turn(&mut self, at: Duration, listener: &mut impl BattleListener) {
        match BattleOutcome::from_hp(&self.state.hp) {
            Some(outcome) => {
                self.state.outcome = Some(outcome);
                self.enter_phase(Phase::End, listener);
                info!(
                    ?outcome,
                    turns = self.state.turn_index,
                    player_hp = self.state.hp[Side::Player],
                    ai_hp = self.state.hp[Side::Ai],
                    "battle ended"
                );
                listener.on_battle_end(outcome);
            }
            None => {
                self.state.turn_index += 1;
                self.enter_intro(at, listener);
            }
        }
    }
}

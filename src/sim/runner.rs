//! Headless battle loop.

use std::time::Duration;
use tracing::{debug, info};

use super::agent::{PlannedAnswer, PlayerAgent};
use crate::battle::{
    Battle, BattleListener, BattleOutcome, BattleState, Phase, Progress, TurnResult,
};
use crate::core::{BattleConfig, Difficulty, Result};
use crate::lexicon::Dictionary;
use crate::rules::PromptId;

/// Configuration for headless runs.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Difficulty to fight at.
    pub difficulty: Difficulty,

    /// Clock step while waiting on display delays and the countdown.
    pub tick: Duration,

    /// Give up after this many turns (the battle is abandoned).
    pub max_turns: u32,

    /// Seed for the first battle; a series adds the battle index.
    pub seed_offset: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            tick: Duration::from_millis(100),
            max_turns: 200,
            seed_offset: 0,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the clock step. Zero is raised to one millisecond.
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Everything that happened in one headless battle.
#[derive(Clone, Debug)]
pub struct BattleReport {
    pub seed: u64,
    /// `None` when the turn limit was hit first.
    pub outcome: Option<BattleOutcome>,
    pub turns: Vec<TurnResult>,
    pub final_state: BattleState,
    pub progress: Progress,
    pub elapsed: Duration,
}

impl BattleReport {
    /// Sum of damage dealt by the player.
    #[must_use]
    pub fn player_damage_dealt(&self) -> u32 {
        self.turns.iter().map(|t| t.player_damage_to_ai.total).sum()
    }

    /// Sum of damage dealt by the AI.
    #[must_use]
    pub fn ai_damage_dealt(&self) -> u32 {
        self.turns.iter().map(|t| t.ai_damage_to_player.total).sum()
    }
}

/// Win/loss tallies over a series of battles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeriesSummary {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl SeriesSummary {
    fn record(&mut self, outcome: Option<BattleOutcome>) {
        match outcome {
            Some(BattleOutcome::PlayerWon) => self.player_wins += 1,
            Some(BattleOutcome::AiWon) => self.ai_wins += 1,
            Some(BattleOutcome::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws + self.unfinished
    }

    /// Player wins over all games, 0.0 for an empty series.
    #[must_use]
    pub fn player_win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => f64::from(self.player_wins) / f64::from(n),
        }
    }
}

/// Collects results the way a host would.
#[derive(Default)]
struct Collector {
    turns: Vec<TurnResult>,
    progress: Progress,
    outcome: Option<BattleOutcome>,
}

impl BattleListener for Collector {
    fn on_turn_result(&mut self, result: &TurnResult) {
        self.progress.record_turn(result);
        self.turns.push(result.clone());
    }

    fn on_battle_end(&mut self, outcome: BattleOutcome) {
        self.outcome = Some(outcome);
    }
}

/// Play one battle to completion with `agent` standing in for the player.
pub fn run_battle(
    sim: &SimConfig,
    config: BattleConfig,
    dictionary: Dictionary,
    seed: u64,
    agent: &mut impl PlayerAgent,
) -> Result<BattleReport> {
    let mut battle = Battle::new(config, dictionary, seed)?;
    battle.set_difficulty(sim.difficulty)?;

    let mut collector = Collector::default();
    let mut answered: Option<PromptId> = None;
    battle.start_battle(&mut collector);

    loop {
        let state = battle.state();
        if state.phase == Phase::End {
            break;
        }
        if state.turn_index > sim.max_turns {
            debug!(seed, turns = sim.max_turns, "turn limit reached");
            battle.abandon();
            break;
        }

        let fresh_prompt = match (state.phase, battle.prompt()) {
            (Phase::Answer, Some(prompt)) if answered != Some(prompt.id) => Some(prompt.clone()),
            _ => None,
        };

        match fresh_prompt {
            Some(prompt) => {
                answered = Some(prompt.id);
                if let Some(plan) = agent.plan(&prompt, battle.dictionary()) {
                    play_answer(&mut battle, prompt.id, plan, &mut collector)?;
                }
            }
            None => battle.advance(sim.tick, &mut collector),
        }
    }

    debug!(
        seed,
        outcome = ?collector.outcome,
        turns = collector.turns.len(),
        "simulated battle finished"
    );

    Ok(BattleReport {
        seed,
        outcome: collector.outcome,
        turns: collector.turns,
        final_state: battle.state().clone(),
        progress: collector.progress,
        elapsed: battle.now(),
    })
}

/// Wait out the think time, then tap and submit if the turn is still open.
fn play_answer(
    battle: &mut Battle,
    prompt_id: PromptId,
    plan: PlannedAnswer,
    listener: &mut impl BattleListener,
) -> Result<()> {
    battle.advance(plan.think_time, listener);

    let still_open =
        battle.state().phase == Phase::Answer && battle.prompt().map(|p| p.id) == Some(prompt_id);
    if !still_open {
        return Ok(());
    }

    for part in plan.parts {
        battle.add_part(part)?;
    }
    battle.submit(listener)
}

/// Play `games` battles with consecutive seeds and tally the outcomes.
pub fn run_series(
    sim: &SimConfig,
    config: &BattleConfig,
    dictionary: &Dictionary,
    games: u32,
    agent: &mut impl PlayerAgent,
) -> Result<SeriesSummary> {
    let mut summary = SeriesSummary::default();

    for i in 0..games {
        let seed = sim.seed_offset.wrapping_add(u64::from(i));
        let report = run_battle(sim, config.clone(), dictionary.clone(), seed, agent)?;
        summary.record(report.outcome);
    }

    info!(
        difficulty = %sim.difficulty,
        games,
        player_wins = summary.player_wins,
        ai_wins = summary.ai_wins,
        draws = summary.draws,
        unfinished = summary.unfinished,
        "series finished"
    );
    Ok(summary)
}

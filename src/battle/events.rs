//! Battle events and listeners.
//!
//! The engine never renders anything. Instead it calls a `BattleListener`
//! whenever something observable happens, from inside the transition that
//! caused it. Hosts implement the trait for their UI; tests pass a
//! `Vec<BattleEvent>` and inspect what was recorded.
//!
//! All callbacks default to no-ops, and `()` is a listener that ignores
//! everything.

use serde::{Deserialize, Serialize};

use super::state::{BattleOutcome, Phase, TurnResult};

/// Something observable that happened during a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// The battle entered a phase.
    PhaseEntered(Phase),
    /// A turn was judged.
    TurnJudged(Box<TurnResult>),
    /// The battle ended.
    BattleEnded(BattleOutcome),
}

/// Receives battle events as they happen.
pub trait BattleListener {
    fn on_phase_enter(&mut self, _phase: Phase) {}

    fn on_turn_result(&mut self, _result: &TurnResult) {}

    fn on_battle_end(&mut self, _outcome: BattleOutcome) {}
}

impl BattleListener for () {}

/// Records every event in order.
impl BattleListener for Vec<BattleEvent> {
    fn on_phase_enter(&mut self, phase: Phase) {
        self.push(BattleEvent::PhaseEntered(phase));
    }

    fn on_turn_result(&mut self, result: &TurnResult) {
        self.push(BattleEvent::TurnJudged(Box::new(result.clone())));
    }

    fn on_battle_end(&mut self, outcome: BattleOutcome) {
        self.push(BattleEvent::BattleEnded(outcome));
    }
}

impl<L: BattleListener + ?Sized> BattleListener for &mut L {
    fn on_phase_enter(&mut self, phase: Phase) {
        (**self).on_phase_enter(phase);
    }

    fn on_turn_result(&mut self, result: &TurnResult) {
        (**self).on_turn_result(result);
    }

    fn on_battle_end(&mut self, outcome: BattleOutcome) {
        (**self).on_battle_end(outcome);
    }
}

/// Phases entered, in order.
#[must_use]
pub fn phases(events: &[BattleEvent]) -> Vec<Phase> {
    events
        .iter()
        .filter_map(|e| match e {
            BattleEvent::PhaseEntered(p) => Some(*p),
            _ => None,
        })
        .collect()
}

/// Turn results recorded, in order.
pub fn turn_results(events: &[BattleEvent]) -> impl Iterator<Item = &TurnResult> {
    events.iter().filter_map(|e| match e {
        BattleEvent::TurnJudged(r) => Some(r.as_ref()),
        _ => None,
    })
}

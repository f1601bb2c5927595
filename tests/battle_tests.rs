//! Battle state machine integration tests.
//!
//! These drive `Battle` through whole turns on the virtual clock and check
//! HP, combo, damage and phase bookkeeping from the outside.

use std::time::Duration;

use vocab_battle::battle::events::{phases, turn_results};
use vocab_battle::core::{AiProfile, BattleConfig, Difficulty, Side};
use vocab_battle::lexicon::{catalog, PartList};
use vocab_battle::rules::{DamageBreakdown, DamageTable, MAX_COMBO};
use vocab_battle::sim::{run_battle, Intent, OracleAgent, ScriptedAgent, SimConfig};
use vocab_battle::{Battle, BattleError, BattleEvent, BattleOutcome, Phase, PlayerSubmission};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn new_battle(config: BattleConfig, seed: u64) -> Battle {
    Battle::new(config, catalog::standard().unwrap(), seed).unwrap()
}

/// Parts of some catalog word that answers the current prompt.
fn correct_parts(battle: &Battle) -> PartList {
    let prompt = battle.prompt().unwrap();
    battle.dictionary().eligible_words_for_prompt(prompt, u8::MAX)[0]
        .parts
        .clone()
}

/// An opponent that never answers and cannot be beaten quickly.
fn punching_bag() -> AiProfile {
    AiProfile::new("Dummy", 500, 0.0, 1, 3.0, 0.0, 10)
}

#[test]
fn test_phase_cycle() {
    let mut battle = new_battle(BattleConfig::default(), 1);
    let mut events: Vec<BattleEvent> = Vec::new();

    battle.start_battle(&mut events);
    battle.advance(ms(1000), &mut events);
    battle.advance(ms(10_000), &mut events);
    battle.advance(ms(2000), &mut events);
    battle.advance(ms(1000), &mut events);

    assert_eq!(
        phases(&events),
        vec![Phase::Intro, Phase::Answer, Phase::Judge, Phase::Hp, Phase::Intro]
    );
    assert_eq!(battle.state().turn_index, 2);
}

#[test]
fn test_timeout_with_empty_selection() {
    let mut battle = new_battle(BattleConfig::default(), 2);
    let mut events: Vec<BattleEvent> = Vec::new();

    battle.start_battle(&mut events);
    battle.advance(ms(1000), &mut events);
    battle.advance(ms(9999), &mut events);
    assert_eq!(battle.state().phase, Phase::Answer);

    battle.advance(ms(1), &mut events);

    assert_eq!(battle.state().phase, Phase::Judge);
    let result = battle.state().last_result.as_ref().unwrap();
    assert_eq!(result.player, PlayerSubmission::TimedOut);
    assert!(!result.player_correct);
    assert_eq!(result.player_damage_to_ai, DamageBreakdown::ZERO);
    assert_eq!(result.player_combo, 0);
    assert_eq!(result.player_remaining_sec, 0.0);
    assert_eq!(battle.remaining_sec(), 0.0);
    assert_eq!(turn_results(&events).count(), 1);
}

#[test]
fn test_timeout_ignores_unsubmitted_selection() {
    let mut battle = new_battle(BattleConfig::default(), 2);
    battle.start_battle(&mut ());
    battle.advance(ms(1000), &mut ());

    for part in correct_parts(&battle) {
        battle.add_part(part).unwrap();
    }
    battle.advance(ms(10_000), &mut ());

    let result = battle.state().last_result.as_ref().unwrap();
    assert_eq!(result.player, PlayerSubmission::TimedOut);
    assert!(!result.player_correct);
}

#[test]
fn test_difficulty_two_damage_with_four_seconds_left() {
    let config = BattleConfig::new().with_profile(Difficulty::new(2).unwrap(), {
        let mut p = punching_bag();
        p.max_hp = 40;
        p
    });
    let mut battle = new_battle(config, 3);
    let mut events: Vec<BattleEvent> = Vec::new();

    battle.start_battle(&mut events);
    battle.advance(ms(1000), &mut events);
    battle.advance(ms(6000), &mut events);
    assert_eq!(battle.remaining_sec(), 4.0);

    for part in correct_parts(&battle) {
        battle.add_part(part).unwrap();
    }
    battle.submit(&mut events).unwrap();

    let result = battle.state().last_result.clone().unwrap();
    assert!(result.player_correct);
    assert_eq!(result.player_combo, 1);
    assert_eq!(
        result.player_damage_to_ai,
        DamageBreakdown {
            base: 8,
            speed_bonus: 4,
            combo_bonus: 0,
            total: 12,
        }
    );

    // HP changes only when the Hp phase is entered
    assert_eq!(battle.state().ai_hp(), 40);
    battle.advance(ms(2000), &mut events);
    assert_eq!(battle.state().phase, Phase::Hp);
    assert_eq!(battle.state().ai_hp(), 28);
    assert_eq!(battle.state().player_hp(), 50);
}

#[test]
fn test_combo_sequence() {
    let config = BattleConfig::new().with_profile(Difficulty::default(), punching_bag());
    let second = Duration::from_secs(1);
    let mut agent = ScriptedAgent::new([
        Intent::Correct(second),
        Intent::Correct(second),
        Intent::Wrong(second),
        Intent::Correct(second),
    ]);
    let sim = SimConfig::new().with_max_turns(4);

    let report = run_battle(&sim, config, catalog::standard().unwrap(), 9, &mut agent).unwrap();

    let combos: Vec<u32> = report.turns.iter().map(|t| t.player_combo).collect();
    assert_eq!(combos, vec![1, 2, 0, 1]);
    let bonuses: Vec<u32> = report
        .turns
        .iter()
        .map(|t| t.player_damage_to_ai.combo_bonus)
        .collect();
    assert_eq!(bonuses, vec![0, 2, 0, 0]);
}

#[test]
fn test_combo_is_capped() {
    let mut config = BattleConfig::new().with_profile(Difficulty::default(), punching_bag());
    config.combo_cap = 2;
    config.damage = DamageTable {
        base: 0,
        speed_per_sec: 0,
        ..DamageTable::default()
    };
    let sim = SimConfig::new().with_max_turns(5);

    let report = run_battle(
        &sim,
        config,
        catalog::standard().unwrap(),
        4,
        &mut OracleAgent::new(Duration::from_secs(1)),
    )
    .unwrap();

    let combos: Vec<u32> = report.turns.iter().map(|t| t.player_combo).collect();
    assert_eq!(combos, vec![1, 2, 2, 2, 2]);
}

#[test]
fn test_combo_cap_above_max_is_rejected() {
    let mut config = BattleConfig::default();
    config.combo_cap = 1000;

    let err = Battle::new(config, catalog::standard().unwrap(), 1).unwrap_err();
    assert!(matches!(err, BattleError::InvalidConfig(_)));
}

#[test]
fn test_combo_never_exceeds_max_combo() {
    let config = BattleConfig::new().with_profile(Difficulty::default(), {
        let mut p = punching_bag();
        p.max_hp = 100_000;
        p
    });
    let sim = SimConfig::new().with_max_turns(120);

    let report = run_battle(
        &sim,
        config,
        catalog::standard().unwrap(),
        8,
        &mut OracleAgent::new(Duration::from_secs(1)),
    )
    .unwrap();

    let top = report.turns.iter().map(|t| t.player_combo).max().unwrap();
    assert_eq!(report.turns.len(), 120);
    assert_eq!(top, MAX_COMBO);
}

#[test]
fn test_switch_to_difficulty_five_before_start() {
    let mut battle = new_battle(BattleConfig::default(), 1);
    let five = Difficulty::new(5).unwrap();
    let expected = battle.config().profiles.get(five).max_hp;

    battle.set_difficulty(five).unwrap();
    assert_eq!(battle.state().ai_hp(), expected);
    assert_eq!(battle.state().max_hp[Side::Ai], expected);

    battle.start_battle(&mut ());
    assert_eq!(battle.state().ai_hp(), expected);
    assert_eq!(battle.prompt().unwrap().difficulty, five);
    assert_eq!(battle.prompt().unwrap().time_limit_sec, battle.profile().time_limit_sec);
}

#[test]
fn test_difficulty_locked_mid_battle_then_free_at_end() {
    let mut config = BattleConfig::default();
    config.damage.base = 1000;
    let mut battle = new_battle(config.with_profile(Difficulty::default(), punching_bag()), 1);

    battle.start_battle(&mut ());
    battle.advance(ms(1000), &mut ());
    assert!(matches!(
        battle.set_difficulty(Difficulty::MIN),
        Err(BattleError::BattleInProgress)
    ));

    for part in correct_parts(&battle) {
        battle.add_part(part).unwrap();
    }
    battle.submit(&mut ()).unwrap();
    battle.advance(ms(3000), &mut ());

    assert_eq!(battle.state().phase, Phase::End);
    assert_eq!(battle.state().outcome, Some(BattleOutcome::PlayerWon));
    battle.set_difficulty(Difficulty::MIN).unwrap();
    assert_eq!(battle.state().ai_hp(), battle.profile().max_hp);
}

#[test]
fn test_submit_cancels_countdown() {
    let mut battle = new_battle(BattleConfig::default(), 6);
    let mut events: Vec<BattleEvent> = Vec::new();

    battle.start_battle(&mut events);
    battle.advance(ms(1000), &mut events);
    battle.advance(ms(1000), &mut events);
    battle.submit(&mut events).unwrap();

    // past the first countdown deadline, into turn 2's answer window
    battle.advance(ms(10_000), &mut events);

    assert_eq!(turn_results(&events).count(), 1);
    assert_eq!(battle.state().phase, Phase::Answer);
    assert_eq!(battle.state().turn_index, 2);
}

#[test]
fn test_input_only_in_answer_phase() {
    let mut battle = new_battle(BattleConfig::default(), 1);
    battle.start_battle(&mut ());
    battle.advance(ms(1000), &mut ());
    battle.submit(&mut ()).unwrap();

    assert!(matches!(
        battle.add_part(catalog::parts::PORT),
        Err(BattleError::NotAccepting { phase: Phase::Judge })
    ));
    assert!(matches!(
        battle.clear_selection(),
        Err(BattleError::NotAccepting { phase: Phase::Judge })
    ));
    assert!(matches!(
        battle.submit(&mut ()),
        Err(BattleError::NotAccepting { phase: Phase::Judge })
    ));
    assert!(matches!(
        battle.remove_part_at(0),
        Err(BattleError::NotAccepting { phase: Phase::Judge })
    ));
}

#[test]
fn test_hp_clamps_at_zero() {
    let mut config = BattleConfig::default();
    config.damage.base = 1000;
    let sure_shot = AiProfile::new("Sure", 40, 1.0, 5, 2.0, 0.0, 10);
    let config = config.with_profile(Difficulty::default(), sure_shot);

    let mut battle = new_battle(config, 8);
    let mut events: Vec<BattleEvent> = Vec::new();
    battle.start_battle(&mut events);
    battle.advance(Duration::from_secs(60), &mut events);

    assert_eq!(battle.state().player_hp(), 0);
    assert_eq!(battle.state().outcome, Some(BattleOutcome::AiWon));
    assert_eq!(battle.state().turn_index, 1);
    assert_eq!(
        events.last(),
        Some(&BattleEvent::BattleEnded(BattleOutcome::AiWon))
    );
    assert_eq!(battle.pending_timer(), None);
}

#[test]
fn test_simultaneous_knockout_is_a_draw() {
    let mut config = BattleConfig::default();
    config.damage.base = 1000;
    let sure_shot = AiProfile::new("Sure", 40, 1.0, 5, 2.0, 0.0, 10);
    let config = config.with_profile(Difficulty::default(), sure_shot);

    let report = run_battle(
        &SimConfig::new(),
        config,
        catalog::standard().unwrap(),
        8,
        &mut OracleAgent::new(Duration::from_secs(1)),
    )
    .unwrap();

    assert_eq!(report.outcome, Some(BattleOutcome::Draw));
    assert_eq!(report.final_state.player_hp(), 0);
    assert_eq!(report.final_state.ai_hp(), 0);
    assert_eq!(BattleOutcome::Draw.winner(), None);
}

#[test]
fn test_same_seed_same_battle() {
    let play = |seed| {
        let mut battle = new_battle(BattleConfig::default(), seed);
        let mut events: Vec<BattleEvent> = Vec::new();
        battle.start_battle(&mut events);
        battle.advance(Duration::from_secs(120), &mut events);
        (events, battle.state().clone())
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_each_turn_gets_a_new_prompt_identity() {
    let mut battle = new_battle(BattleConfig::default(), 5);
    let mut events: Vec<BattleEvent> = Vec::new();
    battle.start_battle(&mut events);
    battle.advance(Duration::from_secs(120), &mut events);

    let ids: Vec<_> = turn_results(&events).map(|r| r.prompt.id).collect();
    assert!(ids.len() >= 2);
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_restart_resets_everything() {
    let mut battle = new_battle(BattleConfig::default(), 5);
    battle.start_battle(&mut ());
    battle.advance(Duration::from_secs(30), &mut ());
    assert!(battle.state().turn_index > 1 || battle.state().phase == Phase::End);

    battle.start_battle(&mut ());

    let state = battle.state();
    assert_eq!(state.phase, Phase::Intro);
    assert_eq!(state.turn_index, 1);
    assert_eq!(state.player_hp(), 50);
    assert_eq!(state.ai_hp(), 40);
    assert_eq!(state.combo[Side::Player], 0);
    assert_eq!(state.combo[Side::Ai], 0);
    assert!(state.last_result.is_none());
    assert!(state.outcome.is_none());
}

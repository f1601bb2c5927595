//! Headless battle integration tests.
//!
//! Set `RUST_LOG=vocab_battle=debug` to see phase transitions and judge
//! results while these run.

use std::time::Duration;

use vocab_battle::core::{BattleConfig, Difficulty};
use vocab_battle::lexicon::catalog;
use vocab_battle::sim::{run_battle, run_series, IdleAgent, OracleAgent, SimConfig};
use vocab_battle::BattleOutcome;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_idle_player_loses_at_every_difficulty() {
    init_tracing();
    let dict = catalog::standard().unwrap();

    for difficulty in Difficulty::all() {
        let sim = SimConfig::new().with_difficulty(difficulty);
        let report =
            run_battle(&sim, BattleConfig::default(), dict.clone(), 11, &mut IdleAgent).unwrap();

        assert_eq!(report.outcome, Some(BattleOutcome::AiWon), "difficulty {difficulty}");
        assert_eq!(report.final_state.player_hp(), 0);
        assert_eq!(report.final_state.ai_hp(), report.final_state.max_hp[vocab_battle::Side::Ai]);
    }
}

#[test]
fn test_quick_oracle_sweeps_easiest_difficulty() {
    init_tracing();
    let sim = SimConfig::new().with_difficulty(Difficulty::MIN).with_seed_offset(500);
    let dict = catalog::standard().unwrap();
    let mut agent = OracleAgent::new(Duration::from_millis(800));

    let summary = run_series(&sim, &BattleConfig::default(), &dict, 10, &mut agent).unwrap();

    assert_eq!(summary.player_wins, 10);
    assert_eq!(summary.player_win_rate(), 1.0);
}

#[test]
fn test_reports_are_reproducible() {
    init_tracing();
    let dict = catalog::standard().unwrap();
    let sim = SimConfig::new().with_difficulty(Difficulty::new(3).unwrap());
    let run = || {
        run_battle(
            &sim,
            BattleConfig::default(),
            dict.clone(),
            2024,
            &mut OracleAgent::new(Duration::from_secs(3)),
        )
        .unwrap()
    };

    let a = run();
    let b = run();

    assert_eq!(a.turns, b.turns);
    assert_eq!(a.final_state, b.final_state);
    assert_eq!(a.progress, b.progress);
    assert_eq!(a.elapsed, b.elapsed);
}

#[test]
fn test_tick_size_does_not_change_the_battle() {
    init_tracing();
    let dict = catalog::standard().unwrap();
    let run = |tick| {
        let sim = SimConfig::new().with_tick(tick);
        run_battle(&sim, BattleConfig::default(), dict.clone(), 31, &mut IdleAgent).unwrap()
    };

    let coarse = run(Duration::from_millis(500));
    let fine = run(Duration::from_millis(10));

    assert_eq!(coarse.turns, fine.turns);
    assert_eq!(coarse.outcome, fine.outcome);
}

#[test]
fn test_damage_totals_match_hp_lost() {
    init_tracing();
    let dict = catalog::standard().unwrap();
    let sim = SimConfig::new();
    let report = run_battle(
        &sim,
        BattleConfig::default(),
        dict,
        8,
        &mut OracleAgent::new(Duration::from_secs(2)),
    )
    .unwrap();

    let state = &report.final_state;
    let ai_lost = state.max_hp[vocab_battle::Side::Ai] - state.ai_hp();
    let player_lost = state.max_hp[vocab_battle::Side::Player] - state.player_hp();

    assert_eq!(ai_lost, report.player_damage_dealt().min(state.max_hp[vocab_battle::Side::Ai]));
    assert_eq!(player_lost, report.ai_damage_dealt().min(state.max_hp[vocab_battle::Side::Player]));
}

//! Battle configuration types.
//!
//! Callers configure the engine by providing:
//! - `Difficulty`: validated level 1..=5
//! - `AiProfile` / `AiProfileTable`: per-difficulty opponent constants
//! - `PhaseTiming`: display delays for the non-interactive phases
//! - `BattleConfig`: combines all configuration
//!
//! Everything here is plain serde data with `Default` values, and can be
//! loaded from TOML with [`BattleConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{BattleError, Result};
use crate::rules::{DamageTable, MAX_COMBO};

/// Difficulty level, always within 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest difficulty.
    pub const MIN: Difficulty = Difficulty(1);
    /// Highest difficulty.
    pub const MAX: Difficulty = Difficulty(5);

    /// Create a difficulty, rejecting values outside 1..=5.
    pub fn new(level: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(BattleError::InvalidDifficulty(level))
        }
    }

    /// Raw level value.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Iterate over every difficulty, easiest first.
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN.0..=Self::MAX.0).map(Difficulty)
    }

    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = BattleError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> u8 {
        d.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opponent constants for one difficulty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiProfile {
    /// Display name.
    pub name: String,

    /// Starting (and maximum) HP.
    pub max_hp: u32,

    /// Probability in [0, 1] that the AI knows an answer.
    pub accuracy: f64,

    /// Highest word vocabulary level the AI may answer with.
    pub vocab_level_max: u8,

    /// Mean answer latency in seconds.
    pub base_answer_sec: f64,

    /// Maximum deviation from the mean latency in seconds.
    pub jitter_sec: f64,

    /// Answer window granted for prompts at this difficulty.
    pub time_limit_sec: u32,
}

impl AiProfile {
    /// Create a profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        accuracy: f64,
        vocab_level_max: u8,
        base_answer_sec: f64,
        jitter_sec: f64,
        time_limit_sec: u32,
    ) -> Self {
        Self {
            name: name.into(),
            max_hp,
            accuracy,
            vocab_level_max,
            base_answer_sec,
            jitter_sec,
            time_limit_sec,
        }
    }

    fn check(&self, difficulty: Difficulty) -> Result<()> {
        let invalid = |reason: &str| BattleError::InvalidProfile {
            difficulty: difficulty.level(),
            reason: reason.to_string(),
        };

        if self.max_hp == 0 {
            return Err(invalid("max_hp must be positive"));
        }
        if !(0.0..=1.0).contains(&self.accuracy) {
            return Err(invalid("accuracy must be within [0, 1]"));
        }
        if self.time_limit_sec == 0 {
            return Err(invalid("time_limit_sec must be positive"));
        }
        if !self.base_answer_sec.is_finite()
            || !self.jitter_sec.is_finite()
            || self.jitter_sec < 0.0
        {
            return Err(invalid("answer timing must be finite and jitter non-negative"));
        }
        Ok(())
    }
}

/// One `AiProfile` per difficulty, stored easiest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AiProfileTable {
    profiles: [AiProfile; 5],
}

impl AiProfileTable {
    /// Build a table from five profiles ordered by difficulty 1..=5.
    #[must_use]
    pub fn new(profiles: [AiProfile; 5]) -> Self {
        Self { profiles }
    }

    /// Profile for a difficulty.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> &AiProfile {
        &self.profiles[difficulty.index()]
    }

    /// Mutable profile for a difficulty.
    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut AiProfile {
        &mut self.profiles[difficulty.index()]
    }

    /// Iterate over (Difficulty, &AiProfile), easiest first.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &AiProfile)> {
        Difficulty::all().zip(self.profiles.iter())
    }

    /// Check every profile's ranges.
    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(d, p)| p.check(d))
    }
}

impl Default for AiProfileTable {
    fn default() -> Self {
        Self::new([
            AiProfile::new("Sprout", 30, 0.35, 1, 4.5, 1.5, 12),
            AiProfile::new("Scholar", 40, 0.5, 2, 3.0, 1.0, 10),
            AiProfile::new("Sage", 50, 0.65, 3, 2.5, 1.0, 9),
            AiProfile::new("Lexicographer", 60, 0.78, 4, 2.0, 0.8, 8),
            AiProfile::new("Etymon", 70, 0.9, 5, 1.5, 0.5, 7),
        ])
    }
}

/// Delays for the phases that only exist so the UI can show something.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    /// Pause before the answer window opens.
    pub intro_ms: u64,
    /// How long the judge result is shown before HP is applied.
    pub judge_ms: u64,
    /// How long the HP change is shown before the next turn.
    pub hp_ms: u64,
}

impl PhaseTiming {
    #[must_use]
    pub fn intro(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }

    #[must_use]
    pub fn judge(&self) -> Duration {
        Duration::from_millis(self.judge_ms)
    }

    #[must_use]
    pub fn hp(&self) -> Duration {
        Duration::from_millis(self.hp_ms)
    }
}

impl Default for PhaseTiming {
    fn default() -> Self {
        Self {
            intro_ms: 1000,
            judge_ms: 2000,
            hp_ms: 1000,
        }
    }
}

/// Complete battle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Player starting (and maximum) HP.
    pub player_max_hp: u32,

    /// Upper bound for combo streaks, within `1..=MAX_COMBO`.
    pub combo_cap: u32,

    /// Phase display delays.
    pub timing: PhaseTiming,

    /// Damage constants.
    pub damage: DamageTable,

    /// Opponent profiles, one per difficulty.
    pub profiles: AiProfileTable,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_max_hp: 50,
            combo_cap: MAX_COMBO,
            timing: PhaseTiming::default(),
            damage: DamageTable::default(),
            profiles: AiProfileTable::default(),
        }
    }
}

impl BattleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set player max HP.
    #[must_use]
    pub fn with_player_max_hp(mut self, hp: u32) -> Self {
        self.player_max_hp = hp;
        self
    }

    /// Set phase timing.
    #[must_use]
    pub fn with_timing(mut self, timing: PhaseTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set damage constants.
    #[must_use]
    pub fn with_damage(mut self, damage: DamageTable) -> Self {
        self.damage = damage;
        self
    }

    /// Replace the profile for one difficulty.
    #[must_use]
    pub fn with_profile(mut self, difficulty: Difficulty, profile: AiProfile) -> Self {
        *self.profiles.get_mut(difficulty) = profile;
        self
    }

    /// Check the configuration for authoring mistakes.
    pub fn validate(&self) -> Result<()> {
        if self.player_max_hp == 0 {
            return Err(BattleError::InvalidConfig(
                "player_max_hp must be positive".to_string(),
            ));
        }
        if !(1..=MAX_COMBO).contains(&self.combo_cap) {
            return Err(BattleError::InvalidConfig(format!(
                "combo_cap {} is outside 1..={MAX_COMBO}",
                self.combo_cap
            )));
        }
        self.profiles.validate()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_range() {
        assert!(Difficulty::new(0).is_err());
        assert!(Difficulty::new(6).is_err());
        assert_eq!(Difficulty::new(3).unwrap().level(), 3);
        assert_eq!(Difficulty::all().count(), 5);
        assert_eq!(Difficulty::default().level(), 2);
    }

    #[test]
    fn test_difficulty_serde_rejects_out_of_range() {
        let ok: Difficulty = serde_json::from_str("4").unwrap();
        assert_eq!(ok.level(), 4);
        assert!(serde_json::from_str::<Difficulty>("9").is_err());
    }

    #[test]
    fn test_default_profile_two() {
        let table = AiProfileTable::default();
        let p = table.get(Difficulty::new(2).unwrap());

        assert_eq!(p.max_hp, 40);
        assert_eq!(p.accuracy, 0.5);
        assert_eq!(p.vocab_level_max, 2);
        assert_eq!(p.base_answer_sec, 3.0);
        assert_eq!(p.jitter_sec, 1.0);
    }

    #[test]
    fn test_profiles_harden_with_difficulty() {
        let table = AiProfileTable::default();
        let profiles: Vec<_> = table.iter().map(|(_, p)| p).collect();

        for pair in profiles.windows(2) {
            assert!(pair[1].max_hp >= pair[0].max_hp);
            assert!(pair[1].accuracy >= pair[0].accuracy);
            assert!(pair[1].vocab_level_max >= pair[0].vocab_level_max);
        }
    }

    #[test]
    fn test_validate_rejects_bad_accuracy() {
        let bad = AiProfile::new("Broken", 10, 1.5, 1, 2.0, 0.5, 5);
        let config = BattleConfig::new().with_profile(Difficulty::MIN, bad);

        assert!(matches!(
            config.validate(),
            Err(BattleError::InvalidProfile { difficulty: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_combo_cap_over_99() {
        let err = BattleConfig::from_toml_str("combo_cap = 1000\n").unwrap_err();
        assert!(matches!(err, BattleError::InvalidConfig(_)));

        let mut config = BattleConfig::new();
        config.combo_cap = 0;
        assert!(matches!(config.validate(), Err(BattleError::InvalidConfig(_))));

        config.combo_cap = MAX_COMBO;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_player_hp() {
        let config = BattleConfig::new().with_player_max_hp(0);
        assert!(matches!(config.validate(), Err(BattleError::InvalidConfig(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BattleConfig::new()
            .with_player_max_hp(65)
            .with_timing(PhaseTiming {
                intro_ms: 500,
                judge_ms: 1500,
                hp_ms: 750,
            });

        let text = config.to_toml_string().unwrap();
        let parsed = BattleConfig::from_toml_str(&text).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let parsed = BattleConfig::from_toml_str("player_max_hp = 80\n").unwrap();

        assert_eq!(parsed.player_max_hp, 80);
        assert_eq!(parsed.timing, PhaseTiming::default());
        assert_eq!(parsed.profiles, AiProfileTable::default());
    }

    #[test]
    fn test_toml_parse_error() {
        let err = BattleConfig::from_toml_str("player_max_hp = \"lots\"").unwrap_err();
        assert!(matches!(err, BattleError::ConfigParse(_)));
    }
}

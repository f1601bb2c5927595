//! Damage calculation.
//!
//! Damage is a pure function of how much time was left and the attacker's
//! combo streak. It is only computed for correct answers; incorrect answers
//! deal [`DamageBreakdown::ZERO`].
//!
//! ```
//! use vocab_battle::rules::{calc_damage, DamageInput};
//!
//! let dmg = calc_damage(DamageInput { remaining_sec: 4.0, combo_streak: 1 });
//! assert_eq!(dmg.total, dmg.base + dmg.speed_bonus + dmg.combo_bonus);
//! ```

use serde::{Deserialize, Serialize};

/// Longest streak a battle tracks. `BattleConfig::combo_cap` may lower it.
pub const MAX_COMBO: u32 = 99;

/// Per-turn damage split into its sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub base: u32,
    pub speed_bonus: u32,
    pub combo_bonus: u32,
    pub total: u32,
}

impl DamageBreakdown {
    /// What an incorrect answer deals.
    pub const ZERO: DamageBreakdown = DamageBreakdown {
        base: 0,
        speed_bonus: 0,
        combo_bonus: 0,
        total: 0,
    };
}

/// Inputs to a damage calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageInput {
    /// Seconds left on the answer clock. Zero or negative earns no speed bonus.
    pub remaining_sec: f64,
    /// Streak including the current answer.
    pub combo_streak: u32,
}

/// Damage constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTable {
    /// Damage for any correct answer.
    pub base: u32,
    /// Bonus per whole second remaining.
    pub speed_per_sec: u32,
    pub speed_cap: u32,
    /// Bonus per streak step beyond the first.
    pub combo_per_step: u32,
    pub combo_bonus_cap: u32,
}

impl Default for DamageTable {
    fn default() -> Self {
        Self {
            base: 8,
            speed_per_sec: 1,
            speed_cap: 10,
            combo_per_step: 2,
            combo_bonus_cap: 20,
        }
    }
}

impl DamageTable {
    /// Damage for a correct answer.
    #[must_use]
    pub fn calc(&self, input: DamageInput) -> DamageBreakdown {
        let base = self.base;
        let speed_bonus = self.speed_bonus(input.remaining_sec);
        let combo_bonus = self.combo_bonus(input.combo_streak);

        DamageBreakdown {
            base,
            speed_bonus,
            combo_bonus,
            total: base.saturating_add(speed_bonus).saturating_add(combo_bonus),
        }
    }

    /// Non-decreasing in `remaining_sec`; zero for non-positive or NaN input.
    #[must_use]
    pub fn speed_bonus(&self, remaining_sec: f64) -> u32 {
        if remaining_sec.is_nan() || remaining_sec <= 0.0 {
            return 0;
        }
        let whole = remaining_sec.floor().min(f64::from(u32::MAX)) as u32;
        whole.saturating_mul(self.speed_per_sec).min(self.speed_cap)
    }

    /// Non-decreasing in `combo_streak`. Streaks past [`MAX_COMBO`] count as
    /// [`MAX_COMBO`].
    #[must_use]
    pub fn combo_bonus(&self, combo_streak: u32) -> u32 {
        let steps = combo_streak.min(MAX_COMBO).saturating_sub(1);
        steps.saturating_mul(self.combo_per_step).min(self.combo_bonus_cap)
    }
}

/// Damage with the default table.
#[must_use]
pub fn calc_damage(input: DamageInput) -> DamageBreakdown {
    DamageTable::default().calc(input)
}

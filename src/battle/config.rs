//! Tunable battle numbers and timings.

use crate::constants::*;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Battle balance and pacing. Every field falls back to its default when
/// missing from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Starting and maximum HP for both hero and boss
    pub max_hp: u32,
    /// The boss can never push the hero below this
    pub hero_hp_floor: u32,
    pub base_damage: u32,
    /// Probability in [0, 1]
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub boss_base_damage: u32,
    pub boss_damage_spread: u32,
    pub boss_min_damage: u32,
    /// Share of the defense stat subtracted from boss hits
    pub defense_factor: f64,
    pub default_time_limit: u32,
    pub default_reward_coins: u32,
    pub intro_delay_ms: u64,
    pub answer_cooldown_ms: u64,
    pub victory_delay_ms: u64,
    pub fail_flash_ms: u64,
    pub effect_lifetime_ms: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_hp: MAX_HP,
            hero_hp_floor: HERO_HP_FLOOR,
            base_damage: BASE_DAMAGE,
            crit_chance: CRIT_CHANCE,
            crit_multiplier: CRIT_MULTIPLIER,
            boss_base_damage: BOSS_BASE_DAMAGE,
            boss_damage_spread: BOSS_DAMAGE_SPREAD,
            boss_min_damage: BOSS_MIN_DAMAGE,
            defense_factor: DEFENSE_FACTOR,
            default_time_limit: DEFAULT_TIME_LIMIT_SECONDS,
            default_reward_coins: DEFAULT_REWARD_COINS,
            intro_delay_ms: INTRO_DELAY_MS,
            answer_cooldown_ms: ANSWER_COOLDOWN_MS,
            victory_delay_ms: VICTORY_DELAY_MS,
            fail_flash_ms: FAIL_FLASH_MS,
            effect_lifetime_ms: EFFECT_LIFETIME_MS,
        }
    }
}

impl BattleConfig {
    /// Default numbers with a boss that takes several hits to go down.
    pub fn long_fight(base_damage: u32) -> Self {
        Self {
            base_damage,
            ..Default::default()
        }
    }

    /// Load overrides from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn intro_delay(&self) -> Duration {
        Duration::from_millis(self.intro_delay_ms)
    }

    pub fn answer_cooldown(&self) -> Duration {
        Duration::from_millis(self.answer_cooldown_ms)
    }

    pub fn victory_delay(&self) -> Duration {
        Duration::from_millis(self.victory_delay_ms)
    }

    pub fn fail_flash(&self) -> Duration {
        Duration::from_millis(self.fail_flash_ms)
    }

    pub fn effect_lifetime(&self) -> Duration {
        Duration::from_millis(self.effect_lifetime_ms)
    }
}

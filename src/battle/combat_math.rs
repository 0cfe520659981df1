//! Pure strike calculations shared by the engine and the simulator.
//!
//! Randomness comes in through `rng` so tests can pin the crit and damage
//! rolls with a constant generator.

use super::config::BattleConfig;
use super::equipment::EquipmentEffects;
use super::types::MiniGame;
use rand::Rng;

/// Numbers fixed for the whole battle once equipment is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleStats {
    pub total_damage: u32,
    pub defense_reduction: u32,
    pub gold_bonus: u32,
    pub time_bonus: u32,
    /// Countdown length for `timed` games, in seconds
    pub effective_time_limit: u32,
    /// Gold paid on victory
    pub reward_coins: u32,
    /// Extra HP restored by every potion
    pub potion_bonus: u32,
}

impl BattleStats {
    pub fn derive(game: &MiniGame, effects: &EquipmentEffects, config: &BattleConfig) -> Self {
        let time_limit = game
            .time_limit
            .filter(|t| *t > 0)
            .unwrap_or(config.default_time_limit);
        let base_reward = game
            .reward_coins
            .filter(|c| *c > 0)
            .unwrap_or(config.default_reward_coins);

        Self {
            total_damage: config.base_damage.saturating_add(effects.damage_boost),
            defense_reduction: effects.defense,
            gold_bonus: effects.gold_boost,
            time_bonus: effects.time_boost,
            effective_time_limit: time_limit.saturating_add(effects.time_boost),
            reward_coins: base_reward.saturating_add(effects.gold_boost),
            potion_bonus: effects.heal,
        }
    }
}

/// Result of a hero attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub damage: u32,
    pub is_crit: bool,
}

/// Roll a uniform value in [0, 1) against `chance`.
pub fn roll_crit(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Hero damage for a correct answer: crits multiply and round down.
pub fn hero_strike(total_damage: u32, config: &BattleConfig, rng: &mut impl Rng) -> Strike {
    let is_crit = roll_crit(config.crit_chance, rng);
    let damage = if is_crit {
        (total_damage as f64 * config.crit_multiplier).floor() as u32
    } else {
        total_damage
    };
    Strike { damage, is_crit }
}

/// Boss damage for a wrong answer, after defense.
///
/// `boss_base_damage + floor(roll * boss_damage_spread)`, minus
/// `floor(defense * defense_factor)`, never below `boss_min_damage`.
pub fn boss_strike_damage(defense: u32, config: &BattleConfig, rng: &mut impl Rng) -> u32 {
    let spread = (rng.gen::<f64>() * config.boss_damage_spread as f64).floor() as u32;
    let raw = config.boss_base_damage.saturating_add(spread);
    let reduction = (defense as f64 * config.defense_factor).floor() as u32;
    raw.saturating_sub(reduction).max(config.boss_min_damage)
}

/// Boss HP after a hit, stopping at zero.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Hero HP after a hit. The hero is never knocked below `floor`.
pub fn apply_hero_damage(current_hp: u32, damage: u32, floor: u32) -> u32 {
    current_hp
        .saturating_sub(damage)
        .max(floor.min(current_hp))
}

/// Uniform index in `0..len` from a single `f64` roll.
pub fn pick_index(len: usize, rng: &mut impl Rng) -> usize {
    if len == 0 {
        return 0;
    }
    ((rng.gen::<f64>() * len as f64) as usize).min(len - 1)
}

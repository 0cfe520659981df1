//! Simulation configuration.

use crate::battle::BattleConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Chance the scripted player picks the right choice (0.0 - 1.0)
    pub accuracy: f64,

    /// Item ids the hero carries into every battle
    pub equipped: Vec<String>,

    /// Combat numbers the engine plays with
    pub battle: BattleConfig,

    /// Answers per battle before the run is abandoned
    pub max_answers: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            accuracy: 0.75,
            equipped: Vec::new(),
            battle: BattleConfig::default(),
            max_answers: 200,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Multi-hit fights: the hero's base damage is cut so the boss survives
    /// several correct answers.
    pub fn long_fight(base_damage: u32) -> Self {
        Self {
            num_runs: 500,
            battle: BattleConfig::long_fight(base_damage),
            ..Default::default()
        }
    }

    /// Compare a loadout against the defaults.
    pub fn loadout_test(equipped: &[&str]) -> Self {
        Self {
            num_runs: 200,
            equipped: equipped.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let long = SimConfig::long_fight(20);
        assert_eq!(long.battle.base_damage, 20);
        assert_eq!(long.num_runs, 500);

        let kit = SimConfig::loadout_test(&["fire_sword", "ice_shield"]);
        assert_eq!(kit.equipped.len(), 2);
        assert_eq!(kit.battle, BattleConfig::default());
    }
}

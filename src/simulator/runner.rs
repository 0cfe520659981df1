//! Main simulation runner driving the real battle engine.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::battle::combat_math::pick_index;
use crate::battle::{BattleEngine, BattlePhase, GameKind, Loadout, MiniGame};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Wall-clock step used while the engine is not taking answers.
const SIM_STEP: Duration = Duration::from_millis(100);

const CORRECT_CHOICE: usize = 0;
const SIM_CHOICES: &[&str] = &["42", "36", "48", "13"];

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - won {}, answers {}, crits {}, lowest HP {}, coins {}",
                run_idx + 1,
                config.num_runs,
                run.won,
                run.answers,
                run.crits,
                run.lowest_hero_hp,
                run.coins
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// Play one `choice` battle from intro to reward (or until `max_answers`).
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let game = MiniGame::with_choices(GameKind::Choice, "What is 6 x 7?", SIM_CHOICES, "42");
    let loadout = Loadout {
        equipped: config.equipped.clone(),
        potions: Vec::new(),
    };

    let paid = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&paid);
    let mut engine = BattleEngine::new(game, &loadout, config.battle.clone(), rng)
        .with_on_complete(move |coins| sink.set(sink.get() + coins));

    let mut lowest_hero_hp = engine.hero.hp;
    let mut correct_answers = 0;

    while !engine.reward_paid() {
        if engine.accepts_answers() {
            if engine.answers_given >= config.max_answers {
                break;
            }
            let index = if rng.gen::<f64>() < config.accuracy {
                CORRECT_CHOICE
            } else {
                1 + pick_index(SIM_CHOICES.len() - 1, rng)
            };
            if let Some(outcome) = engine.choose(index, rng) {
                if outcome.was_correct() {
                    correct_answers += 1;
                }
            }
            lowest_hero_hp = lowest_hero_hp.min(engine.hero.hp);
        } else {
            engine.tick(SIM_STEP);
        }
    }

    RunStats {
        won: engine.phase == BattlePhase::Victory,
        answers: engine.answers_given,
        correct_answers,
        crits: engine.crits_landed,
        lowest_hero_hp,
        coins: paid.get(),
        reward_paid: engine.reward_paid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleConfig;

    fn seeded(num_runs: u32) -> SimConfig {
        SimConfig {
            num_runs,
            seed: Some(42),
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_player_wins_in_one_answer() {
        let config = SimConfig {
            accuracy: 1.0,
            ..seeded(20)
        };
        let report = run_simulation(&config);
        assert_eq!(report.victories, 20);
        assert_eq!(report.rewards_paid, 20);
        assert!((report.avg_answers_to_victory - 1.0).abs() < f64::EPSILON);
        assert_eq!(report.total_coins, 20 * 15);
        assert_eq!(report.lowest_hero_hp, 100);
    }

    #[test]
    fn test_hopeless_player_hits_answer_cap() {
        let config = SimConfig {
            accuracy: 0.0,
            max_answers: 30,
            ..seeded(5)
        };
        let report = run_simulation(&config);
        assert_eq!(report.victories, 0);
        assert_eq!(report.total_coins, 0);
        // The hero is never knocked below the floor
        assert_eq!(report.lowest_hero_hp, config.battle.hero_hp_floor);
        assert!(report.run_stats.iter().all(|r| r.answers == 30));
    }

    #[test]
    fn test_long_fight_needs_several_hits() {
        let config = SimConfig {
            accuracy: 1.0,
            battle: BattleConfig::long_fight(10),
            ..seeded(10)
        };
        let report = run_simulation(&config);
        assert_eq!(report.victories, 10);
        // 10 damage (15 on a crit) against 100 HP
        assert!(report.avg_answers_to_victory >= 7.0);
        assert!(report.avg_answers_to_victory <= 10.0);
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig {
            accuracy: 0.5,
            battle: BattleConfig::long_fight(25),
            ..seeded(30)
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_loadout_gold_bonus() {
        let config = SimConfig {
            accuracy: 1.0,
            equipped: vec!["lightning_gauntlets".to_string()],
            ..seeded(3)
        };
        let report = run_simulation(&config);
        assert_eq!(report.total_coins, 3 * 25);
    }
}

//! Battle balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of `choice` battles with a scripted player to check:
//! - How many answers a fight takes at a given accuracy
//! - How often crits land
//! - How low the hero's HP gets before the boss falls
//! - How much gold a loadout earns per battle
//!
//! Runs drive the real `BattleEngine` through `tick` and `choose`, so results
//! match what a player sees.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};

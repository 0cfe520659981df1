//! Battle balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 battles, 75% accuracy
//!   cargo run --bin simulate -- -n 100 --accuracy 0.5
//!   cargo run --bin simulate -- --damage 20 --seed 42 # multi-hit fights, reproducible
//!   cargo run --bin simulate -- --equip fire_sword,magic_wand

use math_quest::battle::BattleConfig;
use math_quest::simulator::{run_simulation, SimConfig};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    math_quest::init_logging();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MATH QUEST BATTLE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Battles:        {}", config.num_runs);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Base Damage:    {}", config.battle.base_damage);
    println!("  Max Answers:    {}", config.max_answers);
    if !config.equipped.is_empty() {
        println!("  Equipped:       {}", config.equipped.join(", "));
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if config.verbosity >= 1 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, json) {
            eprintln!("Failed to write JSON report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-a" | "--accuracy" => {
                if i + 1 < args.len() {
                    config.accuracy = args[i + 1]
                        .parse::<f64>()
                        .unwrap_or(0.75)
                        .clamp(0.0, 1.0);
                    i += 1;
                }
            }
            "-d" | "--damage" => {
                if i + 1 < args.len() {
                    if let Ok(damage) = args[i + 1].parse::<u32>() {
                        config.battle.base_damage = damage.max(1);
                    }
                    i += 1;
                }
            }
            "-e" | "--equip" => {
                if i + 1 < args.len() {
                    config.equipped = args[i + 1]
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(String::from)
                        .collect();
                    i += 1;
                }
            }
            "-m" | "--max-answers" => {
                if i + 1 < args.len() {
                    config.max_answers = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    let path = Path::new(&args[i + 1]);
                    config.battle = BattleConfig::from_json_file(path)
                        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {}
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Math Quest Battle Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>          Number of battles (default: 1000)");
    println!("  -s, --seed <N>          Random seed for reproducibility");
    println!("  -a, --accuracy <P>      Chance of a correct answer, 0.0-1.0 (default: 0.75)");
    println!("  -d, --damage <N>        Hero base damage (default: 100)");
    println!("  -e, --equip <IDS>       Comma-separated item ids to equip");
    println!("  -m, --max-answers <N>   Answers before a battle is abandoned (default: 200)");
    println!("  -c, --config <FILE>     Load battle numbers from a JSON file");
    println!("  -v, --verbose           Print every battle");
    println!("  -q, --quiet             Skip the text report");
    println!("  --json                  Save JSON report to file");
    println!("  -h, --help              Show this help");
}

use math_quest::battle::{
    process_input, AnswerOutcome, BattleConfig, BattleEngine, BattleEvent, BattleInput,
    BattlePhase, GameKind, MiniGame, RoundState,
};
use math_quest::math::{derive_simple_model, get_hint, latex_to_plain, normalize, plain_to_latex};
use math_quest::session::{ApiClient, Session, SessionStore};
use math_quest::QuestError;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;
use tracing::warn;

const DEFAULT_SESSION_ID: &str = "local";

fn main() -> ExitCode {
    math_quest::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_help();
        return ExitCode::FAILURE;
    }

    let rest = &args[2..];
    match args[1].as_str() {
        "normalize" => print_text(rest, normalize),
        "latex" => print_text(rest, latex_to_plain),
        "preview" => print_text(rest, plain_to_latex),
        "hint" => print_text(rest, |text| {
            let hint = get_hint(text);
            if hint.is_empty() {
                "No problems spotted.".to_string()
            } else {
                hint
            }
        }),
        "model" => print_text(rest, |text| match derive_simple_model(text) {
            Some(model) => format!("{}\n{}", model, model.describe()),
            None => "Not a simple two-number problem.".to_string(),
        }),
        "play" => match run_play(rest) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        "--version" | "-v" => {
            println!("math-quest {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "--help" | "-h" => {
            print_help();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("Unknown command: {}\n", other);
            print_help();
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Math Quest - battle mini-games and math input helpers\n");
    println!("Usage: math-quest <COMMAND> [ARGS]\n");
    println!("Commands:");
    println!("  normalize <text>     Convert math symbols to plain text");
    println!("  latex <latex>        Convert LaTeX to plain text");
    println!("  preview <text>       Convert plain math to LaTeX for preview");
    println!("  hint <text>          Check an answer for common input mistakes");
    println!("  model <text>         Explain a simple two-number problem");
    println!("  play <game.json>     Play a battle mini-game in the terminal");
    println!("      --session <id>   Session to credit (default: local)");
    println!("      --api <url>      Sync the session with a story backend");
    println!("      --config <file>  Load battle numbers from a JSON file");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
}

fn print_text(rest: &[String], convert: impl Fn(&str) -> String) -> ExitCode {
    if rest.is_empty() {
        eprintln!("Missing text argument");
        return ExitCode::FAILURE;
    }
    println!("{}", convert(&rest.join(" ")));
    ExitCode::SUCCESS
}

struct PlayArgs {
    game_path: String,
    session_id: String,
    api_base: Option<String>,
    config_path: Option<String>,
}

fn parse_play_args(rest: &[String]) -> Result<PlayArgs, QuestError> {
    let mut game_path = None;
    let mut session_id = DEFAULT_SESSION_ID.to_string();
    let mut api_base = None;
    let mut config_path = None;

    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--session" | "--api" | "--config" => {
                let Some(value) = rest.get(i + 1).cloned() else {
                    return Err(usage_error(&format!("{} needs a value", rest[i])));
                };
                match rest[i].as_str() {
                    "--session" => session_id = value,
                    "--api" => api_base = Some(value),
                    _ => config_path = Some(value),
                }
                i += 1;
            }
            path if game_path.is_none() => game_path = Some(path.to_string()),
            other => return Err(usage_error(&format!("unexpected argument {}", other))),
        }
        i += 1;
    }

    Ok(PlayArgs {
        game_path: game_path.ok_or_else(|| usage_error("play needs a game file"))?,
        session_id,
        api_base,
        config_path,
    })
}

fn usage_error(message: &str) -> QuestError {
    QuestError::Io(io::Error::new(io::ErrorKind::InvalidInput, message.to_string()))
}

fn run_play(rest: &[String]) -> Result<(), QuestError> {
    let args = parse_play_args(rest)?;

    let game: MiniGame = serde_json::from_str(&std::fs::read_to_string(&args.game_path)?)?;
    let config = match &args.config_path {
        Some(path) => BattleConfig::from_json_file(Path::new(path))?,
        None => BattleConfig::default(),
    };

    let store = SessionStore::default_location()?;
    let client = args.api_base.as_deref().map(ApiClient::new);
    let mut session = load_session(&store, client.as_ref(), &args.session_id);

    let earned = Rc::new(Cell::new(None));
    let sink = Rc::clone(&earned);
    let mut rng = rand::thread_rng();
    let mut engine = BattleEngine::new(game, &session.loadout(), config, &mut rng)
        .with_on_complete(move |coins| sink.set(Some(coins)));

    let mut clock = Instant::now();
    let mut advance = |engine: &mut BattleEngine| {
        let now = Instant::now();
        engine.tick(now - clock);
        clock = now;
    };

    println!("{}", engine.game.title.as_deref().unwrap_or("A math boss appears!"));
    std::thread::sleep(engine.config.intro_delay());
    advance(&mut engine);
    print_events(&mut engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while engine.phase == BattlePhase::Battle {
        print_round(&engine);
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        advance(&mut engine);

        let input = match parse_input(line.trim(), engine.kind()) {
            Some(Command::Quit) => break,
            Some(Command::Input(input)) => input,
            None => {
                println!("?");
                continue;
            }
        };

        if let Some(outcome) = process_input(&mut engine, input, &mut rng) {
            print_outcome(&outcome, &engine);
        }
        print_events(&mut engine);

        while let RoundState::Cooldown { remaining } = engine.round {
            std::thread::sleep(remaining);
            advance(&mut engine);
        }
    }

    if engine.phase == BattlePhase::Victory {
        std::thread::sleep(engine.config.victory_delay());
        advance(&mut engine);
        print_events(&mut engine);
    }

    let potions_left = engine.potions.clone();
    engine.dispose();

    session.sync_potions(&potions_left);
    if let Some(coins) = earned.get() {
        session.credit(coins);
        println!("You earned {} coins! Total: {}", coins, session.coins);
        if let Some(client) = &client {
            match client.report_reward(&session.session_id, coins) {
                Ok(remote) => session.coins = remote.coins,
                Err(e) => warn!(error = %e, "could not report reward to backend"),
            }
        }
    }
    store.save(&session)?;
    Ok(())
}

fn load_session(store: &SessionStore, client: Option<&ApiClient>, session_id: &str) -> Session {
    if let Some(client) = client {
        match client.fetch_session(session_id) {
            Ok(mut session) => {
                if session.session_id.is_empty() {
                    session.session_id = session_id.to_string();
                }
                return session;
            }
            Err(e) => warn!(error = %e, "backend unavailable, using local session"),
        }
    }
    store.load_or_default(session_id)
}

enum Command {
    Input(BattleInput),
    Quit,
}

fn parse_input(line: &str, kind: GameKind) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let number = || parts.clone().next()?.parse::<usize>().ok()?.checked_sub(1);

    let input = match head {
        "q" | "quit" => return Some(Command::Quit),
        "retry" => BattleInput::Retry,
        "potion" => BattleInput::DrinkPotion(number()?),
        "p" | "place" if kind == GameKind::Dragdrop => BattleInput::Place(number()?),
        "r" | "remove" if kind == GameKind::Dragdrop => BattleInput::Remove(number()?),
        "s" | "submit" if kind == GameKind::Dragdrop => BattleInput::Submit,
        n if kind.uses_choices() => BattleInput::Choose(n.parse::<usize>().ok()?.checked_sub(1)?),
        _ => return None,
    };
    Some(Command::Input(input))
}

fn print_round(engine: &BattleEngine) {
    println!();
    println!(
        "Hero {}/{}  vs  {} {}/{}",
        engine.hero.hp, engine.hero.max_hp, engine.boss_name, engine.boss.hp, engine.boss.max_hp
    );
    if let Some(seconds) = engine.time_left() {
        println!("Time left: {}s", seconds);
    }
    if engine.round == RoundState::Expired {
        println!("Time's up! Type 'retry' to try again.");
        return;
    }
    if let Some(prompt) = &engine.game.prompt {
        println!("{}", prompt);
    }
    println!("{}", engine.game.question);

    if engine.kind() == GameKind::Dragdrop {
        println!("Tokens:  {}", numbered(&engine.available));
        println!("Placed:  {}", numbered(&engine.arrangement));
        println!("(p N = place, r N = remove, s = submit)");
    } else {
        for (i, choice) in engine.game.choices.iter().enumerate() {
            println!("  {}) {}", i + 1, choice);
        }
    }
    if !engine.potions.is_empty() {
        println!("Potions: {}  (potion N)", numbered(&engine.potions));
    }
    print!("> ");
    let _ = io::stdout().flush();
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}:{}", i + 1, item))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_outcome(outcome: &AnswerOutcome, engine: &BattleEngine) {
    if outcome.was_correct() {
        if let Some(action) = &engine.game.hero_action {
            println!("{}", action);
        }
    } else {
        println!("{}", engine.game.fail_message());
    }
}

fn print_events(engine: &mut BattleEngine) {
    for event in engine.drain_events() {
        match event {
            BattleEvent::BattleStarted { boss_name } => println!("{} blocks your path!", boss_name),
            BattleEvent::HeroStrike {
                damage,
                is_crit,
                boss_hp,
            } => {
                let label = if is_crit { "CRITICAL HIT!" } else { "DIRECT HIT!" };
                println!("{} {} damage (boss HP {})", label, damage, boss_hp);
            }
            BattleEvent::BossStrike { damage, hero_hp } => {
                println!("The boss strikes for {} (your HP {})", damage, hero_hp)
            }
            BattleEvent::TimeExpired => println!("Time's up!"),
            BattleEvent::Retried { time_limit } => println!("Clock reset to {}s", time_limit),
            BattleEvent::PotionDrunk { potion, healed } => {
                println!("You drink the {} and recover {} HP", potion, healed)
            }
            BattleEvent::Victory { reward_coins } => {
                println!("Victory! The boss drops {} coins...", reward_coins)
            }
            BattleEvent::RewardPaid { .. } => {}
        }
    }
}

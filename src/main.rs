//! Tambola Caller entry point
//!
//! Line-oriented terminal front-end: reads intents from stdin, feeds them to
//! the caller and prints the board after every change.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use tambola_caller::caller::TapEffect;
use tambola_caller::platform::LineDialog;
use tambola_caller::sim::{DrawSource, Enqueue, ResetOutcome};
use tambola_caller::{Caller, Settings, SettingsError, TapMode, ui};

#[derive(Parser)]
#[command(name = "tambola-caller", version, about = "Tambola/Bingo number caller")]
struct Cli {
    /// JSON settings file (falls back to $TAMBOLA_SETTINGS)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// What a completed triple tap does (queue or call)
    #[arg(long, value_parser = parse_tap_mode)]
    tap_mode: Option<TapMode>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_tap_mode(s: &str) -> Result<TapMode, String> {
    TapMode::from_str(s).ok_or_else(|| format!("unknown tap mode `{s}` (expected queue or call)"))
}

/// One line of user input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tap(Vec<u8>),
    Draw,
    Reset,
    State,
    Help,
    Quit,
}

fn parse_numbers<'a>(words: impl Iterator<Item = &'a str>) -> Result<Vec<u8>, String> {
    words
        .map(|w| w.parse::<u8>().map_err(|_| format!("not a board number: `{w}`")))
        .collect()
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Command::Draw);
    };

    match first.to_lowercase().as_str() {
        "d" | "draw" | "next" => Ok(Command::Draw),
        "r" | "reset" | "restart" => Ok(Command::Reset),
        "s" | "state" => Ok(Command::State),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "t" | "tap" => {
            let numbers = parse_numbers(words)?;
            if numbers.is_empty() {
                return Err("tap needs at least one number".to_string());
            }
            Ok(Command::Tap(numbers))
        }
        _ => parse_numbers(line.split_whitespace()).map(Command::Tap),
    }
}

const HELP: &str = "\
Commands:
  <enter> | draw        call the next number
  tap N [N ...] | N ... tap board cells (3 quick taps queue a number)
  reset                 restart the game (asks first)
  state                 print the game state as JSON
  help                  this text
  quit                  leave";

fn load_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    let path = cli
        .settings
        .clone()
        .or_else(|| std::env::var_os(Settings::ENV_VAR).map(PathBuf::from));

    let mut settings = match path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(mode) = cli.tap_mode {
        settings.tap_mode = mode;
    }
    Ok(settings)
}

fn report_tap(effect: TapEffect) -> Option<String> {
    match effect {
        TapEffect::Rejected => Some("That number is not available.".to_string()),
        TapEffect::Counting { .. } => None,
        TapEffect::Enqueued { number, outcome } => Some(match outcome {
            Enqueue::Queued { position: 0 } => format!("{number} will be called next."),
            Enqueue::Queued { position } => format!("{number} queued ({position} ahead)."),
            Enqueue::Duplicate => format!("{number} is already queued."),
            Enqueue::AlreadyCalled | Enqueue::OutOfRange => {
                "That number is not available.".to_string()
            }
        }),
        TapEffect::Called(number) => Some(format!("Called {number}.")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Tambola Caller starting (tap mode: {})", settings.tap_mode.as_str());

    let mut caller = Caller::new(&settings);
    let started = Instant::now();
    let stdin = io::stdin();

    println!("{}", ui::render_board(&caller.snapshot()));
    println!("Type `help` for commands.");

    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        }

        // Let any debounce window that closed while we waited expire first
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        caller.advance_clock_to(elapsed);

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match command {
            Command::Tap(numbers) => {
                for number in numbers {
                    if let Some(msg) = report_tap(caller.tap_number(number)) {
                        println!("{msg}");
                    }
                }
            }
            Command::Draw => match caller.request_draw() {
                Ok(outcome) => {
                    let how = match outcome.source {
                        DrawSource::Queued => " (queued)",
                        DrawSource::Random => "",
                    };
                    println!("Number {}{how}", outcome.number);
                }
                Err(e) => println!("{e}"),
            },
            Command::Reset => {
                let mut dialog = LineDialog::new(stdin.lock(), io::stdout());
                match caller.request_reset(&mut dialog) {
                    ResetOutcome::Reset => println!("Game restarted."),
                    ResetOutcome::Cancelled => println!("Reset cancelled."),
                }
            }
            Command::State => {
                match serde_json::to_string_pretty(&caller.snapshot()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => eprintln!("error: {e}"),
                }
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", ui::render_board(&caller.snapshot()));
    }

    ExitCode::SUCCESS
}

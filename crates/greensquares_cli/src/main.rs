//! Command-line front end for the contribution-chart editor.
//!
//! # Responsibility
//! - Map subcommands to editor session actions.
//! - Render the chart and report save outcomes to the terminal.
//!
//! One-shot edit commands save immediately; `edit` keeps one session open
//! with undo/redo until `quit`.

mod render;
mod repl;

use anyhow::Context as _;
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use greensquares_core::randomizer::DEFAULT_INTENSITY;
use greensquares_core::store::json_store::DEFAULT_FILE_NAME;
use greensquares_core::{
    default_log_level, init_logging, parse_iso_date, EditorSession, Intensity, JsonFileStore,
    LoadOutcome, ShiftDirection,
};
use log::info;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greensquares", version, about = "Paint a contribution chart")]
struct Cli {
    /// Contributions JSON document.
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chart for one year.
    Show(YearArgs),
    /// Cycle the level of one day and save.
    Click {
        /// Day as YYYY-MM-DD.
        date: String,
    },
    /// Randomize one year and save.
    Randomize(RandomizeArgs),
    /// Write text onto one year and save.
    Text {
        text: String,
        #[command(flatten)]
        year: YearArgs,
    },
    /// Shift every day one week and save.
    Shift {
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Interactive session with undo/redo.
    Edit {
        #[command(flatten)]
        year: YearArgs,
        /// Seed for `random` commands.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args, Debug)]
struct YearArgs {
    /// Displayed year (defaults to the current year).
    #[arg(long)]
    year: Option<i32>,
}

#[derive(clap::Args, Debug)]
struct RandomizeArgs {
    #[command(flatten)]
    year: YearArgs,

    /// 0 (nothing) to 5 (busy).
    #[arg(long, default_value_t = DEFAULT_INTENSITY)]
    intensity: f64,

    /// Seed for a reproducible grid.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Left,
    Right,
}

impl From<DirectionArg> for ShiftDirection {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::Left => ShiftDirection::Left,
            DirectionArg::Right => ShiftDirection::Right,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        greensquares_core::core_version()
    );

    let store = JsonFileStore::new(&cli.file);
    match cli.cmd {
        Command::Show(args) => {
            let session = open_session(store, &args)?;
            print_chart(&session);
        }
        Command::Click { date } => {
            let date = parse_iso_date(&date)?;
            let mut session = open_session(store, &YearArgs { year: Some(date.year()) })?;
            let level = session.click_cell(date);
            println!("{date} -> level {level}");
            save_and_report(&session)?;
        }
        Command::Randomize(args) => {
            let intensity = Intensity::new(args.intensity)?;
            let mut session = open_session(store, &args.year)?;
            let mut rng = make_rng(args.seed);
            let count = session.randomize(intensity, &mut rng);
            println!("randomized {count} days ({})", intensity.status_text());
            print_chart(&session);
            save_and_report(&session)?;
        }
        Command::Text { text, year } => {
            let mut session = open_session(store, &year)?;
            let lit = session.apply_text_pattern(&text)?;
            println!("lit {lit} cells");
            print_chart(&session);
            save_and_report(&session)?;
        }
        Command::Shift { direction } => {
            let mut session = open_session(store, &YearArgs { year: None })?;
            session.shift(direction.into());
            print_chart(&session);
            save_and_report(&session)?;
        }
        Command::Edit { year, seed } => {
            let mut session = open_session(store, &year)?;
            let mut rng = make_rng(seed);
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), &mut io::stdout(), &mut rng)?;
        }
    }
    Ok(())
}

fn open_session(
    store: JsonFileStore,
    args: &YearArgs,
) -> anyhow::Result<EditorSession<JsonFileStore>> {
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let path = store.path().display().to_string();
    let mut session = EditorSession::open(store, year);
    session
        .set_selected_year(year)
        .with_context(|| format!("cannot display year {year}"))?;
    if session.load_outcome() == LoadOutcome::StartedEmpty {
        eprintln!("note: could not read `{path}`; starting with an empty chart");
    }
    Ok(session)
}

/// Seeded `Pcg32` when `seed` is given, the thread RNG otherwise.
fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(Pcg32::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn print_chart(session: &EditorSession<JsonFileStore>) {
    for line in render::render_chart(&session.layout()) {
        println!("{line}");
    }
}

fn save_and_report(session: &EditorSession<JsonFileStore>) -> anyhow::Result<()> {
    let count = session
        .save()
        .with_context(|| format!("failed to save `{}`", session.store().path().display()))?;
    println!("saved {count} days to {}", session.store().path().display());
    Ok(())
}

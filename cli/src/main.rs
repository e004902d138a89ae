use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mineboard_core::{CellCount, Coord, MineBoard, MoveOutcome, Seed};
use tracing_subscriber::filter::LevelFilter;

use command::{Command, HELP};
use settings::{BoardSettings, Preset};

mod command;
mod seed;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with width, height, mines and seed, flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start from a classic board size
    #[arg(short, long, value_enum)]
    preset: Option<Preset>,

    #[arg(long)]
    width: Option<Coord>,

    #[arg(long)]
    height: Option<Coord>,

    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<Seed>,

    /// Print the solution before playing
    #[arg(short, long)]
    reveal: bool,
}

impl Args {
    fn flag_settings(&self) -> BoardSettings {
        BoardSettings {
            width: self.width,
            height: self.height,
            mines: self.mines,
            seed: self.seed,
        }
    }
}

/// Routes `log` records from the engine into a stderr subscriber, `RUST_LOG` wins over the flags.
fn init_tracing(level: LevelFilter) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose.tracing_level_filter())?;

    let file_settings = match &args.config {
        Some(path) => BoardSettings::load(path)?,
        None => BoardSettings::default(),
    };
    let config = file_settings
        .overlay(args.flag_settings())
        .resolve(args.preset);
    log::info!("seed: {}", config.seed);

    let mut board = MineBoard::new(config).context("Could not create board")?;

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{}x{} board, {} mines, seed {}",
        config.width, config.height, config.mines, config.seed
    )?;
    if args.reveal {
        write!(out, "{}", board.truth())?;
        writeln!(out)?;
    }
    write!(out, "{}", board.player())?;

    match play(&mut board, io::stdin().lock(), &mut out)? {
        Some(MoveOutcome::Win) => writeln!(out, "All mines flagged, you win!")?,
        Some(MoveOutcome::Lose) => {
            writeln!(out, "Boom! That was a mine.")?;
            write!(out, "{}", board.truth())?;
        }
        _ => {}
    }
    Ok(())
}

/// Applies commands from `input` until the game is decided, the player quits or input ends.
///
/// Returns the deciding outcome, if any.
fn play(
    board: &mut MineBoard,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<Option<MoveOutcome>> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{:#}", err)?;
                continue;
            }
        };
        log::debug!("command: {:?}", command);

        let result = match command {
            Command::Open(x, y) => board.open(x, y),
            Command::Flag(x, y) => board.flag(x, y),
            Command::Print => {
                write!(out, "{}", board.player())?;
                continue;
            }
            Command::Reveal => {
                write!(out, "{}", board.truth())?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => return Ok(None),
        };

        match result {
            Ok(outcome) if outcome.is_final() => return Ok(Some(outcome)),
            Ok(_) => {
                write!(out, "{}", board.player())?;
                writeln!(out, "mines remaining: {}", board.mines_remaining())?;
            }
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
    Ok(None)
}

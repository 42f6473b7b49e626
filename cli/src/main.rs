use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::{
    cell::Cell,
    io::{self, BufRead, Write},
    path::PathBuf,
    rc::Rc,
};
use sweeper_core::{CellCount, Coord, GameSession, GameState, Turn, start_new_game};

use input::{Command, parse_command};
use render::Screen;
use settings::Settings;

mod input;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Reveal every safe cell without touching a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with `rows`, `cols` and `mines`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every turn as JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = file_settings.merge(Settings {
        rows: args.rows,
        cols: args.cols,
        mines: args.mines,
    })?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let mut session = start_new_game(config, &mut SmallRng::seed_from_u64(seed))
        .context("Could not start a game")?;

    let banner = Rc::new(Cell::new(GameState::Playing.banner()));
    {
        let banner = banner.clone();
        session.on_win(move || banner.set(GameState::Won.banner()));
    }
    {
        let banner = banner.clone();
        session.on_lose(move || banner.set(GameState::Lost.banner()));
    }

    play(&mut session, &banner, args.json, io::stdin().lock(), io::stdout().lock())
}

fn play(
    session: &mut GameSession,
    banner: &Cell<&'static str>,
    json: bool,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let (rows, cols) = session.board().size();
    if json {
        serde_json::to_writer(&mut output, session.board()).context("Could not encode board")?;
        writeln!(output)?;
    } else {
        let screen = Screen {
            banner: banner.get(),
            board: session.board(),
        };
        write!(output, "{screen}")?;
    }

    for line in input.lines() {
        let line = line.context("Could not read a move")?;
        let index = match parse_command(&line, rows, cols) {
            Ok(Command::Reveal(index)) => index,
            Ok(Command::Skip) => continue,
            Ok(Command::Quit) => break,
            Err(message) => {
                writeln!(output, "{message}")?;
                continue;
            }
        };

        let turn = match session.reveal_cell(index) {
            Ok(turn) => turn,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        log::debug!("move {} -> {:?}", index, turn.outcome);

        if json {
            print_json(&mut output, &turn)?;
        } else {
            let screen = Screen {
                banner: banner.get(),
                board: turn.board,
            };
            write!(output, "{screen}")?;
        }

        if turn.state.is_finished() {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

fn print_json(output: &mut impl Write, turn: &Turn<'_>) -> Result<()> {
    serde_json::to_writer(&mut *output, turn).context("Could not encode turn")?;
    writeln!(output)?;
    Ok(())
}

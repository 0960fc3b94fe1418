//! Terminal runner (default binary).
//!
//! Blocks on one input event at a time; the board only changes in response
//! to a key, so there is no tick loop.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_round::core::{Dice, Round, Stamp, TileBook};
use tui_round::input::{describe_key, handle_key_event, should_quit};
use tui_round::log::{LogConfig, LogGuard};
use tui_round::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

#[derive(Debug, Parser)]
#[command(name = "tui-round", version, about = "Lay track tiles on a 6x6 board")]
struct Cli {
    /// Print every tile in the book and the seed before starting
    #[arg(short, long)]
    notes: bool,

    /// Fixed random seed; replays the same sequence of tiles
    #[arg(long)]
    seed: Option<u64>,

    /// Log file, or directory for it
    #[arg(long, env = "ROUND_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log = init_logging(cli.log_file.clone());

    let book = TileBook::standard()?;
    if cli.notes {
        print_notes(&book, cli.seed);
    }

    let dice = match cli.seed {
        Some(seed) => Dice::seeded(seed),
        None => Dice::from_entropy(),
    };
    let round = Round::new(book, dice);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, round);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "session ended with an error");
    }
    result
}

/// Logging is optional; the game runs without it.
fn init_logging(log_file_path: Option<PathBuf>) -> Option<LogGuard> {
    match tui_round::log::init(LogConfig { log_file_path }) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    }
}

fn print_notes(book: &TileBook, seed: Option<u64>) {
    match seed {
        Some(seed) => println!("seed: {seed}"),
        None => println!("seed: os entropy"),
    }
    for (id, map) in book.iter() {
        println!("tile {id}:");
        for row in Stamp::render(map, id).rows() {
            println!("  |{row}|");
        }
    }
}

fn run(term: &mut TerminalRenderer, mut round: Round) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_key = String::new();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&round, &last_key, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    tracing::info!(placed = round.city().occupied(), "quit");
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(action) => {
                        round.apply_action(action);
                        last_key.clear();
                    }
                    None => {
                        last_key = describe_key(key);
                        tracing::debug!(key = %last_key, "unmapped key");
                    }
                }
            }
            Event::Resize(w, h) => {
                tracing::debug!(w, h, "terminal resized");
                term.invalidate();
            }
            _ => {}
        }
    }
}

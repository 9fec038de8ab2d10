//! Cats-Game: tic-tac-toe for two players at one terminal.
//!
//! ## Usage
//!
//! - `cats-game` - Play a game on stdin/stdout
//! - `cats-game play --one-based` - Number the cells 1-9 instead of 0-8
//! - `cats-game demo --seed 7` - Watch a game of random moves

use std::io::{self, Write};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use cats_game::console::{Console, ConsoleOptions};
use cats_game::game::{Game, Labels};
use cats_game::playout::random_game;

/// Cats-Game: two-player tic-tac-toe on the console
#[derive(Parser)]
#[command(name = "cats-game")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, reading one cell number per turn from stdin
    Play(LabelArgs),
    /// Play out a game of random moves and print every position
    Demo {
        /// Seed for the move generator (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        labels: LabelArgs,
    },
}

#[derive(Args, Default)]
struct LabelArgs {
    /// Number cells 1-9 instead of 0-8
    #[arg(long)]
    one_based: bool,
}

impl LabelArgs {
    fn labels(&self) -> Labels {
        if self.one_based {
            Labels::OneBased
        } else {
            Labels::ZeroBased
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => run_game(args.labels()),
        None => run_game(Labels::default()),
        Some(Commands::Demo { seed, labels }) => {
            run_demo(seed.unwrap_or_else(|| fastrand::u64(..)), labels.labels())
        }
    }
}

fn run_game(labels: Labels) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new();
    Console::new(stdin.lock(), stdout.lock(), ConsoleOptions { labels }).run(&mut game)?;
    Ok(())
}

fn run_demo(seed: u64, labels: Labels) -> Result<()> {
    log::info!("demo seed {seed}");
    let result = random_game(seed);
    let mut stdout = io::stdout().lock();

    let mut replay = Game::new();
    writeln!(stdout, "{}", replay.render(labels))?;
    for &pt in &result.moves {
        writeln!(stdout, "\n{}: {}", replay.to_move(), labels.label(pt))?;
        replay.play(pt);
        writeln!(stdout, "{}", replay.render(labels))?;
    }
    writeln!(stdout, "\n{}", result.state)?;
    Ok(())
}

//! Text console front end.
//!
//! Prompts the player to move, reads one cell number per turn, feeds it to
//! the [`Game`] and echoes the board after every attempt. Input that is not a
//! number never reaches the game; the same player is simply asked again.
//!
//! The loop is generic over its input and output so it can run against
//! stdin/stdout or an in-memory transcript.
//!
//! ## Example
//!
//! ```
//! use cats_game::console::{Console, ConsoleOptions};
//! use cats_game::game::{Game, State};
//!
//! let input: &[u8] = b"0 1 3 4 6\n";
//! let mut output = Vec::new();
//! let mut game = Game::new();
//! let state = Console::new(input, &mut output, ConsoleOptions::default())
//!     .run(&mut game)
//!     .unwrap();
//! assert_eq!(state, State::Player1Won);
//! ```

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use anyhow::{Context, Result};
use log::warn;

use crate::game::{Game, Labels, State};

/// Input that could not be turned into a cell label.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    #[display("Invalid input \"{token}\": {source}")]
    NotANumber { token: String, source: ParseIntError },
}

/// Parses one typed token as a cell label.
pub fn parse_label(token: &str) -> Result<usize, InputError> {
    token.parse::<usize>().map_err(|source| InputError::NotANumber {
        token: token.to_string(),
        source,
    })
}

/// Settings for the console loop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Numbering used for empty cells and typed positions
    pub labels: Labels,
}

/// Prompt loop over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
    /// Tokens read but not yet consumed
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
            pending: VecDeque::new(),
        }
    }

    /// Plays `game` until a terminal state and returns it.
    ///
    /// # Errors
    /// Fails when reading or writing fails, or when the input ends before
    /// the game does.
    pub fn run(&mut self, game: &mut Game) -> Result<State> {
        let labels = self.options.labels;
        writeln!(self.output, "{}", game.render(labels))?;

        loop {
            write!(self.output, "\n{}: ", game.to_move())?;
            self.output.flush()?;

            let token = self
                .next_token()
                .context("reading input")?
                .context("input closed before the game ended")?;

            let label = match parse_label(&token) {
                Ok(label) => label,
                Err(err) => {
                    warn!("{err}");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            let state = game.play(labels.position(label));
            match state {
                State::InvalidTurn => {
                    write!(self.output, "Position \"{label}\" does not exist")?
                }
                State::NoSpace => {
                    write!(self.output, "Position \"{label}\" is already taken")?
                }
                _ => {}
            }
            writeln!(self.output, "{}", game.render(labels))?;

            if state.is_terminal() {
                writeln!(self.output, "\n{state}")?;
                self.output.flush()?;
                return Ok(state);
            }
        }
    }

    /// Next whitespace-separated token, reading more lines as needed.
    /// Returns `None` at end of input. Bytes that are not UTF-8 are replaced,
    /// so such a token fails to parse instead of ending the game.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

//! Cats-Game: tic-tac-toe on the console.
//!
//! Each player's marks are kept as a 9-bit mask, and a move is checked
//! against the 8 winning lines with a single AND per line.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and winning line masks
//! - [`board`] - One player's marks as a bitmask
//! - [`game`] - Turn handling, outcome detection and rendering
//! - [`console`] - Prompt loop over any reader and writer
//! - [`playout`] - Random games for the demo and for testing
//!
//! ## Example
//!
//! ```
//! use cats_game::game::{Game, State};
//!
//! let mut game = Game::new();
//! for pt in [0, 1, 3, 4] {
//!     assert_eq!(game.play(pt), State::Continue);
//! }
//! assert_eq!(game.play(6), State::Player1Won);
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod playout;

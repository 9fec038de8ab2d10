//! Game controller: turn handling and outcome detection.
//!
//! A [`Game`] holds one [`Board`] per player and a turn flag. Moves go
//! through [`Game::play`], which either rejects the position without touching
//! anything or places a mark, passes the turn and reports the outcome.
//!
//! Positions are zero-based cell numbers, laid out as:
//!
//! ```text
//!  0  |  1  |  2
//!  3  |  4  |  5
//!  6  |  7  |  8
//! ```

use std::fmt;

use log::{debug, info, trace};

use crate::board::Board;
use crate::constants::{CELLS, MARK_PLAYER1, MARK_PLAYER2, N};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    #[display("Player 1")]
    One,
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::One => MARK_PLAYER1,
            Player::Two => MARK_PLAYER2,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Result of a call to [`Game::play`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum State {
    /// Move accepted, game goes on
    #[display("Continue")]
    Continue,
    /// Player 1 completed a line
    #[display("Player 1 won!")]
    Player1Won,
    /// Player 2 completed a line
    #[display("Player 2 won!")]
    Player2Won,
    /// Board filled without a line
    #[display("Draw!")]
    Draw,
    /// Position is not one of the 9 cells
    #[display("Invalid position")]
    InvalidTurn,
    /// Position is already taken
    #[display("Position taken")]
    NoSpace,
}

impl State {
    /// True for states that end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Player1Won | State::Player2Won | State::Draw)
    }

    /// True for states where the move was refused and the turn did not pass.
    pub fn is_rejected(self) -> bool {
        matches!(self, State::InvalidTurn | State::NoSpace)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            State::Player1Won => Some(Player::One),
            State::Player2Won => Some(Player::Two),
            _ => None,
        }
    }
}

/// How empty cells are numbered on screen and at the prompt.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Labels {
    /// Cells are labelled 0-8, matching positions.
    #[default]
    ZeroBased,
    /// Cells are labelled 1-9.
    OneBased,
}

impl Labels {
    /// Label shown for `cell`.
    pub fn label(self, cell: usize) -> usize {
        match self {
            Labels::ZeroBased => cell,
            Labels::OneBased => cell + 1,
        }
    }

    /// Position for a typed label. Labels with no cell map to an out-of-range
    /// position so [`Game::play`] reports them as invalid.
    pub fn position(self, label: usize) -> usize {
        match self {
            Labels::ZeroBased => label,
            Labels::OneBased => label.checked_sub(1).unwrap_or(usize::MAX),
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    /// True when player 2 moves next
    turn: bool,
    player1: Board,
    player2: Board,
}

impl Game {
    /// New game with empty boards and player 1 to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when player 1 moves next.
    pub fn turn(&self) -> bool {
        !self.turn
    }

    pub fn to_move(&self) -> Player {
        if self.turn() { Player::One } else { Player::Two }
    }

    pub fn player1(&self) -> Board {
        self.player1
    }

    pub fn player2(&self) -> Board {
        self.player2
    }

    /// Cells taken by either player.
    pub fn occupied(&self) -> Board {
        self.player1.union(self.player2)
    }

    pub fn moves_played(&self) -> usize {
        self.occupied().len()
    }

    /// Free cells in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        let occupied = self.occupied();
        (0..CELLS).filter(|&c| !occupied.contains(c)).collect()
    }

    /// Plays `position` for the player to move.
    ///
    /// Rejected moves ([`State::InvalidTurn`], [`State::NoSpace`]) leave the
    /// game untouched. Otherwise the mark is placed, the turn passes, and the
    /// outcome is judged for the mover only: a completed line wins, a full
    /// board draws.
    pub fn play(&mut self, position: usize) -> State {
        let mover = self.to_move();
        let Some(marked) = self.board(mover).with(position) else {
            trace!("rejected position {position}: out of range");
            return State::InvalidTurn;
        };

        if self.occupied().contains(position) {
            trace!("rejected position {position}: already taken");
            return State::NoSpace;
        }

        match mover {
            Player::One => self.player1 = marked,
            Player::Two => self.player2 = marked,
        }
        self.turn = !self.turn;
        debug!("{mover} played {position}, {} to move", mover.opponent());

        let state = if let Some(line) = marked.completed_line() {
            debug!("{mover} completed line {line:09b}");
            match mover {
                Player::One => State::Player1Won,
                Player::Two => State::Player2Won,
            }
        } else if self.occupied().is_full() {
            State::Draw
        } else {
            State::Continue
        };

        if state.is_terminal() {
            info!("game over after {} moves: {state}", self.moves_played());
        }
        state
    }

    /// Board of `player`.
    pub fn board(&self, player: Player) -> Board {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Clears both boards. Whoever was due to move still moves next.
    pub fn reset(&mut self) {
        if !self.occupied().is_empty() {
            debug!("board cleared, {} to move", self.to_move());
        }
        self.player1 = Board::empty();
        self.player2 = Board::empty();
    }

    /// Character shown for `cell`: a mark, or its label when empty.
    fn cell_text(&self, cell: usize, labels: Labels) -> String {
        if self.player1.contains(cell) {
            Player::One.mark().to_string()
        } else if self.player2.contains(cell) {
            Player::Two.mark().to_string()
        } else {
            labels.label(cell).to_string()
        }
    }

    /// Renders the grid with the given label numbering.
    pub fn render(&self, labels: Labels) -> String {
        let mut out = String::new();
        for cell in 0..CELLS {
            if cell % N == 0 {
                out.push('\n');
            }
            out.push_str(&format!("  {}  ", self.cell_text(cell, labels)));
        }
        out
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Labels::ZeroBased))
    }
}

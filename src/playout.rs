//! Random playouts.
//!
//! A playout picks a free cell uniformly at random for whoever is to move,
//! until the game ends. Used by the `demo` command and in tests to drive the
//! controller through many different games.

use crate::game::{Game, State};

/// Plays random free cells until a terminal state and returns it.
///
/// Returns [`State::Continue`] only if `game` has no free cell to begin with,
/// which a game that has not ended never does.
pub fn playout(game: &mut Game, rng: &mut fastrand::Rng) -> State {
    play_random(game, rng, &mut Vec::new())
}

fn play_random(game: &mut Game, rng: &mut fastrand::Rng, moves: &mut Vec<usize>) -> State {
    let mut state = State::Continue;
    while !state.is_terminal() {
        let free = game.legal_moves();
        if free.is_empty() {
            break;
        }
        let pt = free[rng.usize(..free.len())];
        state = game.play(pt);
        moves.push(pt);
    }
    state
}

/// A finished random game.
#[derive(Clone, Debug)]
pub struct RandomGame {
    pub game: Game,
    pub state: State,
    /// Cells in the order they were played
    pub moves: Vec<usize>,
}

/// Plays a whole random game from an empty board with a seeded generator.
pub fn random_game(seed: u64) -> RandomGame {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = Game::new();
    let mut moves = Vec::new();
    let state = play_random(&mut game, &mut rng, &mut moves);
    RandomGame { game, state, moves }
}

//! Integration tests for cats-game
//!
//! Whole games played through the public API and through the console loop.

use cats_game::console::{Console, ConsoleOptions};
use cats_game::constants::LINES;
use cats_game::game::{Game, Labels, Player, State};

// =============================================================================
// Helper functions
// =============================================================================

/// Play a sequence of positions and return the state after the last one.
fn play_moves(game: &mut Game, moves: &[usize]) -> State {
    let mut state = State::Continue;
    for &mv in moves {
        state = game.play(mv);
    }
    state
}

/// Cells of a line mask in ascending order.
fn line_cells(line: u16) -> Vec<usize> {
    (0..9).filter(|&c| line & (1 << c) != 0).collect()
}

/// True when the cells hold one of the winning lines.
fn forms_line(cells: &[usize]) -> bool {
    let mask = cells.iter().fold(0u16, |m, &c| m | (1 << c));
    LINES.iter().any(|&line| mask & line == line)
}

/// Build a move list where `winner` takes the three cells of `line` and the
/// opponent fills cells outside it without forming a line of their own.
fn moves_for_line(line: u16, winner: Player) -> Vec<usize> {
    let cells = line_cells(line);
    let mut filler: Vec<usize> = Vec::new();
    for c in (0..9).filter(|c| !cells.contains(c)) {
        if filler.len() == 3 {
            break;
        }
        filler.push(c);
        if forms_line(&filler) {
            filler.pop();
        }
    }

    let mut moves = Vec::new();
    match winner {
        Player::One => {
            for i in 0..3 {
                moves.push(cells[i]);
                if i < 2 {
                    moves.push(filler[i]);
                }
            }
        }
        Player::Two => {
            for i in 0..3 {
                moves.push(filler[i]);
                moves.push(cells[i]);
            }
        }
    }
    moves
}

// =============================================================================
// Outcome tests
// =============================================================================

#[test]
fn test_column_example() {
    let mut game = Game::new();
    let state = play_moves(&mut game, &[0, 1, 3, 4, 6]);
    assert_eq!(state, State::Player1Won);
    assert_eq!(game.player1().cells().collect::<Vec<_>>(), vec![0, 3, 6]);
    assert_eq!(game.player2().cells().collect::<Vec<_>>(), vec![1, 4]);
}

#[test]
fn test_draw_example() {
    let mut game = Game::new();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for (i, &mv) in moves.iter().enumerate() {
        let state = game.play(mv);
        if i < 8 {
            assert_eq!(state, State::Continue, "move {i} ({mv})");
        } else {
            assert_eq!(state, State::Draw);
        }
    }
}

#[test]
fn test_every_line_wins_for_player1() {
    for line in LINES {
        let moves = moves_for_line(line, Player::One);
        let mut game = Game::new();
        let (last, rest) = moves.split_last().unwrap();
        assert_eq!(play_moves(&mut game, rest), State::Continue);
        assert_eq!(game.play(*last), State::Player1Won, "line {line:#011b}");
    }
}

#[test]
fn test_every_line_wins_for_player2() {
    for line in LINES {
        let moves = moves_for_line(line, Player::Two);
        let mut game = Game::new();
        let (last, rest) = moves.split_last().unwrap();
        assert_eq!(play_moves(&mut game, rest), State::Continue);
        assert_eq!(game.play(*last), State::Player2Won, "line {line:#011b}");
    }
}

#[test]
fn test_rejected_moves_keep_turn() {
    let mut game = Game::new();
    assert_eq!(game.play(4), State::Continue);
    assert_eq!(game.to_move(), Player::Two);

    assert_eq!(game.play(4), State::NoSpace);
    assert_eq!(game.play(10), State::InvalidTurn);
    assert_eq!(game.to_move(), Player::Two);

    assert_eq!(game.play(0), State::Continue);
    assert_eq!(game.to_move(), Player::One);
}

#[test]
fn test_reset_mid_game() {
    let mut game = Game::new();
    play_moves(&mut game, &[0, 4, 8]);
    assert_eq!(game.to_move(), Player::Two);

    game.reset();
    assert_eq!(game.moves_played(), 0);
    assert_eq!(game.to_move(), Player::Two);

    // Player 2 opens the new game.
    game.play(4);
    assert!(game.player2().contains(4));
}

#[test]
fn test_legal_moves_shrink() {
    let mut game = Game::new();
    play_moves(&mut game, &[4, 0]);
    assert_eq!(game.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
}

// =============================================================================
// Console tests
// =============================================================================

#[test]
fn test_console_transcript() {
    let input = "0\n1\n3\n4\n6\n";
    let mut output = Vec::new();
    let mut game = Game::new();
    let state = Console::new(input.as_bytes(), &mut output, ConsoleOptions::default())
        .run(&mut game)
        .unwrap();
    assert_eq!(state, State::Player1Won);

    let out = String::from_utf8(output).unwrap();
    assert!(out.starts_with("\n  0    1    2  \n"));
    assert_eq!(out.matches("\nPlayer 1: ").count(), 3);
    assert_eq!(out.matches("\nPlayer 2: ").count(), 2);
    assert!(out.contains("\n  x    o    2  \n  x    o    5  \n  x    7    8  "));
    assert!(out.ends_with("\nPlayer 1 won!\n"));
}

#[test]
fn test_console_one_based_game() {
    let input = "5 1 3 9 7";
    let mut output = Vec::new();
    let mut game = Game::new();
    let options = ConsoleOptions {
        labels: Labels::OneBased,
    };
    let state = Console::new(input.as_bytes(), &mut output, options)
        .run(&mut game)
        .unwrap();

    // Player 1 took 4, 2 and 6: the anti-diagonal.
    assert_eq!(state, State::Player1Won);
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("\n  o    2    x  \n  4    x    6  \n  x    8    o  "));
}

#[test]
fn test_console_input_ends_early() {
    let mut output = Vec::new();
    let mut game = Game::new();
    let err = Console::new(&b"4\n"[..], &mut output, ConsoleOptions::default())
        .run(&mut game)
        .unwrap_err();
    assert!(err.to_string().contains("input closed"));
    assert_eq!(game.moves_played(), 1);
}

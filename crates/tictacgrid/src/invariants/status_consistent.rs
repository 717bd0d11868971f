//! Status consistency invariant: the status matches the board.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: The recorded status agrees with a full scan of the board.
///
/// An in-progress board has no completed line and at least one empty
/// cell, a won board has a line for exactly the recorded winner, and a
/// drawn board is full with no line at all.
pub struct StatusConsistentInvariant;

impl Invariant<Game> for StatusConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress => {
                rules::winner(board).is_none() && !rules::is_full(board)
            }
            GameStatus::Won(mark) => rules::winner(board) == Some(*mark),
            GameStatus::Draw => rules::is_full(board) && rules::winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Recorded status matches a full scan of the board"
    }
}

//! Turn parity invariant: marks alternate O, X, O, X, ...

use super::Invariant;
use crate::game::Game;
use crate::types::{GameStatus, Mark};

/// Invariant: Mark counts and the turn follow strict alternation.
///
/// The opening mark is always [`Mark::FIRST`], so the first mark's
/// count equals the second's or exceeds it by exactly one. While the
/// game is in progress the turn is determined by the placement count;
/// once it ends the turn stays frozen on whoever placed last.
pub struct TurnParityInvariant;

impl TurnParityInvariant {
    /// The mark that made the most recent placement.
    ///
    /// Only meaningful when at least one mark has been placed.
    fn last_mover(placements: usize) -> Mark {
        if placements % 2 == 1 {
            Mark::FIRST
        } else {
            Mark::FIRST.opponent()
        }
    }
}

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        let placements = game.placements();
        let first = game.board().count(Mark::FIRST);
        let second = game.board().count(Mark::FIRST.opponent());

        if first + second != placements {
            return false;
        }
        if first != second && first != second + 1 {
            return false;
        }

        match game.status() {
            GameStatus::InProgress => {
                let expected = if placements % 2 == 0 {
                    Mark::FIRST
                } else {
                    Mark::FIRST.opponent()
                };
                game.turn() == expected
            }
            GameStatus::Won(winner) => {
                placements > 0
                    && *winner == Self::last_mover(placements)
                    && game.turn() == *winner
            }
            GameStatus::Draw => placements > 0 && game.turn() == Self::last_mover(placements),
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (O, X, O, X, ...) starting with O"
    }
}

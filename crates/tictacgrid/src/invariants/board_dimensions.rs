//! Board dimensions invariant: the cell vector matches the grid size.

use super::Invariant;
use crate::game::Game;
use crate::types::GridSize;

/// Invariant: The board always holds exactly N² cells for a supported N.
///
/// The grid size stays within the supported range and the backing
/// vector never grows or shrinks out of step with it.
pub struct BoardDimensionsInvariant;

impl Invariant<Game> for BoardDimensionsInvariant {
    fn holds(game: &Game) -> bool {
        let size = game.grid_size();
        let n = size.get();

        if !(GridSize::MIN..=GridSize::MAX).contains(&n) {
            return false;
        }

        game.board().cells().len() == size.cell_count()
    }

    fn description() -> &'static str {
        "Board holds exactly N*N cells for a grid size within the supported range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(BoardDimensionsInvariant::holds(&game));
    }

    #[test]
    fn test_every_supported_size_holds() {
        for n in GridSize::MIN..=GridSize::MAX {
            let game = Game::with_size(GridSize::new(n));
            assert!(BoardDimensionsInvariant::holds(&game));
        }
    }

    #[test]
    fn test_holds_after_resize_and_moves() {
        let mut game = Game::new();
        game.set_grid_size(7).unwrap();
        game.place_mark(0).unwrap();
        game.place_mark(48).unwrap();
        assert!(BoardDimensionsInvariant::holds(&game));
    }

    #[test]
    fn test_truncated_cells_violate() {
        let mut game = Game::new();
        game.board.cells_mut().truncate(5);
        assert!(!BoardDimensionsInvariant::holds(&game));
    }
}

//! Draw detection for the N×N grid.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Returns true when every cell on the board is occupied.
///
/// A full board with no winning line is a draw; the caller checks for a
/// win first, since a line completed by the final placement takes
/// precedence.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridSize, Mark};

    #[test]
    fn test_empty_board_is_not_full() {
        let board = Board::new(GridSize::new(3));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_is_not_full() {
        let mut board = Board::new(GridSize::new(3));
        for index in 0..8 {
            let mark = if index % 2 == 0 { Mark::O } else { Mark::X };
            board.set(index, Cell::Occupied(mark));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_is_full() {
        let mut board = Board::new(GridSize::new(3));
        // O X O / X O O / X O X fills the board without forming a line.
        for &index in &[0, 2, 4, 5, 7] {
            board.set(index, Cell::Occupied(Mark::O));
        }
        for &index in &[1, 3, 6, 8] {
            board.set(index, Cell::Occupied(Mark::X));
        }
        assert!(is_full(&board));
        assert_eq!(crate::rules::winner(&board), None);
    }
}

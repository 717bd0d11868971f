//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictacgrid::GridSize;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// The cursor stops at the edges of the grid; any other key leaves it
/// in place.
pub fn move_cursor(cursor: usize, size: GridSize, key: KeyCode) -> usize {
    let n = size.get();
    let (row, col) = (cursor / n, cursor % n);

    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col + 1 < n => cursor + 1,
        KeyCode::Up if row > 0 => cursor - n,
        KeyCode::Down if row + 1 < n => cursor + n,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_from_center() {
        let size = GridSize::new(3);
        assert_eq!(move_cursor(4, size, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, size, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, size, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, size, KeyCode::Down), 7);
    }

    #[test]
    fn test_stops_at_edges() {
        let size = GridSize::new(3);
        assert_eq!(move_cursor(0, size, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, size, KeyCode::Up), 0);
        assert_eq!(move_cursor(8, size, KeyCode::Right), 8);
        assert_eq!(move_cursor(8, size, KeyCode::Down), 8);
        assert_eq!(move_cursor(2, size, KeyCode::Right), 2);
        assert_eq!(move_cursor(6, size, KeyCode::Down), 6);
    }

    #[test]
    fn test_moves_on_large_grid() {
        let size = GridSize::new(10);
        assert_eq!(move_cursor(0, size, KeyCode::Down), 10);
        assert_eq!(move_cursor(55, size, KeyCode::Right), 56);
        assert_eq!(move_cursor(99, size, KeyCode::Up), 89);
        assert_eq!(move_cursor(99, size, KeyCode::Right), 99);
    }

    #[test]
    fn test_other_keys_ignored() {
        let size = GridSize::new(3);
        assert_eq!(move_cursor(4, size, KeyCode::Enter), 4);
        assert_eq!(move_cursor(4, size, KeyCode::Char('x')), 4);
    }
}

//! Win detection for the N×N grid.

use crate::types::{Board, GridSize, Mark};
use tracing::instrument;

/// Checks whether the mark at `index` completes a line.
///
/// Runs in O(N) time and O(1) space by scanning only the lines that pass
/// through the placed cell: its column, its row, the main diagonal when
/// `row == col`, and the anti-diagonal when `row + col == N-1`. An empty
/// or out-of-range `index` never completes a line.
///
/// The anti-diagonal cells are exactly those satisfying
/// `row + col == N-1`, i.e. `(i, N-1-i)` for `i` in `0..N`, which maps to
/// index `i*N + (N-1-i)`.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, index: usize) -> bool {
    let n = board.size().get();
    let Some(mark) = board.mark_at(index) else {
        return false;
    };
    let (row, col) = board.coords(index);

    // Column through the placed cell.
    if (0..n).all(|i| board.mark_at(col + i * n) == Some(mark)) {
        return true;
    }
    // Row through the placed cell.
    if (0..n).all(|i| board.mark_at(row * n + i) == Some(mark)) {
        return true;
    }
    // Main diagonal.
    if row == col && (0..n).all(|i| board.mark_at(i * n + i) == Some(mark)) {
        return true;
    }
    // Anti-diagonal.
    if row + col == n - 1 && (0..n).all(|i| board.mark_at(i * n + (n - 1 - i)) == Some(mark)) {
        return true;
    }

    false
}

/// Enumerates every line of the grid: `n` rows, `n` columns, and the two
/// main diagonals, each as the indices of its cells.
pub fn lines(size: GridSize) -> impl Iterator<Item = Vec<usize>> {
    let n = size.get();
    let rows = (0..n).map(move |row| (0..n).map(move |col| row * n + col).collect());
    let cols = (0..n).map(move |col| (0..n).map(move |row| row * n + col).collect());
    let diag = std::iter::once((0..n).map(|i| i * n + i).collect());
    let anti = std::iter::once((0..n).map(|i| i * n + (n - 1 - i)).collect());
    rows.chain(cols).chain(diag).chain(anti)
}

/// Scans all lines of the board for a winner.
///
/// Slower than [`completes_line`] but independent of placement order;
/// used by invariant checks and tests.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for line in lines(board.size()) {
        let mut marks = line.iter().map(|&index| board.mark_at(index));
        if let Some(Some(mark)) = marks.next() {
            if marks.all(|m| m == Some(mark)) {
                return Some(mark);
            }
        }
    }
    None
}

//! Core domain types for the game grid.

use serde::{Deserialize, Serialize};

/// Mark placed by one of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Player O (moves first).
    O,
    /// Player X (moves second).
    X,
}

impl Mark {
    /// The mark that opens every game.
    pub const FIRST: Mark = Mark::O;

    /// Returns the opposing player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell claimed by a player.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Occupied(mark) => Some(mark),
            Cell::Empty => None,
        }
    }
}

/// Side length of the square board.
///
/// Every construction path clamps the value into
/// [`GridSize::MIN`]`..=`[`GridSize::MAX`], so a `GridSize` in hand is
/// always valid and callers never see an out-of-range board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest supported side length.
    pub const MIN: usize = 3;
    /// Largest supported side length.
    pub const MAX: usize = 10;

    /// Creates a grid size, clamping `n` into the supported range.
    pub fn new(n: usize) -> Self {
        Self(n.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of cells on a board of this size.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<usize> for GridSize {
    fn from(n: usize) -> Self {
        Self::new(n)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> usize {
        size.get()
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Row-major N×N grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the occupying mark at `index`, or `None` when the cell is
    /// empty or out of bounds.
    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.get(index).and_then(Cell::mark)
    }

    /// Checks whether the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Splits `index` into `(row, col)` coordinates.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        let n = self.size.get();
        (index / n, index % n)
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        debug_assert!(index < self.cells.len(), "cell index out of bounds");
        self.cells[index] = cell;
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as an ASCII grid, one row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size.get();
        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * n + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game accepts placements.
    InProgress,
    /// Game ended with a winning line for the mark.
    Won(Mark),
    /// Board filled with no winning line.
    Draw,
}

impl GameStatus {
    /// Returns `true` once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// End-of-game message for the presentation layer.
    ///
    /// `None` while the game is in progress.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(format!("Player {mark} wins")),
            GameStatus::Draw => Some("Draw.".to_string()),
        }
    }
}

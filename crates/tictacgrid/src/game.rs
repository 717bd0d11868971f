//! Game engine: board, turn tracking, and status transitions.

use crate::error::{PlaceError, ResizeError};
use crate::invariants;
use crate::rules;
use crate::types::{Board, Cell, GameStatus, GridSize, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A game of tic-tac-toe on a configurable N×N grid.
///
/// Play strictly alternates between the two marks, starting with
/// [`Mark::FIRST`]. Each placement is validated against the current
/// status and board, then the status is re-evaluated from the placed
/// cell. Once the game reaches a terminal status, further placements
/// are rejected until [`Game::reset`].
///
/// ```
/// use tictacgrid::{Game, Mark};
///
/// let mut game = Game::new();
/// game.place_mark(4)?;
/// assert_eq!(game.turn(), Mark::X);
/// # Ok::<(), tictacgrid::PlaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The playing surface.
    pub(crate) board: Board,
    /// The mark to move next. Frozen on the winner once the game ends.
    pub(crate) turn: Mark,
    /// Current phase of play.
    pub(crate) status: GameStatus,
    /// Number of marks placed since the last reset.
    pub(crate) placements: usize,
}

impl Game {
    /// Creates a game on the default 3×3 grid.
    pub fn new() -> Self {
        Self::with_size(GridSize::default())
    }

    /// Creates a game on a grid of the given size.
    pub fn with_size(size: GridSize) -> Self {
        let game = Self {
            board: Board::new(size),
            turn: Mark::FIRST,
            status: GameStatus::InProgress,
            placements: 0,
        };
        invariants::assert_invariants(&game);
        game
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the current status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.board.size()
    }

    /// Returns the number of marks placed since the last reset.
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns true once at least one mark has been placed.
    ///
    /// A started game keeps its grid size until the next reset.
    pub fn has_started(&self) -> bool {
        self.placements > 0
    }

    /// Replaces the board with an empty grid of the given size.
    ///
    /// The requested size is clamped to the supported range. Resizing is
    /// only permitted before the first placement of a round; once a mark
    /// is down the grid is fixed until [`Game::reset`].
    #[instrument(skip(self))]
    pub fn set_grid_size(&mut self, size: usize) -> Result<(), ResizeError> {
        if self.has_started() {
            return Err(ResizeError::GameStarted);
        }
        let size = GridSize::new(size);
        self.board = Board::new(size);
        debug!(%size, "grid resized");
        invariants::assert_invariants(self);
        Ok(())
    }

    /// Places the current player's mark at `index`.
    ///
    /// On success the status is re-evaluated: a completed line wins the
    /// game for the placed mark, a full board without a line is a draw,
    /// and otherwise the turn passes to the opponent. The winner keeps
    /// the turn, so [`Game::turn`] names the winning mark after a win.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] when the game has ended,
    /// [`PlaceError::OutOfBounds`] when `index` is not a cell of the
    /// grid, and [`PlaceError::Occupied`] when the cell already holds a
    /// mark. The game state is unchanged on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, index: usize) -> Result<PlaceReport, PlaceError> {
        if self.status.is_terminal() {
            return Err(PlaceError::GameOver);
        }
        if index >= self.board.size().cell_count() {
            return Err(PlaceError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(PlaceError::Occupied(index));
        }

        let mark = self.turn;
        self.board.set(index, Cell::Occupied(mark));
        self.placements += 1;

        if rules::completes_line(&self.board, index) {
            self.status = GameStatus::Won(mark);
            debug!(%mark, board = %self.board, "winning line completed");
        } else if self.placements == self.board.size().cell_count() {
            self.status = GameStatus::Draw;
            debug!(board = %self.board, "board full with no winner");
        } else {
            self.turn = mark.opponent();
        }

        invariants::assert_invariants(self);
        Ok(PlaceReport::new(self.status.clone()))
    }

    /// Clears the board for a new round on the same grid size.
    ///
    /// The opening turn always returns to [`Mark::FIRST`], regardless of
    /// how the previous round ended.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.turn = Mark::FIRST;
        self.status = GameStatus::InProgress;
        self.placements = 0;
        debug!(size = %self.board.size(), "game reset");
        invariants::assert_invariants(self);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceReport {
    status: GameStatus,
    message: Option<String>,
}

impl PlaceReport {
    fn new(status: GameStatus) -> Self {
        let message = status.message();
        Self { status, message }
    }

    /// Returns the status the placement produced.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winning mark, if the placement won the game.
    pub fn mark(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Returns the end-of-game announcement, if the game ended.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new();
        assert_eq!(game.grid_size().get(), 3);
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(*game.status(), GameStatus::InProgress);
        assert_eq!(game.placements(), 0);
        assert!(!game.has_started());
    }

    #[test]
    fn test_first_mark_is_o() {
        let mut game = Game::new();
        let report = game.place_mark(4).unwrap();
        assert_eq!(game.board().mark_at(4), Some(Mark::O));
        assert_eq!(*report.status(), GameStatus::InProgress);
        assert_eq!(report.message(), None);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Mark::O);
        game.place_mark(0).unwrap();
        assert_eq!(game.turn(), Mark::X);
        game.place_mark(1).unwrap();
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        game.place_mark(0).unwrap();
        let before = game.clone();
        assert_eq!(game.place_mark(0), Err(PlaceError::Occupied(0)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(game.place_mark(9), Err(PlaceError::OutOfBounds(9)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_report_carries_message() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.place_mark(index).unwrap();
        }
        let report = game.place_mark(2).unwrap();
        assert_eq!(*report.status(), GameStatus::Won(Mark::O));
        assert_eq!(report.mark(), Some(Mark::O));
        assert_eq!(report.message(), Some("Player O wins"));
    }

    #[test]
    fn test_winner_keeps_the_turn() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).unwrap();
        }
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_placement_after_win_rejected() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.place_mark(index).unwrap();
        }
        let before = game.clone();
        assert_eq!(game.place_mark(5), Err(PlaceError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_resize_before_start() {
        let mut game = Game::new();
        game.set_grid_size(5).unwrap();
        assert_eq!(game.grid_size().get(), 5);
        assert_eq!(game.board().cells().len(), 25);
    }

    #[test]
    fn test_resize_after_start_rejected() {
        let mut game = Game::new();
        game.place_mark(0).unwrap();
        assert_eq!(game.set_grid_size(5), Err(ResizeError::GameStarted));
        assert_eq!(game.grid_size().get(), 3);
    }

    #[test]
    fn test_reset_restores_opening_turn() {
        let mut game = Game::new();
        game.place_mark(0).unwrap();
        game.place_mark(1).unwrap();
        game.reset();
        assert_eq!(game.turn(), Mark::O);
        assert_eq!(*game.status(), GameStatus::InProgress);
        assert_eq!(game.placements(), 0);
        assert!(game.board().cells().iter().all(|c| c.mark().is_none()));
    }

    #[test]
    fn test_reset_keeps_grid_size() {
        let mut game = Game::with_size(GridSize::new(6));
        game.place_mark(0).unwrap();
        game.reset();
        assert_eq!(game.grid_size().get(), 6);
    }
}

//! Error types for engine operations.
//!
//! Every rejection is a pure no-op: when an operation returns an error,
//! the board, the turn, and the status are exactly as they were before
//! the call.

/// Reasons a placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The index lies outside the current board.
    #[display("cell {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already ended.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// Reasons a grid-size change is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ResizeError {
    /// At least one mark has been placed in the current game.
    #[display("the grid is fixed once a mark has been placed")]
    GameStarted,
}

impl std::error::Error for ResizeError {}

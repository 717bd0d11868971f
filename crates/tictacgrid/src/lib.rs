//! Tictacgrid library - tic-tac-toe on configurable N×N grids
//!
//! This library provides the complete game logic for two-player
//! tic-tac-toe on square grids from 3×3 up to 10×10.
//!
//! # Architecture
//!
//! - **Game**: Mutable engine enforcing alternation, placement, and reset
//! - **Rules**: Pure win and draw evaluation over a board
//! - **Invariants**: First-class, independently testable state guarantees
//!
//! # Example
//!
//! ```
//! use tictacgrid::{Game, GameStatus, Mark};
//!
//! let mut game = Game::new();
//!
//! // O opens; a move down the top row while X fills the middle row.
//! for index in [0, 3, 1, 4] {
//!     game.place_mark(index)?;
//! }
//! let report = game.place_mark(2)?;
//!
//! assert_eq!(*report.status(), GameStatus::Won(Mark::O));
//! assert_eq!(report.message(), Some("Player O wins"));
//! # Ok::<(), tictacgrid::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod kani_support;
mod types;

// Public module declarations
pub mod invariants;
pub mod rules;

// Crate-level exports - Errors
pub use error::{PlaceError, ResizeError};

// Crate-level exports - Game engine
pub use game::{Game, PlaceReport};

// Crate-level exports - Core types
pub use types::{Board, Cell, GameStatus, GridSize, Mark};

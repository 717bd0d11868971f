//! Pure evaluation rules for the N×N grid.
//!
//! These functions judge a board without owning it, so they can be
//! exercised directly by tests and invariant checks and composed by the
//! engine. The engine's hot path uses [`completes_line`], which inspects
//! only the lines through a single placed cell; [`winner`] and
//! [`is_full`] scan the whole board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completes_line, lines, winner};

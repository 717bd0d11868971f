//! Kani arbitrary implementations for the core types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use crate::types::{Cell, GridSize, Mark};

#[cfg(kani)]
impl kani::Arbitrary for Mark {
    fn any() -> Self {
        if kani::any() {
            Mark::O
        } else {
            Mark::X
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GridSize {
    fn any() -> Self {
        // Clamping makes every raw usize a valid size.
        GridSize::new(kani::any())
    }
}

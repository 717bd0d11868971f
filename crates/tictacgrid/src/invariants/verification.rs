//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::invariants::{GameInvariants, InvariantSet};
    use crate::types::{GameStatus, GridSize, Mark};
    use crate::Game;

    /// Verify GridSize clamps every raw value into the supported range.
    ///
    /// Proves: No usize can construct an out-of-range grid size.
    #[kani::proof]
    fn verify_grid_size_always_in_range() {
        let n: usize = kani::any();
        let size = GridSize::new(n);
        assert!(
            (GridSize::MIN..=GridSize::MAX).contains(&size.get()),
            "GridSize outside supported range"
        );
    }

    /// Verify opponent() is an involution.
    ///
    /// Proves: Flipping the turn twice always returns to the same mark.
    #[kani::proof]
    fn verify_opponent_involution() {
        let mark: Mark = kani::any();
        assert!(mark.opponent().opponent() == mark, "opponent not an involution");
    }

    /// Verify a fresh game satisfies every invariant on any grid size.
    #[kani::proof]
    #[kani::unwind(101)]
    fn verify_new_game_satisfies_invariants() {
        let size: GridSize = kani::any();
        let game = Game::with_size(size);
        assert!(
            GameInvariants::check_all(&game).is_ok(),
            "invariant violated on fresh game"
        );
    }

    /// Verify the opening placement always succeeds and never ends the game.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_first_placement_stays_in_progress() {
        let mut game = Game::new();
        let index: usize = kani::any();
        kani::assume(index < 9);

        let report = game.place_mark(index);
        assert!(report.is_ok(), "opening placement rejected");
        assert!(
            *game.status() == GameStatus::InProgress,
            "single mark ended the game"
        );
        assert!(game.turn() == Mark::X, "turn did not pass to the opponent");
    }
}

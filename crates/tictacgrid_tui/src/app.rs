//! Application state and logic.

use crossterm::event::KeyCode;
use tictacgrid::{Game, GridSize, Mark};
use tracing::debug;

use crate::input;

fn opening_prompt() -> String {
    format!(
        "Player {}'s turn. Arrows move, Enter places a mark.",
        Mark::FIRST
    )
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: usize,
    status_message: String,
}

impl App {
    /// Creates a new application on a grid of the requested size.
    pub fn new(grid_size: usize) -> Self {
        Self {
            game: Game::with_size(GridSize::new(grid_size)),
            cursor: 0,
            status_message: opening_prompt(),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Routes a key press to the matching action.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, self.game.grid_size(), key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize(1),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize(-1),
            _ => {}
        }
    }

    /// Places the current player's mark at the cursor.
    fn place(&mut self) {
        debug!(cursor = self.cursor, "Placing mark");

        match self.game.place_mark(self.cursor) {
            Ok(report) => {
                self.status_message = match report.message() {
                    Some(msg) => msg.to_string(),
                    None => format!("Player {}'s turn", self.game.turn()),
                };
            }
            Err(e) => {
                self.status_message = format!("Invalid move: {}. Try again.", e);
            }
        }
    }

    /// Grows or shrinks the grid by one, within the supported range.
    fn resize(&mut self, delta: isize) {
        let requested = self.game.grid_size().get().saturating_add_signed(delta);

        match self.game.set_grid_size(requested) {
            Ok(()) => {
                self.cursor = 0;
                self.status_message = format!("Grid is now {}.", self.game.grid_size());
            }
            Err(e) => {
                self.status_message = format!("Cannot resize: {}.", e);
            }
        }
    }

    /// Restarts the game on the current grid size.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = 0;
        self.status_message = opening_prompt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictacgrid::GameStatus;

    #[test]
    fn test_new_app_prompts_first_player() {
        let app = App::new(3);
        assert!(app.status_message().starts_with("Player O's turn"));
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_place_advances_the_prompt() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.game().board().mark_at(0), Some(Mark::O));
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_win_shows_canonical_message() {
        let mut app = App::new(3);

        // O claims the top row; X answers in the middle row.
        let keys = [
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
        ];
        for key in keys {
            app.handle_key(key);
        }

        assert_eq!(*app.game().status(), GameStatus::Won(Mark::O));
        assert_eq!(app.status_message(), "Player O wins");
    }

    #[test]
    fn test_invalid_move_reported() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);

        assert!(app.status_message().starts_with("Invalid move:"));
        assert_eq!(app.game().placements(), 1);
    }

    #[test]
    fn test_restart_clears_the_round() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);

        app.handle_key(KeyCode::Char('r'));

        assert_eq!(app.game().placements(), 0);
        assert_eq!(app.cursor(), 0);
        assert!(app.status_message().starts_with("Player O's turn"));
    }

    #[test]
    fn test_resize_before_start() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Char('+'));

        assert_eq!(app.game().grid_size().get(), 4);
        assert_eq!(app.status_message(), "Grid is now 4x4.");
    }

    #[test]
    fn test_resize_rejected_once_started() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('+'));

        assert_eq!(app.game().grid_size().get(), 3);
        assert!(app.status_message().starts_with("Cannot resize:"));
    }

    #[test]
    fn test_resize_clamps_at_the_bounds() {
        let mut app = App::new(3);
        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.game().grid_size().get(), 3);

        let mut app = App::new(10);
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.game().grid_size().get(), 10);
    }

    #[test]
    fn test_cursor_resets_after_resize() {
        let mut app = App::new(5);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.cursor(), 6);

        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.game().grid_size().get(), 4);
    }
}

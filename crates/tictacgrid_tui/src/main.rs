//! Terminal UI for Tictacgrid

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::info;

use app::App;

/// Tictacgrid - tic-tac-toe on configurable N×N grids
#[derive(Parser, Debug)]
#[command(name = "tictacgrid_tui")]
#[command(about = "Terminal tic-tac-toe for two players", long_about = None)]
#[command(version)]
struct Cli {
    /// Grid size (clamped to the supported 3-10 range)
    #[arg(short, long, default_value = "3")]
    grid_size: usize,

    /// Log file path
    #[arg(long, default_value = "tictacgrid_tui.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(grid_size = cli.grid_size, "Starting Tictacgrid TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(cli.grid_size);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("User quit");
                        return Ok(());
                    }
                    code => app.handle_key(code),
                }
            }
        }
    }
}

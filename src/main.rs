// Sticky Tabs
// Product catalog TUI with a sticky, auto-scrolling category tab strip

// MODULES ------------------>>

mod config;
mod config_validation;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config_validation::load_and_validate_config;
use sticky_tabs::core::app_config::LoggingSettings;
use sticky_tabs::ui::run_app;
use sticky_tabs::{App, AppConfig};

//--------------------------------------------------------<<

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    // Load and validate configuration; fall back to compiled defaults
    let (app_config, config_error) = match load_and_validate_config(None) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&app_config.logging)?;

    if let Some(e) = config_error {
        eprintln!("Warning: {}", e);
        eprintln!("Using default configuration");
        warn!(error = %e, "configuration rejected, using defaults");
    }

    let mut app = App::new(app_config);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("terminal initialised");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal, even when the loop failed; every step runs
    let restored = restore_terminal(&mut terminal);

    loop_outcome(result, restored)
}

/// The loop's own error wins over a failed restore
fn loop_outcome(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let (Err(_), Err(e)) = (&result, &restored) {
        warn!(error = %e, "terminal restore failed after loop error");
    }
    result.and(restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw_mode = disable_raw_mode();
    let screen = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let cursor = terminal.show_cursor();

    raw_mode.context("failed to disable raw mode")?;
    screen.context("failed to leave alternate screen")?;
    cursor.context("failed to show cursor")?;
    Ok(())
}

/// Log to the configured file; the terminal belongs to the UI. No file, no logging.
fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let Some(path) = &settings.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sticky_tabs={}", settings.level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

//! Owners TUI: browse a component tree and inspect owner chains.
//!
//! Enter on a component opens its owners stack in the top bar; the bar
//! collapses behind a dropdown toggle when the chain is wider than the
//! terminal.

use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use owners_core::Store;
use owners_tui::app::AppState;
use owners_tui::{config, input, sample_data, ui};

#[derive(Parser)]
#[command(name = "owners-tui", about = "Component inspector with an owners-stack bar")]
struct Args {
    /// JSON fixture with an `elements` array. Defaults to a built-in sample tree.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Bar config (TOML). Defaults to <config dir>/owners-stack/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here. The terminal is owned by the UI, so nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        let level = if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let store = match &args.fixture {
        Some(path) => Store::load(path)
            .with_context(|| format!("failed to load fixture {}", path.display()))?,
        None => sample_data::sample_store()?,
    };
    for problem in store.validate() {
        warn!(%problem, "fixture problem");
    }

    let bar_config = match args.config.clone().or_else(config::default_path) {
        Some(path) => config::load(&path)?,
        None => config::BarConfig::default(),
    };
    info!(elements = store.len(), ?bar_config, "starting");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stderr(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        default_hook(info);
    }));

    let mut app = AppState::new(store, bar_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;
        let event = event::read()?;
        input::handle_event(app, &event);
    }
    info!("quit");
    Ok(())
}

mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TimelogConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use timelog::{store::DEFAULT_KEY, FileStore, MemoryStore, Store, Tracker};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TimelogConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let store = FileStore::new(config.data_dir()?, DEFAULT_KEY);
            run_tui(Arc::new(store), &config).await
        }
        Commands::Dev => run_tui(Arc::new(MemoryStore::new()), &config).await,
        Commands::Print => {
            let store = FileStore::new(config.data_dir()?, DEFAULT_KEY);
            let tracker = Tracker::new(Arc::new(store));
            tracker.load();
            println!("{}", tracker.view().to_text());
            Ok(())
        }
        Commands::Clear => {
            let store = FileStore::new(config.data_dir()?, DEFAULT_KEY);
            store
                .clear()
                .with_context(|| format!("Failed to remove {}", store.path().display()))?;
            println!("Removed {}", store.path().display());
            Ok(())
        }
        Commands::ConfigPath => {
            let path = TimelogConfig::config_path()?;
            if !path.exists() {
                TimelogConfig::default().save_to(&path)?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(store: Arc<dyn Store>, config: &TimelogConfig) -> Result<()> {
    let _log_guard = logging::init(&config.data_dir()?, &config.log_filter)
        .context("Failed to set up logging")?;

    let tracker = Tracker::new(store);
    tracker.load();
    let autosave = tracker.spawn_autosave(config.autosave_interval());
    tracing::info!(interval = ?config.autosave_interval(), "Autosave started");

    let mut app = App::new(tracker);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Final save happens in stop().
    autosave.stop().await;

    if let Err(err) = res {
        tracing::error!("Event loop failed: {:?}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

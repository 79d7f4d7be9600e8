//! artgrid - browse the Art Institute of Chicago artworks catalog from the
//! terminal.
//!
//! Pages of artworks are shown in a table whose rows can be selected across
//! pages, one at a time, a page at a time, or the first N of a page.

mod api;
mod app;
mod config;
mod error;
mod events;
mod logging;
mod model;
mod tasks;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use crate::api::ArticClient;
use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::tasks::{create_task_channel, ApiMessage, TaskSpawner};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "artgrid", version, about = "Browse and select artworks from the Art Institute of Chicago")]
struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog API base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "N")]
    timeout_secs: Option<u64>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    fn load_config(&self) -> error::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.source.timeout_secs = timeout_secs;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging failures are not fatal; the UI works without a log file
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let (config, client) = match cli.load_config().and_then(|config| {
        let client = ArticClient::new(&config.source)?;
        Ok((config, client))
    }) {
        Ok(pair) => pair,
        Err(e) => {
            error!(error = %e, "Startup failed");
            eprintln!("{}", e.full_message());
            std::process::exit(1);
        }
    };

    info!(base_url = client.base_url(), "artgrid starting");

    let (rx, spawner) = create_task_channel();
    let mut app = App::new(config);
    let handler = EventHandler::from_settings(&app.config().settings);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &handler, &client, &spawner, rx);

    // Restore the terminal even when the loop failed
    restore_terminal(&mut terminal)?;
    logging::shutdown();

    if let Err(e) = result {
        error!(error = %e, "Event loop failed");
        return Err(anyhow::anyhow!(e.user_message()));
    }
    Ok(())
}

fn run(
    terminal: &mut Tui,
    app: &mut App,
    handler: &EventHandler,
    client: &ArticClient,
    spawner: &TaskSpawner,
    mut rx: UnboundedReceiver<ApiMessage>,
) -> error::Result<()> {
    while !app.should_quit() {
        if let Some(request) = app.take_pending_request() {
            spawner.spawn_fetch_page(client, request);
        }

        terminal.draw(|frame| app.view(frame))?;

        let event = handler.next()?;
        app.update(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }
    }
    Ok(())
}

fn setup_terminal() -> error::Result<Tui> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("raw mode unavailable: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

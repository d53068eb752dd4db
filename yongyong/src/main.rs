//! yongyong - 用用 in the terminal
//!
//! Browse, rank, publish and discuss small web apps, and chat with a
//! creator's AI agent. Without a subcommand the TUI starts.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use yongyong_core::format::format_count;
use yongyong_core::{respond, Catalog, Config, HomeTab, Persona};

use crate::app::App;

/// How long to wait for a key before ticking.
const TICK: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "yongyong")]
#[command(about = "用用 - browse, rank and discuss small web apps")]
#[command(version)]
struct Cli {
    /// Catalog fixture (JSON) to load instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the apps under a home tab, one per line
    List {
        /// recommend, trending, latest or all
        #[arg(long, default_value = "recommend")]
        tab: String,
    },
    /// Ask a creator's agent something and print the reply
    Ask {
        /// Id of the creator whose agent answers
        #[arg(long)]
        creator: String,

        /// Agent persona (helper or gatekeeper); defaults to the configured one
        #[arg(long)]
        persona: Option<Persona>,

        /// What to ask
        #[arg(required = true)]
        utterance: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    // Initialize logging (to file, never stdout)
    let _log_guard =
        yongyong_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let catalog = Catalog::load(&config.catalog).context("failed to load catalog")?;

    match cli.command {
        Some(Command::List { tab }) => list(&catalog, &tab),
        Some(Command::Ask {
            creator,
            persona,
            utterance,
        }) => ask(
            &catalog,
            &creator,
            persona.unwrap_or(config.agent.persona),
            &utterance.join(" "),
        ),
        None => run_tui(catalog, &config),
    }
}

/// `yongyong list`: one app per line, tab-separated.
fn list(catalog: &Catalog, tab: &str) -> Result<()> {
    let tab = HomeTab::from_name(tab);
    tracing::info!(tab = tab.as_str(), "Listing catalog");

    for app in yongyong_core::catalog::visible_catalog(catalog.apps(), tab) {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            app.id,
            app.title,
            app.author.name,
            app.kind.as_str(),
            format_count(app.likes)
        );
    }
    Ok(())
}

/// `yongyong ask`: reply immediately, without the simulated delay.
fn ask(catalog: &Catalog, creator_id: &str, persona: Persona, utterance: &str) -> Result<()> {
    let Some(creator) = catalog.user(creator_id) else {
        bail!("unknown creator: {}", creator_id);
    };
    if utterance.trim().is_empty() {
        bail!("nothing to ask: the message is blank");
    }

    println!("{}", respond(persona, creator, utterance));
    Ok(())
}

fn run_tui(catalog: Catalog, config: &Config) -> Result<()> {
    tracing::info!("yongyong TUI starting up");

    let mut app = App::new(catalog, config);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    tracing::info!("yongyong TUI shutting down");

    result
}

/// Run the main application loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Deliver due agent replies, expire notices
        app.tick(Instant::now());

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

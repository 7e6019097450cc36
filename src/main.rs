//! Carbon Form - terminal front end for the carbon footprint calculator form
//!
//! Validates answers as they are typed, keeps a live rough estimate, shows
//! help tooltips and saves progress locally so a reload picks up where the
//! user left off.

mod app;
mod assistant;
mod config;
mod platform;
mod state;
mod storage;
mod ui;

use anyhow::Result;
use app::App;
use assistant::FormAssistant;
use config::FormConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::carbon_calculator;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use storage::{FileStorage, FormStorage, MemoryStorage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "carbon-form.log";

#[tokio::main]
async fn main() -> Result<()> {
    let config = FormConfig::load()?;
    let data_dir = config.data_dir();

    init_logging(data_dir.as_deref());

    let storage: Box<dyn FormStorage> = match data_dir {
        Some(dir) => {
            let file_storage = FileStorage::new(dir);
            tracing::info!("Saving form state under {}", file_storage.dir().display());
            Box::new(file_storage)
        }
        None => {
            tracing::warn!("No data directory available, form state will not survive restarts");
            Box::new(MemoryStorage::new())
        }
    };
    let assistant = FormAssistant::new(
        carbon_calculator(),
        storage,
        config.storage_key(),
        config.timings(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(assistant);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if let Some(payload) = &app.submission {
        println!("{}", serde_json::to_string_pretty(payload)?);
    }

    Ok(())
}

/// Log to a file in the data directory; the terminal belongs to the UI
fn init_logging(data_dir: Option<&Path>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "carbon_form=info".into());

    match data_dir.and_then(open_log_file) {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file(dir: &Path) -> Option<File> {
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Keep hit-testing in sync with what gets drawn
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Run timers that came due since the last frame
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a fade or the submit animation is running (16ms = ~60fps)
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next frame
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

//! A one-page personal portfolio for the terminal.
//!
//! Run the binary to browse the page.  Run with `--print-config` to see the
//! effective configuration.

mod app;
mod config;
mod content;
mod core;
mod error;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
    sync,
};
use crate::config::AppConfig;
use crate::core::theme_mode::{prefers_dark, ThemeMode};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "A portfolio page for the terminal")]
struct Cli {
    /// Start in this theme (`dark` or `light`) without saving it.
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Milliseconds between animation ticks.
    #[arg(long, default_value_t = 33)]
    tick_ms: u64,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(s).ok_or_else(|| format!("unknown theme `{s}` (expected dark or light)"))
}

// ───────────────────────────────────────── logging ───────────

/// Logs go to `log_file` when given, otherwise to stderr (only what
/// `RUST_LOG` asks for).
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── event loop ────────

async fn run(terminal: &mut Terminal<CrosstermBackend<Stderr>>, state: &mut AppState, tick: Duration) -> Result<()> {
    let mut events = spawn_event_reader(tick);

    loop {
        // ── draw first ─────────────────────────────────────────
        let size = terminal.size()?;
        state.terminal_area = Rect::new(0, 0, size.width, size.height);
        sync::refresh(state, Instant::now());
        terminal.draw(|frame| ui::render(frame, state))?;

        tokio::select! {
            biased;

            _ = tokio::signal::ctrl_c() => {
                state.should_quit = true;
            }

            event = events.recv() => {
                let Some(event) = event else {
                    tracing::warn!("event reader stopped");
                    break;
                };
                apply_event(state, event);
                // Drain everything currently queued so a burst of mouse
                // motion costs one redraw.
                while let Ok(event) = events.try_recv() {
                    apply_event(state, event);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

fn apply_event(state: &mut AppState, event: AppEvent) {
    let now = Instant::now();
    match event {
        AppEvent::Key(k) => handler::handle_key(state, k, now),
        AppEvent::Mouse(m) => handler::handle_mouse(state, m, now),
        AppEvent::Resize(w, h) => {
            tracing::debug!(w, h, "resize");
            state.tooltips.request_reposition();
        }
        AppEvent::FocusLost => handler::handle_focus_lost(state, now),
        AppEvent::Tick => sync::tick(state, now),
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    content::validate(content::SECTIONS, content::PROJECTS)?;

    let config_file = config::config_path();
    let user_config = AppConfig::load_from(&config_file);
    if cli.print_config {
        print!("{}", user_config.serialise());
        return Ok(());
    }

    let theme = match cli.theme {
        Some(theme) => theme,
        None => {
            let colorfgbg = std::env::var("COLORFGBG").ok();
            ThemeMode::initial(user_config.theme, prefers_dark(colorfgbg.as_deref()))
        }
    };
    tracing::info!(theme = theme.as_str(), config = %config_file.display(), "starting");

    let mut state = AppState::new(user_config, config_file, theme, Instant::now());

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut state, Duration::from_millis(cli.tick_ms.max(1))).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

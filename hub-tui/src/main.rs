//! Analytics Hub TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hub_tui::config::TuiConfig;
use hub_tui::error::TuiError;
use hub_tui::events::TuiEvent;
use hub_tui::keys::map_key;
use hub_tui::logging;
use hub_tui::source::{spawn_loader, DataSource};
use hub_tui::state::App;
use hub_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    install_hooks()?;

    let config = TuiConfig::load()?;
    logging::init(&config.logging)?;
    info!(
        variant = %config.variant,
        record_count = config.record_count,
        debounce_ms = config.debounce_ms,
        "Starting analytics hub"
    );

    let source = DataSource::from_config(&config);
    let tick_rate = config.tick_rate();
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());
    let _loader = spawn_loader(source, event_tx);

    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.on_tick(Instant::now());
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    info!(
        records = app.dashboard.records().len(),
        loaded = !app.dashboard.is_loading(),
        "Shutting down"
    );
    Ok(())
}

/// Route panics through color-eyre after putting the terminal back.
fn install_hooks() -> Result<(), TuiError> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook
        .install()
        .map_err(|err| TuiError::PanicHook(err.to_string()))?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        panic_hook(info);
    }));
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => match map_key(key, app.focus) {
            Some(action) => app.apply(action, Instant::now()),
            None => false,
        },
        TuiEvent::Loaded(records) => {
            app.on_loaded(records);
            false
        }
        TuiEvent::Resize { width, height } => {
            debug!(width, height, "Terminal resized");
            false
        }
    }
}

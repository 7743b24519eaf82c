use anyhow::{Context, Result};
use proofline_client::{CorrectionService, HttpCorrectionClient};
use proofline_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod report;
mod state;
mod store;
mod theme;
mod utils;
mod view_models;
mod views;

#[cfg(test)]
mod test_support;

use actions::{Action, GlobalAction};
use middleware::{
    correction::CorrectionMiddleware, export::ExportMiddleware, keyboard::KeyboardMiddleware,
    logging::LoggingMiddleware,
};
use state::AppState;
use store::Store;

/// How long the UI loop waits for input before drawing again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting proofline (log: {})", log_file.display());

    let config = AppConfig::load();
    log::info!("Correction service: {}", config.service_url);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let client = HttpCorrectionClient::new(&config.service_url, config.request_timeout())
        .context("Failed to create HTTP client")?;
    let service: Arc<dyn CorrectionService> = Arc::new(client);

    let mut store = Store::new(AppState::new(config.clone()));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(CorrectionMiddleware::new(
        service,
        runtime.handle().clone(),
        config.debounce(),
    )));
    store.add_middleware(Box::new(ExportMiddleware::new(runtime.handle().clone())));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Drop pending timers and requests before leaving
    runtime.shutdown_timeout(Duration::from_millis(200));

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting proofline");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Apply results reported by background tasks
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}

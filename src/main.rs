use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::info;

use tradedesk::TradedeskError;
use tradedesk::client::{HttpTradeService, TradeService};
use tradedesk::config::{UiConfig, fetch_config};
use tradedesk::dispatch::spawn_request;
use tradedesk::tui::event::{spawn_event_reader, spawn_tick_timer};
use tradedesk::tui::{App, Message, Tui, render, restore_terminal, setup_terminal, update};

#[tokio::main]
async fn main() -> Result<(), TradedeskError> {
    let app_config = fetch_config()?;
    init_logging(&app_config.ui)?;

    let service: Arc<dyn TradeService> =
        Arc::new(HttpTradeService::new(&app_config.service.base_url)?);
    info!(url = %app_config.service.base_url, "Starting trading dashboard");

    let app = App::new(
        app_config.service.base_url.clone(),
        &app_config.service.initial_user_id,
    );

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, app, service, app_config.ui.tick_ms).await;
    restore_terminal(&mut terminal)?;

    info!("Trading dashboard stopped");
    result
}

/// Routes tracing output to the configured log file; the terminal belongs
/// to the TUI.
fn init_logging(ui: &UiConfig) -> Result<(), TradedeskError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&ui.log_file)
        .map_err(|e| TradedeskError::Io(format!("failed to open log file {}: {e}", ui.log_file)))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(ui.log_level)
        .init();
    Ok(())
}

/// Draws, waits for the next message, applies it, and launches any
/// requests it produced, until the user quits.
async fn run(
    terminal: &mut Tui,
    mut app: App,
    service: Arc<dyn TradeService>,
    tick_ms: u64,
) -> Result<(), TradedeskError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), tick_ms);

    for request in app.start() {
        spawn_request(Arc::clone(&service), request, tx.clone());
    }

    while !app.should_quit {
        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| TradedeskError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        for request in update(&mut app, message) {
            spawn_request(Arc::clone(&service), request, tx.clone());
        }
    }

    Ok(())
}

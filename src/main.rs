use tokio::sync::mpsc;
use tracing::info;

use pricelock::PricelockError;
use pricelock::config::{AppConfig, fetch_config};
use pricelock::feed::{FeedCommand, PriceFeed};
use pricelock::round::{Action, CountdownHandle, spawn_countdown};
use pricelock::tui::{App, Message, event, render, restore_terminal, setup_terminal};

/// UI housekeeping tick interval (notice expiry), in milliseconds.
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), PricelockError> {
    let app_config = fetch_config()?;
    init_tracing(&app_config)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

    let feed = PriceFeed::new(app_config.feed.clone(), tx.clone(), cmd_rx)?;
    tokio::spawn(feed.run());

    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), UI_TICK_MS);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &app_config, tx, rx, cmd_tx).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Runs the main loop: consume messages, apply them to the state machine,
/// perform the resulting actions, redraw.
async fn run(
    terminal: &mut pricelock::tui::Tui,
    app_config: &AppConfig,
    tx: mpsc::UnboundedSender<Message>,
    mut rx: mpsc::UnboundedReceiver<Message>,
    cmd_tx: mpsc::UnboundedSender<FeedCommand>,
) -> Result<(), PricelockError> {
    let mut app = App::new(app_config.duration_secs);
    let mut countdown: Option<CountdownHandle> = None;

    terminal
        .draw(|frame| render(frame, &app))
        .map_err(|e| PricelockError::Io(e.to_string()))?;

    while let Some(message) = rx.recv().await {
        let actions = event::update(&mut app, message);

        for action in actions {
            match action {
                Action::StartCountdown { duration_secs } => {
                    if let Some(handle) = countdown.take() {
                        handle.cancel();
                    }
                    countdown = Some(spawn_countdown(tx.clone(), duration_secs));
                }
                Action::CancelCountdown => {
                    if let Some(handle) = countdown.take() {
                        handle.cancel();
                    }
                }
                Action::PauseFeed => {
                    let _ = cmd_tx.send(FeedCommand::Pause);
                }
                Action::ResumeFeed => {
                    let _ = cmd_tx.send(FeedCommand::Resume);
                }
                Action::RequestSettlementQuote => {
                    let _ = cmd_tx.send(FeedCommand::FetchNow);
                }
            }
        }

        if app.should_quit {
            info!("quitting");
            break;
        }

        terminal
            .draw(|frame| render(frame, &app))
            .map_err(|e| PricelockError::Io(e.to_string()))?;
    }

    Ok(())
}

/// Initializes tracing to a log file when one is configured.
///
/// Stdout belongs to the TUI, so without `PRICELOCK_LOG` nothing is
/// emitted.
fn init_tracing(app_config: &AppConfig) -> Result<(), PricelockError> {
    let Some(ref path) = app_config.log_file else {
        return Ok(());
    };

    let file = std::fs::File::create(path)
        .map_err(|e| PricelockError::Io(format!("failed to open log file {path}: {e}")))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

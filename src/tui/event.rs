//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::models::Quote;
use crate::round::{Action, Direction, Phase};

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// A price sample from the feed (idle poll or settlement fetch).
    Quote(Quote),
    /// Non-blocking notice from the feed (fetch failure, fallback in use).
    FeedNotice(String),

    /// One second elapsed on the running countdown.
    CountdownTick {
        remaining_secs: u64,
        progress_percent: f64,
    },
    /// The countdown reached zero.
    CountdownFinished,

    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message and returns the side
/// effects the host loop must perform.
pub fn update(app: &mut App, message: Message) -> Vec<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Quote(quote) => {
            app.feed_live = quote.is_live();
            app.round.on_quote(quote)
        }
        Message::FeedNotice(text) => {
            app.feed_live = false;
            app.show_notice(text);
            Vec::new()
        }
        Message::CountdownTick {
            remaining_secs,
            progress_percent,
        } => {
            // Display only; a tick that outlived its round is dropped.
            if matches!(app.round.phase(), Phase::Locked { .. }) {
                app.countdown_remaining = Some(remaining_secs);
                app.countdown_progress = progress_percent;
            }
            Vec::new()
        }
        Message::CountdownFinished => app.round.on_countdown_finished(),
        Message::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Vec<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => Vec::new(),
        Event::Tick => {
            app.clear_stale_notices();
            Vec::new()
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            Vec::new()
        }

        // Lock in, with or without a prediction
        KeyCode::Up | KeyCode::Char('u') => lock_in(app, Some(Direction::Up)),
        KeyCode::Down | KeyCode::Char('d') => lock_in(app, Some(Direction::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => lock_in(app, None),

        // Round length, only meaningful while idle
        KeyCode::Left | KeyCode::Char('-') => adjust_duration(app, -5),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => adjust_duration(app, 5),

        // Play again
        KeyCode::Char('r') => reset_round(app),

        _ => Vec::new(),
    }
}

/// Locks the current price, surfacing a rejection as a notice.
fn lock_in(app: &mut App, prediction: Option<Direction>) -> Vec<Action> {
    match app.round.lock_in(prediction) {
        Ok(actions) => {
            app.countdown_remaining = Some(app.round.duration_secs());
            app.countdown_progress = 100.0;
            actions
        }
        Err(rejection) => {
            app.show_notice(rejection.to_string());
            Vec::new()
        }
    }
}

/// Nudges the round length by `delta` seconds; the controller clamps.
fn adjust_duration(app: &mut App, delta: i64) -> Vec<Action> {
    let requested = (app.round.duration_secs() as i64 + delta).max(0) as u64;
    // Only valid while idle; a mid-round press is simply ignored.
    let _ = app.round.set_duration(requested);
    Vec::new()
}

/// Starts over after a finished round.
fn reset_round(app: &mut App) -> Vec<Action> {
    let actions = app.round.reset();
    if !actions.is_empty() {
        app.countdown_remaining = None;
        app.countdown_progress = 0.0;
    }
    actions
}

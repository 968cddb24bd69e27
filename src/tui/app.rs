//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::round::RoundController;

/// Notices disappear after this long.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    /// The round state machine.
    pub round: RoundController,

    // -- Countdown display state (fed by countdown tick messages) --
    /// Seconds left on the running countdown.
    pub countdown_remaining: Option<u64>,
    /// Countdown progress, 0–100.
    pub countdown_progress: f64,

    // -- UI State --
    /// Transient notice line (fetch failures, rejected actions).
    pub notice: Option<Notice>,
    /// Whether the most recent quote came from the live index.
    pub feed_live: bool,
    /// Flag to signal the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App instance with default state.
    #[must_use]
    pub fn new(duration_secs: u64) -> Self {
        Self {
            round: RoundController::new(duration_secs),
            countdown_remaining: None,
            countdown_progress: 0.0,
            notice: None,
            feed_live: false,
            should_quit: false,
        }
    }

    /// Sets a notice to display.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears notices older than the TTL.
    pub fn clear_stale_notices(&mut self) {
        if let Some(ref notice) = self.notice
            && notice.timestamp.elapsed() > NOTICE_TTL
        {
            self.notice = None;
        }
    }
}

/// Notice message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Notice {
    /// The notice text.
    pub message: String,
    /// When the notice was shown.
    pub timestamp: Instant,
}

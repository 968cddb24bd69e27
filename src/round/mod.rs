//! Round state machine.
//!
//! [`RoundController`] owns one round of play and is the only place round
//! state mutates. It consumes quotes from the price feed and completion
//! from the countdown task, and answers every event with the side effects
//! ([`Action`]) the host loop must perform. Centralizing mutation behind
//! the transition methods is what keeps a stale quote or timer callback
//! from corrupting the round: anything arriving in the wrong phase is
//! discarded by the phase guard.

pub mod countdown;
pub mod outcome;

pub use countdown::{Countdown, CountdownHandle, Tick, spawn_countdown};
pub use outcome::{Direction, Outcome, OutcomeError, compute_outcome};

use std::fmt;

use tracing::{error, warn};

use crate::models::Quote;

/// Shortest allowed round length in seconds.
pub const MIN_DURATION_SECS: u64 = 15;

/// Longest allowed round length in seconds.
pub const MAX_DURATION_SECS: u64 = 60;

/// Round length used when nothing is configured.
pub const DEFAULT_DURATION_SECS: u64 = 30;

/// Clamps a requested round length into the allowed range.
pub fn clamp_duration(secs: u64) -> u64 {
    secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS)
}

/// Phase of the current round.
///
/// The quotes live on the variants, so a locked price exists exactly when
/// the phase says it does; there is no nullable field to police.
#[derive(Clone, Debug)]
pub enum Phase {
    /// Waiting for the player; the feed polls in the background.
    Idle,
    /// Price locked and the countdown running. Once `settling` is set the
    /// countdown has elapsed and the settlement quote is awaited.
    Locked {
        locked: Quote,
        prediction: Option<Direction>,
        settling: bool,
    },
    /// Round finished; everything needed to display the result.
    Result {
        locked: Quote,
        settled: Quote,
        prediction: Option<Direction>,
        outcome: Outcome,
    },
}

/// Side effects the host loop must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Begin a countdown of the given length.
    StartCountdown { duration_secs: u64 },
    /// Abort any running countdown.
    CancelCountdown,
    /// Suspend idle price polling.
    PauseFeed,
    /// Resume idle price polling.
    ResumeFeed,
    /// Fetch one settlement quote, honored even while polling is paused.
    RequestSettlementQuote,
}

/// Why a player action was refused. Never fatal; the machine is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardRejection {
    /// `lock_in` was called before any quote arrived.
    NoQuoteAvailable,
    /// The operation is not valid in the current phase.
    WrongPhase,
}

impl fmt::Display for GuardRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQuoteAvailable => write!(f, "no price quote available yet"),
            Self::WrongPhase => write!(f, "not possible in the current phase"),
        }
    }
}

/// State machine for the single round of play.
pub struct RoundController {
    phase: Phase,
    duration_secs: u64,
    /// Most recent feed quote; refreshed only while idle so a poll result
    /// that was in flight at lock-in can never move the locked price.
    current: Option<Quote>,
}

impl RoundController {
    /// Creates a controller in [`Phase::Idle`] with the given round length
    /// (clamped to the allowed range) and no quote yet.
    #[must_use]
    pub fn new(duration_secs: u64) -> Self {
        Self {
            phase: Phase::Idle,
            duration_secs: clamp_duration(duration_secs),
            current: None,
        }
    }

    /// Current phase of the round.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Most recent quote seen while idle, if any.
    pub fn current_quote(&self) -> Option<Quote> {
        self.current
    }

    /// Configured round length in seconds.
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Feed delivered a quote.
    ///
    /// While idle it refreshes the current-quote cell; while settling it
    /// completes the round; in any other phase it is a stale in-flight
    /// result and is discarded.
    pub fn on_quote(&mut self, quote: Quote) -> Vec<Action> {
        match &self.phase {
            Phase::Idle => {
                self.current = Some(quote);
                Vec::new()
            }
            Phase::Locked {
                locked,
                prediction,
                settling: true,
            } => {
                let locked = *locked;
                let prediction = *prediction;
                match compute_outcome(locked.usd, quote.usd, prediction) {
                    Ok(outcome) => {
                        self.phase = Phase::Result {
                            locked,
                            settled: quote,
                            prediction,
                            outcome,
                        };
                    }
                    Err(e) => {
                        // Unreachable when the feed upholds its zero-price
                        // guard; refuse the transition rather than show a
                        // bogus result.
                        error!("settlement refused: {e}");
                    }
                }
                Vec::new()
            }
            Phase::Locked { .. } | Phase::Result { .. } => Vec::new(),
        }
    }

    /// The countdown for the current round reached zero.
    pub fn on_countdown_finished(&mut self) -> Vec<Action> {
        match &mut self.phase {
            Phase::Locked { settling, .. } if !*settling => {
                *settling = true;
                vec![Action::RequestSettlementQuote]
            }
            _ => {
                // A completion that outlived its round (cancelled late or
                // delivered after reset); the phase guard makes it a no-op.
                warn!("countdown completion ignored outside a locked round");
                Vec::new()
            }
        }
    }

    /// Locks the current quote and starts a round.
    ///
    /// # Errors
    ///
    /// [`GuardRejection::WrongPhase`] outside [`Phase::Idle`];
    /// [`GuardRejection::NoQuoteAvailable`] before the feed produced a
    /// quote. Either way the machine is unchanged.
    pub fn lock_in(
        &mut self,
        prediction: Option<Direction>,
    ) -> Result<Vec<Action>, GuardRejection> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(GuardRejection::WrongPhase);
        }
        let Some(locked) = self.current else {
            return Err(GuardRejection::NoQuoteAvailable);
        };

        self.phase = Phase::Locked {
            locked,
            prediction,
            settling: false,
        };
        Ok(vec![
            Action::PauseFeed,
            Action::StartCountdown {
                duration_secs: self.duration_secs,
            },
        ])
    }

    /// Sets the round length, clamped to [15, 60] seconds. Returns the
    /// value actually applied.
    ///
    /// # Errors
    ///
    /// [`GuardRejection::WrongPhase`] while a round is in flight.
    pub fn set_duration(&mut self, secs: u64) -> Result<u64, GuardRejection> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(GuardRejection::WrongPhase);
        }
        self.duration_secs = clamp_duration(secs);
        Ok(self.duration_secs)
    }

    /// Returns to [`Phase::Idle`], dropping all round data. The round
    /// length and the current-quote cell are preserved.
    ///
    /// Idempotent: resetting an idle round changes nothing and emits no
    /// actions.
    pub fn reset(&mut self) -> Vec<Action> {
        if matches!(self.phase, Phase::Idle) {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        vec![Action::CancelCountdown, Action::ResumeFeed]
    }
}

//! Countdown timing for a locked round.
//!
//! [`Countdown`] holds the pure remaining/progress arithmetic;
//! [`spawn_countdown`] drives it with a one-second tokio interval and
//! forwards every tick to the main loop. Timing policy: best-effort
//! decrement-per-tick (`MissedTickBehavior::Delay`); ticks missed while
//! the host is suspended delay the countdown instead of being caught up.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::tui::Message;

/// Remaining-time state for one countdown.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
    finished: bool,
}

/// What a single tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One second elapsed; the countdown is still running.
    Running { remaining_secs: u64 },
    /// The countdown just reached zero. Reported exactly once.
    Finished,
    /// The countdown had already finished; nothing happened.
    Spent,
}

impl Countdown {
    /// Starts a countdown at `total_secs` remaining and 100% progress.
    #[must_use]
    pub fn new(total_secs: u64) -> Self {
        let total_secs = total_secs.max(1);
        Self {
            total_secs,
            remaining_secs: total_secs,
            finished: false,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Remaining time never goes negative and completion is reported
    /// exactly once; every later call returns [`Tick::Spent`].
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Spent;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.finished = true;
            Tick::Finished
        } else {
            Tick::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Remaining time as a percentage of the total, floored at zero.
    pub fn progress_percent(&self) -> f64 {
        (self.remaining_secs as f64 / self.total_secs as f64 * 100.0).max(0.0)
    }
}

/// Handle to a running countdown task.
pub struct CountdownHandle {
    task: JoinHandle<()>,
}

impl CountdownHandle {
    /// Stops the countdown without a completion signal. Idempotent.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns a task that ticks a countdown once per second.
///
/// Each second it sends [`Message::CountdownTick`]; when the clock reaches
/// zero it sends a final tick at zero followed by exactly one
/// [`Message::CountdownFinished`], then stops.
pub fn spawn_countdown(tx: mpsc::UnboundedSender<Message>, total_secs: u64) -> CountdownHandle {
    let task = tokio::spawn(async move {
        let mut countdown = Countdown::new(total_secs);
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so the
        // first decrement lands a full second after lock-in.
        interval.tick().await;

        loop {
            interval.tick().await;
            match countdown.tick() {
                Tick::Running { remaining_secs } => {
                    let sent = tx.send(Message::CountdownTick {
                        remaining_secs,
                        progress_percent: countdown.progress_percent(),
                    });
                    if sent.is_err() {
                        break;
                    }
                }
                Tick::Finished => {
                    let _ = tx.send(Message::CountdownTick {
                        remaining_secs: 0,
                        progress_percent: 0.0,
                    });
                    let _ = tx.send(Message::CountdownFinished);
                    break;
                }
                Tick::Spent => break,
            }
        }
    });

    CountdownHandle { task }
}

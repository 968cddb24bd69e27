//! Bitcoin price feed.
//!
//! [`PriceFeed`] polls the CoinGecko simple-price endpoint on a fixed
//! interval while the game is idle and publishes each sample to the main
//! loop. Fetch failures degrade to a synthesized quote (demo mode) or to a
//! notice (strict mode); they are never fatal. Commands from the main loop
//! pause polling during a round, resume it afterwards, and request the
//! settlement quote when a countdown ends.

use std::time::Duration;

use rand::Rng;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::models::{Quote, SimplePriceResponse};
use crate::tui::Message;
use crate::{PricelockError, Result};

/// Band for synthesized fallback quotes, in whole USD.
const SYNTH_MIN_USD: u64 = 50_000;
const SYNTH_MAX_USD: u64 = 70_000;

/// Per-request timeout for the quote endpoint.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Commands sent from the main loop to the feed task.
#[derive(Debug)]
pub enum FeedCommand {
    /// Stop idle polling (a round locked).
    Pause,
    /// Restart idle polling (the round was reset).
    Resume,
    /// Fetch one settlement quote even while paused.
    FetchNow,
}

/// Polls the quote source and publishes samples to the main loop.
pub struct PriceFeed {
    config: FeedConfig,
    client: reqwest::Client,
    tx: mpsc::UnboundedSender<Message>,
    cmd_rx: mpsc::UnboundedReceiver<FeedCommand>,
    /// Idle polling active.
    polling: bool,
    /// A settlement fetch is owed; retried every tick until a quote lands.
    settling: bool,
}

impl PriceFeed {
    /// Creates a feed that starts in the polling state.
    ///
    /// # Errors
    ///
    /// Returns [`PricelockError::Http`] if the HTTP client cannot be built.
    pub fn new(
        config: FeedConfig,
        tx: mpsc::UnboundedSender<Message>,
        cmd_rx: mpsc::UnboundedReceiver<FeedCommand>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            config,
            client,
            tx,
            cmd_rx,
            polling: true,
            settling: false,
        })
    }

    /// Runs the feed loop until the main loop goes away.
    pub async fn run(mut self) {
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.poll_interval_ms.max(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if (self.polling || self.settling) && !self.step().await {
                        break;
                    }
                }

                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        Some(FeedCommand::Pause) => {
                            self.polling = false;
                        }
                        Some(FeedCommand::Resume) => {
                            self.polling = true;
                            self.settling = false;
                            interval.reset_immediately();
                        }
                        Some(FeedCommand::FetchNow) => {
                            self.settling = true;
                            interval.reset_immediately();
                        }
                        None => {
                            // Command channel closed, app is shutting down.
                            break;
                        }
                    }
                }
            }
        }
    }

    /// One poll step: fetch, degrade on failure, publish.
    ///
    /// Returns `false` once the main loop's channel is closed.
    async fn step(&mut self) -> bool {
        match self.fetch_quote().await {
            Ok(quote) => {
                self.settling = false;
                self.tx.send(Message::Quote(quote)).is_ok()
            }
            Err(e) => {
                warn!("price fetch failed: {e}");
                if self.config.strict_quotes {
                    // Leave `settling` set so the next tick retries.
                    self.tx
                        .send(Message::FeedNotice(format!("price fetch failed: {e}")))
                        .is_ok()
                } else {
                    self.settling = false;
                    let quote = synthesize_quote();
                    if self
                        .tx
                        .send(Message::FeedNotice(
                            "price fetch failed, showing synthesized quote".to_string(),
                        ))
                        .is_err()
                    {
                        return false;
                    }
                    self.tx.send(Message::Quote(quote)).is_ok()
                }
            }
        }
    }

    /// Fetches one live quote from the configured endpoint.
    ///
    /// # Errors
    ///
    /// HTTP or JSON failures, or a non-positive price, which is rejected
    /// here at the boundary so the outcome math never sees a zero.
    async fn fetch_quote(&self) -> Result<Quote> {
        let response = self.client.get(&self.config.api_url).send().await?;
        let response = response.error_for_status()?;
        let body: SimplePriceResponse = response.json().await?;

        let usd = body.bitcoin.usd;
        if usd <= Decimal::ZERO {
            return Err(PricelockError::MalformedQuote(format!(
                "non-positive price {usd}"
            )));
        }

        debug!(%usd, "fetched quote");
        Ok(Quote::live(usd))
    }
}

/// Generates a fallback quote, uniform over the synthesized band.
fn synthesize_quote() -> Quote {
    let cents = rand::rng().random_range(SYNTH_MIN_USD * 100..=SYNTH_MAX_USD * 100);
    Quote::synthesized(Decimal::new(cents as i64, 2))
}

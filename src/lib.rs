//! Bitcoin price-lock game.
//!
//! A single-player terminal game: lock in the current Bitcoin price, wait
//! out a configurable countdown, and see whether the price rose or fell
//! (and whether your up/down prediction was right). The [`round`] module
//! holds the state machine driving a round; [`feed`] owns the quote
//! polling; [`tui`] renders the whole thing with Ratatui.

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod round;
pub mod tui;

pub use error::{PricelockError, Result};

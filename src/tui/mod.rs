//! Terminal user interface for the price-lock game.
//!
//! A single-screen Ratatui UI: live price while idle, countdown gauge
//! while a round runs, result banner afterwards. Rendering is pure; every
//! state change flows through [`event::update`].

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Event, Message, update};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;

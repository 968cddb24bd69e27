//! Reusable UI components.

pub mod countdown_gauge;
pub mod duration_slider;
pub mod price_panel;
pub mod result_panel;
pub mod status_bar;

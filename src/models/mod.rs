//! Typed models for the quote source and the price samples derived from it.

pub mod quote;

pub use quote::{Quote, QuoteSource, SimplePriceResponse, format_usd};

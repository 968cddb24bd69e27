//! Price quote types and the CoinGecko wire shape they are parsed from.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Body of CoinGecko's `/simple/price` endpoint queried for bitcoin in USD:
/// `{"bitcoin": {"usd": 60123.45}}`.
#[derive(Debug, Deserialize)]
pub struct SimplePriceResponse {
    pub bitcoin: UsdPrice,
}

/// The per-asset currency mapping inside a [`SimplePriceResponse`].
#[derive(Debug, Deserialize)]
pub struct UsdPrice {
    pub usd: Decimal,
}

/// Where a quote came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteSource {
    /// Fetched from the live price index.
    Live,
    /// Generated locally after a fetch failure (demo mode).
    Synthesized,
}

/// A single USD price sample for Bitcoin, tagged with its provenance so a
/// synthesized fallback is never mistaken for real market data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub usd: Decimal,
    pub source: QuoteSource,
}

impl Quote {
    /// Wraps a price fetched from the live index.
    #[must_use]
    pub fn live(usd: Decimal) -> Self {
        Self {
            usd,
            source: QuoteSource::Live,
        }
    }

    /// Wraps a locally generated fallback price.
    #[must_use]
    pub fn synthesized(usd: Decimal) -> Self {
        Self {
            usd,
            source: QuoteSource::Synthesized,
        }
    }

    /// `true` if the price came from the live index.
    pub fn is_live(&self) -> bool {
        self.source == QuoteSource::Live
    }
}

/// Formats an amount as US dollars with thousands separators and two
/// decimal places, e.g. `$60,123.45`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac_part}")
}

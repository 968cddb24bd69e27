//! Round outcome computation.
//!
//! Pure arithmetic over the locked and settled prices; no timer or network
//! dependency, so the whole contract is unit-tested in isolation.

use std::fmt;

use rust_decimal::Decimal;

/// Direction of a price move, also used as the player's prediction.
///
/// A zero delta counts as [`Direction::Up`] (explicit tie-break).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Returns a display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }
}

/// Computed result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub direction: Direction,
    /// Settled price minus locked price, in USD.
    pub delta: Decimal,
    /// Delta as a percentage of the locked price.
    pub percent: Decimal,
    /// Present only when the player made a prediction.
    pub prediction_correct: Option<bool>,
}

/// Reason an outcome could not be computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeError {
    /// The locked price was zero, so the percent change is undefined. A
    /// real quote is never zero; the feed rejects such prices at the
    /// boundary, so hitting this means an invariant broke upstream.
    ZeroLockPrice,
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLockPrice => {
                write!(f, "locked price is zero, percent change is undefined")
            }
        }
    }
}

impl std::error::Error for OutcomeError {}

/// Computes the outcome of a round from its locked and settled prices.
///
/// # Errors
///
/// Returns [`OutcomeError::ZeroLockPrice`] if `locked` is zero.
pub fn compute_outcome(
    locked: Decimal,
    settled: Decimal,
    prediction: Option<Direction>,
) -> Result<Outcome, OutcomeError> {
    if locked.is_zero() {
        return Err(OutcomeError::ZeroLockPrice);
    }

    let delta = settled - locked;
    let direction = if delta >= Decimal::ZERO {
        Direction::Up
    } else {
        Direction::Down
    };
    let percent = delta / locked * Decimal::ONE_HUNDRED;
    let prediction_correct = prediction.map(|p| p == direction);

    Ok(Outcome {
        direction,
        delta,
        percent,
        prediction_correct,
    })
}

//! Vote tallying and majority resolution

use crate::models::signal::{SignalKind, SignalVote};

/// Resolve the overall signal from vote counts.
///
/// Buy or sell wins only when it strictly exceeds both other counts; every
/// tie, including all-neutral, resolves to neutral.
pub fn resolve_majority(buy: u32, sell: u32, neutral: u32) -> SignalKind {
    if buy > sell && buy > neutral {
        SignalKind::Buy
    } else if sell > buy && sell > neutral {
        SignalKind::Sell
    } else {
        SignalKind::Neutral
    }
}

impl SignalVote {
    /// Build a vote from raw counts
    pub fn from_counts(buy: u32, sell: u32, neutral: u32) -> Self {
        Self {
            buy,
            sell,
            neutral,
            signal: resolve_majority(buy, sell, neutral),
        }
    }

    /// Count individual sub-indicator votes
    pub fn tally(votes: &[SignalKind]) -> Self {
        let (mut buy, mut sell, mut neutral) = (0, 0, 0);
        for vote in votes {
            match vote {
                SignalKind::Buy => buy += 1,
                SignalKind::Sell => sell += 1,
                SignalKind::Neutral => neutral += 1,
            }
        }
        Self::from_counts(buy, sell, neutral)
    }
}

//! Category merge into the summary vote

use crate::models::signal::SignalVote;

/// Sum both category tallies and re-resolve with the same majority rule
pub fn combine(oscillators: &SignalVote, moving_averages: &SignalVote) -> SignalVote {
    SignalVote::from_counts(
        oscillators.buy() + moving_averages.buy(),
        oscillators.sell() + moving_averages.sell(),
        oscillators.neutral() + moving_averages.neutral(),
    )
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
    Neutral,
}

impl SignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Buy => "buy",
            SignalKind::Sell => "sell",
            SignalKind::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buy/sell/neutral tally with its resolved majority.
///
/// Only constructed through `SignalVote::tally` / `SignalVote::from_counts`
/// (see `signals::scoring`), which keep `signal` consistent with the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalVote {
    pub(crate) buy: u32,
    pub(crate) sell: u32,
    pub(crate) neutral: u32,
    pub(crate) signal: SignalKind,
}

impl SignalVote {
    pub fn buy(&self) -> u32 {
        self.buy
    }

    pub fn sell(&self) -> u32 {
        self.sell
    }

    pub fn neutral(&self) -> u32 {
        self.neutral
    }

    pub fn signal(&self) -> SignalKind {
        self.signal
    }

    /// Number of sub-indicators that contributed
    pub fn total(&self) -> u32 {
        self.buy + self.sell + self.neutral
    }
}

/// Full analysis payload returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorReport {
    pub oscillators: SignalVote,
    pub moving_averages: SignalVote,
    pub summary: SignalVote,
}

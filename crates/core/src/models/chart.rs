use serde::{Deserialize, Serialize};

/// Which price series a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChartSymbol {
    Gold,
    Silver,
    Try,
    Eur,
    Syp,
}

impl std::fmt::Display for ChartSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartSymbol::Gold => write!(f, "GOLD"),
            ChartSymbol::Silver => write!(f, "SILVER"),
            ChartSymbol::Try => write!(f, "TRY"),
            ChartSymbol::Eur => write!(f, "EUR"),
            ChartSymbol::Syp => write!(f, "SYP"),
        }
    }
}

/// Look-back window for a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "1w")]
    W1,
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "1y")]
    Y1,
    #[serde(rename = "all")]
    All,
}

impl Period {
    /// Feed parameters for this window: (candle interval, point count).
    pub fn interval_and_limit(&self) -> (&'static str, u32) {
        match self {
            Period::D1 => ("1h", 24),
            Period::W1 => ("4h", 42),
            Period::M1 => ("1d", 30),
            Period::Y1 => ("1w", 52),
            Period::All => ("1M", 60),
        }
    }
}

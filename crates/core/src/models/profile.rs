use serde::{Deserialize, Serialize};

use super::config::MarketConfig;
use super::holding::Holding;
use super::overrides::ManualOverrides;

/// Everything the user owns and has configured — the persisted state.
///
/// Price data is deliberately absent: quotes are refetched on startup
/// and holdings never store snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// The portfolio entries, in insertion order.
    #[serde(default)]
    pub holdings: Vec<Holding>,

    /// Manual price overrides.
    #[serde(default)]
    pub overrides: ManualOverrides,

    /// Spread/fallback policy.
    #[serde(default)]
    pub config: MarketConfig,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            holdings: Vec::new(),
            overrides: ManualOverrides::default(),
            config: MarketConfig::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Spread and fallback policy for the derived price computation.
///
/// These are policy constants, not sourced market spreads: the USD/SYP
/// buy side is modeled as a fixed absolute offset under the sell rate,
/// and the TRY/EUR buy/sell legs are synthesized from the feed's single
/// mid rate with fixed multipliers. The defaults reproduce the observed
/// informal-market behavior; they are kept configurable so they can be
/// recalibrated without touching the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Absolute SYP offset: usd_syp_buy = usd_syp_sell - syp_spread.
    pub syp_spread: f64,

    /// USD/TRY buy leg = mid × try_buy_factor.
    pub try_buy_factor: f64,

    /// USD/TRY sell leg = mid × try_sell_factor.
    pub try_sell_factor: f64,

    /// USD/EUR buy leg = mid × eur_buy_factor.
    pub eur_buy_factor: f64,

    /// USD/EUR sell leg = mid × eur_sell_factor.
    pub eur_sell_factor: f64,

    /// USD/TRY rate used for the TRY/SYP cross when the feed omits TRY.
    pub try_fallback_rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            syp_spread: 150.0,
            try_buy_factor: 0.998,
            try_sell_factor: 1.002,
            eur_buy_factor: 0.997,
            eur_sell_factor: 1.003,
            try_fallback_rate: 34.90,
        }
    }
}

impl MarketConfig {
    /// Reject configs that would poison the resolver's arithmetic.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.syp_spread.is_finite() || self.syp_spread < 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "syp_spread must be finite and non-negative, got {}",
                self.syp_spread
            )));
        }
        for (name, factor) in [
            ("try_buy_factor", self.try_buy_factor),
            ("try_sell_factor", self.try_sell_factor),
            ("eur_buy_factor", self.eur_buy_factor),
            ("eur_sell_factor", self.eur_sell_factor),
            ("try_fallback_rate", self.try_fallback_rate),
        ] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be finite and positive, got {factor}"
                )));
            }
        }
        Ok(())
    }
}

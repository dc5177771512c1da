use crate::models::config::MarketConfig;
use crate::models::overrides::ManualOverrides;
use crate::models::prices::{CurrencyPrices, DerivedPrices, MetalPrices, GRAMS_PER_TROY_OUNCE};
use crate::models::quote::RawQuote;

/// Turns a raw feed snapshot plus manual overrides into the complete
/// derived price set: gold purity prices, synthetic buy/sell legs, and
/// the Syrian-pound cross-rates.
///
/// Pure function of its inputs — no I/O, no clock, no hidden state.
/// Total: any combination of zero/absent inputs produces a well-formed
/// output with zeros in the unavailable slots, never NaN or infinity.
/// This is a display system, not a ledger; silent degradation beats
/// throwing.
pub struct PriceResolver {
    config: MarketConfig,
}

impl PriceResolver {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Compute the full derived price set.
    ///
    /// The whole output is rebuilt on every call — callers must never
    /// patch individual fields of a previous result.
    pub fn resolve(&self, raw: &RawQuote, overrides: &ManualOverrides) -> DerivedPrices {
        let effective_ounce = overrides.effective_ounce().unwrap_or(raw.gold_ounce);
        let effective_syp_sell = overrides.effective_syp().unwrap_or(raw.usd_syp);

        // The informal buy side sits a fixed absolute offset under the
        // sell rate. Clamped so a thin sell rate can't go negative.
        let effective_syp_buy = if effective_syp_sell > 0.0 {
            (effective_syp_sell - self.config.syp_spread).max(0.0)
        } else {
            0.0
        };

        let gold_24 = if effective_ounce > 0.0 {
            effective_ounce / GRAMS_PER_TROY_OUNCE
        } else {
            0.0
        };
        let gold_21 = gold_24 * (21.0 / 24.0);
        let gold_18 = gold_24 * (18.0 / 24.0);

        let gold_21_syp = if effective_syp_sell > 0.0 {
            gold_21 * effective_syp_sell
        } else {
            0.0
        };

        // TRY/SYP cross divides by the raw TRY rate; fall back to the
        // configured constant when the feed omitted it.
        let try_rate = if raw.usd_try > 0.0 {
            raw.usd_try
        } else {
            self.config.try_fallback_rate
        };

        let try_syp_sell = if effective_syp_sell > 0.0 {
            effective_syp_sell / try_rate
        } else {
            0.0
        };
        let try_syp_buy = if effective_syp_buy > 0.0 {
            effective_syp_buy / try_rate
        } else {
            0.0
        };

        DerivedPrices {
            metals: MetalPrices {
                gold_ounce: effective_ounce,
                gold_24,
                gold_21,
                gold_18,
                gold_21_syp,
                silver_ounce: raw.silver_ounce,
                change_24h: raw.change_24h,
                is_live: raw.is_live,
            },
            currencies: CurrencyPrices {
                // The feed quotes a single mid rate for TRY and EUR;
                // buy/sell legs are synthesized from it.
                usd_try_buy: raw.usd_try * self.config.try_buy_factor,
                usd_try_sell: raw.usd_try * self.config.try_sell_factor,
                usd_eur_buy: raw.usd_eur * self.config.eur_buy_factor,
                usd_eur_sell: raw.usd_eur * self.config.eur_sell_factor,
                usd_syp_buy: effective_syp_buy,
                usd_syp_sell: effective_syp_sell,
                try_syp_buy,
                try_syp_sell,
                last_updated: raw.as_of,
                is_live: raw.is_live,
            },
        }
    }
}

impl Default for PriceResolver {
    fn default() -> Self {
        Self::new(MarketConfig::default())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grams per troy ounce — the constant that anchors every gold purity price.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1034768;

/// Per-gram and per-ounce metal prices derived from a raw quote.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetalPrices {
    /// USD per troy ounce of gold (after any manual override).
    pub gold_ounce: f64,

    /// USD per gram, 24 karat (pure).
    pub gold_24: f64,

    /// USD per gram, 21 karat.
    pub gold_21: f64,

    /// USD per gram, 18 karat.
    pub gold_18: f64,

    /// SYP per gram of 21K gold. `0.0` when no SYP rate is available.
    pub gold_21_syp: f64,

    /// USD per troy ounce of silver.
    pub silver_ounce: f64,

    /// Gold 24h percent change.
    pub change_24h: f64,

    /// True when the underlying quote came from the live feed.
    pub is_live: bool,
}

/// Buy/sell currency legs derived from a raw quote.
///
/// TRY and EUR legs carry a synthetic spread applied to the feed's
/// single mid rate. SYP legs come from the informal-market rate and are
/// `0.0` whenever that rate is unavailable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrencyPrices {
    pub usd_try_buy: f64,
    pub usd_try_sell: f64,
    pub usd_eur_buy: f64,
    pub usd_eur_sell: f64,
    pub usd_syp_buy: f64,
    pub usd_syp_sell: f64,
    pub try_syp_buy: f64,
    pub try_syp_sell: f64,

    /// When the underlying quote was fetched.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    pub is_live: bool,
}

/// The complete derived price set — output of the resolver, input to the
/// valuator and converter. Recomputed whole on every input change, never
/// patched field by field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedPrices {
    pub metals: MetalPrices,
    pub currencies: CurrencyPrices,
}

impl DerivedPrices {
    /// Whether a Syrian-pound rate is available. The display layer hides
    /// all SYP cards when this is false.
    pub fn has_syp(&self) -> bool {
        self.currencies.usd_syp_sell > 0.0
    }
}

use serde::{Deserialize, Serialize};

use crate::models::holding::CurrencyCode;
use crate::models::prices::DerivedPrices;
use crate::services::valuator::rate_to_usd;

/// A unit the manual converter can translate between. Gold units are
/// priced per gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConvertUnit {
    Usd,
    Gold24,
    Gold21,
    Gold18,
    Try,
    Eur,
    Syp,
}

impl std::fmt::Display for ConvertUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertUnit::Usd => write!(f, "USD"),
            ConvertUnit::Gold24 => write!(f, "GOLD24"),
            ConvertUnit::Gold21 => write!(f, "GOLD21"),
            ConvertUnit::Gold18 => write!(f, "GOLD18"),
            ConvertUnit::Try => write!(f, "TRY"),
            ConvertUnit::Eur => write!(f, "EUR"),
            ConvertUnit::Syp => write!(f, "SYP"),
        }
    }
}

/// Manual unit converter over the derived price set.
///
/// Every unit is pivoted through USD: `result = amount × rate(from) /
/// rate(to)`. Total function — an unavailable unit converts to zero.
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// USD value of one unit of `unit` under `prices`.
    pub fn usd_rate(&self, unit: ConvertUnit, prices: &DerivedPrices) -> f64 {
        match unit {
            ConvertUnit::Usd => 1.0,
            ConvertUnit::Gold24 => prices.metals.gold_24,
            ConvertUnit::Gold21 => prices.metals.gold_21,
            ConvertUnit::Gold18 => prices.metals.gold_18,
            ConvertUnit::Try => rate_to_usd(CurrencyCode::Try, prices),
            ConvertUnit::Eur => rate_to_usd(CurrencyCode::Eur, prices),
            ConvertUnit::Syp => rate_to_usd(CurrencyCode::Syp, prices),
        }
    }

    /// Convert `amount` of `from` into `to`.
    ///
    /// Non-finite amounts are treated as zero, and a target with no
    /// available rate yields zero rather than infinity.
    pub fn convert(
        &self,
        amount: f64,
        from: ConvertUnit,
        to: ConvertUnit,
        prices: &DerivedPrices,
    ) -> f64 {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let from_rate = self.usd_rate(from, prices);
        let to_rate = self.usd_rate(to, prices);

        if to_rate > 0.0 {
            amount * from_rate / to_rate
        } else {
            0.0
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

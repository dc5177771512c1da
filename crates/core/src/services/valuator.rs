use crate::models::holding::{CurrencyCode, Holding, HoldingKind, Purity};
use crate::models::prices::DerivedPrices;
use crate::models::valuation::{HoldingValue, PortfolioValuation};

/// Values a set of holdings against a derived price set.
///
/// Pure and total: a holding whose rate is unavailable values at zero
/// rather than being skipped, so the aggregate totals are always
/// defined. Summation order is irrelevant to callers.
pub struct PortfolioValuator;

impl PortfolioValuator {
    pub fn new() -> Self {
        Self
    }

    /// Value every holding and sum the totals.
    ///
    /// The SYP figure of every holding uses the one shared
    /// `usd_syp_sell` rate, so all entries stay mutually consistent
    /// even though cash holdings reach USD through different
    /// cross-rates.
    pub fn valuate(&self, holdings: &[Holding], prices: &DerivedPrices) -> PortfolioValuation {
        let syp_rate = prices.currencies.usd_syp_sell;

        let mut items = Vec::with_capacity(holdings.len());
        let mut total_usd = 0.0;
        let mut total_syp = 0.0;

        for holding in holdings {
            let value_usd = self.value_usd(&holding.kind, prices);
            let value_syp = value_usd * syp_rate;

            total_usd += value_usd;
            total_syp += value_syp;

            items.push(HoldingValue {
                id: holding.id,
                value_usd,
                value_syp,
            });
        }

        PortfolioValuation {
            items,
            total_usd,
            total_syp,
        }
    }

    /// USD value of a single holding.
    fn value_usd(&self, kind: &HoldingKind, prices: &DerivedPrices) -> f64 {
        match kind {
            HoldingKind::Metal { purity, grams } => {
                let per_gram = match purity {
                    Purity::K24 => prices.metals.gold_24,
                    Purity::K21 => prices.metals.gold_21,
                    Purity::K18 => prices.metals.gold_18,
                };
                grams * per_gram
            }
            HoldingKind::Cash { currency, amount } => amount * rate_to_usd(*currency, prices),
        }
    }
}

impl Default for PortfolioValuator {
    fn default() -> Self {
        Self::new()
    }
}

/// How many USD one unit of `currency` is worth under `prices`.
/// A zero divisor makes the rate zero, never infinite.
pub fn rate_to_usd(currency: CurrencyCode, prices: &DerivedPrices) -> f64 {
    match currency {
        CurrencyCode::Usd => 1.0,
        CurrencyCode::Try => {
            let sell = prices.currencies.usd_try_sell;
            if sell > 0.0 {
                1.0 / sell
            } else {
                0.0
            }
        }
        CurrencyCode::Eur => prices.currencies.usd_eur_sell,
        CurrencyCode::Syp => {
            let sell = prices.currencies.usd_syp_sell;
            if sell > 0.0 {
                1.0 / sell
            } else {
                0.0
            }
        }
    }
}

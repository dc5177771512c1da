use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gold purity of a metal holding. Prices scale linearly with the
/// karat fraction from the 24K per-gram base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purity {
    #[serde(rename = "24K")]
    K24,
    #[serde(rename = "21K")]
    K21,
    #[serde(rename = "18K")]
    K18,
}

impl Purity {
    /// Gold content as a fraction of pure (24/24, 21/24, 18/24).
    pub fn fraction(&self) -> f64 {
        match self {
            Purity::K24 => 24.0 / 24.0,
            Purity::K21 => 21.0 / 24.0,
            Purity::K18 => 18.0 / 24.0,
        }
    }
}

impl std::fmt::Display for Purity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Purity::K24 => write!(f, "24K"),
            Purity::K21 => write!(f, "21K"),
            Purity::K18 => write!(f, "18K"),
        }
    }
}

/// Currency of a cash holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "TRY")]
    Try,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "SYP")]
    Syp,
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurrencyCode::Usd => write!(f, "USD"),
            CurrencyCode::Try => write!(f, "TRY"),
            CurrencyCode::Eur => write!(f, "EUR"),
            CurrencyCode::Syp => write!(f, "SYP"),
        }
    }
}

/// What a holding actually is. A tagged variant so that a metal holding
/// cannot carry a currency code and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HoldingKind {
    /// Physical gold, weighed in grams.
    Metal { purity: Purity, grams: f64 },
    /// Cash in one of the tracked currencies.
    Cash { currency: CurrencyCode, amount: f64 },
}

impl HoldingKind {
    /// The holding's quantity: grams for metal, units for cash.
    pub fn amount(&self) -> f64 {
        match self {
            HoldingKind::Metal { grams, .. } => *grams,
            HoldingKind::Cash { amount, .. } => *amount,
        }
    }
}

/// A single portfolio entry. Identity is assigned at creation and never
/// changes; edits replace the `kind` in place.
///
/// Holdings never store price snapshots — valuation always reads the
/// current derived prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier.
    pub id: Uuid,

    /// Metal or cash, with the fields relevant to that case only.
    pub kind: HoldingKind,
}

impl Holding {
    pub fn new(kind: HoldingKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }

    /// Convenience constructors for the two cases
    pub fn metal(purity: Purity, grams: f64) -> Self {
        Self::new(HoldingKind::Metal { purity, grams })
    }

    pub fn cash(currency: CurrencyCode, amount: f64) -> Self {
        Self::new(HoldingKind::Cash { currency, amount })
    }
}

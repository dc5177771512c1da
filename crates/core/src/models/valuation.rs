use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The value of one holding in both reporting currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValue {
    /// The holding this value belongs to.
    pub id: Uuid,

    /// Value in US dollars.
    pub value_usd: f64,

    /// Value in Syrian pounds: value_usd × the shared USD/SYP sell rate.
    /// `0.0` when that rate is unavailable.
    pub value_syp: f64,
}

/// A full portfolio valuation, recomputed from scratch on every render.
///
/// Holdings with unresolvable rates value at zero rather than being
/// skipped, so the totals stay defined even when the Syrian-pound leg
/// is down.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Per-holding values, in portfolio order.
    pub items: Vec<HoldingValue>,

    /// Sum of value_usd over all holdings.
    pub total_usd: f64,

    /// Sum of value_syp over all holdings. Summed independently, not
    /// derived from total_usd.
    pub total_syp: f64,
}

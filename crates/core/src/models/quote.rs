use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw market snapshot as delivered by the quote feed.
///
/// Every numeric field may legitimately be `0.0` — feeds omit legs all
/// the time, and the informal USD/SYP market has no standard source at
/// all. Consumers must guard every division on these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    /// USD per troy ounce of gold, spot. `0.0` = unavailable.
    pub gold_ounce: f64,

    /// USD per troy ounce of silver.
    pub silver_ounce: f64,

    /// USD/TRY mid rate. The feed quotes a single rate, no buy/sell split.
    pub usd_try: f64,

    /// USD/EUR mid rate.
    pub usd_eur: f64,

    /// USD/SYP sell rate. `0.0` = unavailable (standard feeds don't
    /// quote the informal Syrian-pound market).
    pub usd_syp: f64,

    /// Gold 24h percent change. Informational pass-through.
    pub change_24h: f64,

    /// True when the primary feed answered this request.
    pub is_live: bool,

    /// When this snapshot was fetched.
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

impl Default for RawQuote {
    fn default() -> Self {
        Self {
            gold_ounce: 0.0,
            silver_ounce: 0.0,
            usd_try: 0.0,
            usd_eur: 0.0,
            usd_syp: 0.0,
            change_24h: 0.0,
            is_live: false,
            as_of: None,
        }
    }
}

/// A single point in a historical price series.
///
/// Timestamps are epoch milliseconds, matching what charting frontends
/// consume directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub value: f64,
}

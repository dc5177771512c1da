use chrono::Utc;
use log::{debug, warn};

use crate::models::quote::RawQuote;
use crate::providers::binance::BinanceProvider;
use crate::providers::er_api::ErApiProvider;
use crate::providers::traits::{ForexRateProvider, SpotMetalProvider};

/// Hardcoded fallback quote used when a leg has never been fetched
/// successfully. SYP stays at zero: there is no standard source for the
/// informal market, so it only ever comes from the feed or an override.
pub const FALLBACK_GOLD_OUNCE: f64 = 2910.0;
pub const FALLBACK_SILVER_OUNCE: f64 = 31.5;
pub const FALLBACK_USD_TRY: f64 = 34.95;
pub const FALLBACK_USD_EUR: f64 = 1.058;

/// Composes the spot and forex providers into one best-effort snapshot.
///
/// The degradation ladder per leg: live feed → caller's last-known-good
/// value → hardcoded fallback. `fetch_latest` therefore never fails and
/// never returns a value that would make a later division produce NaN
/// or infinity — the resolver can always be invoked on its output.
///
/// Feed failures are never surfaced as errors; only the `is_live` flag
/// differs, and the stale quote keeps being displayed while the next
/// poll is in flight.
pub struct QuoteService {
    spot: Box<dyn SpotMetalProvider>,
    forex: Box<dyn ForexRateProvider>,
}

impl QuoteService {
    /// Service wired to the default feeds.
    pub fn new() -> Self {
        Self {
            spot: Box::new(BinanceProvider::new()),
            forex: Box::new(ErApiProvider::new()),
        }
    }

    /// Service with explicit providers (tests, alternative feeds).
    pub fn with_providers(
        spot: Box<dyn SpotMetalProvider>,
        forex: Box<dyn ForexRateProvider>,
    ) -> Self {
        Self { spot, forex }
    }

    /// Fetch a fresh snapshot, degrading leg by leg to `last_good` and
    /// then to the fallback constants. Total — always returns a usable
    /// quote.
    pub async fn fetch_latest(&self, last_good: Option<&RawQuote>) -> RawQuote {
        let spot = self.spot.fetch_spot().await;
        let rates = self.forex.fetch_rates().await;

        let is_live = spot.is_ok();

        let (gold_ounce, change_24h) = match spot {
            Ok(s) => (sanitize(s.gold_ounce), sanitize(s.change_24h)),
            Err(e) => {
                warn!("{} spot fetch failed: {e}", self.spot.name());
                (
                    last_good
                        .map(|q| q.gold_ounce)
                        .filter(|p| *p > 0.0)
                        .unwrap_or(FALLBACK_GOLD_OUNCE),
                    last_good.map(|q| q.change_24h).unwrap_or(0.0),
                )
            }
        };

        let (usd_try, usd_eur, silver_ounce) = match rates {
            Ok(r) => (
                sanitize(r.usd_try),
                sanitize(r.usd_eur),
                r.silver_ounce.map(sanitize).filter(|p| *p > 0.0).unwrap_or_else(|| {
                    last_good
                        .map(|q| q.silver_ounce)
                        .filter(|p| *p > 0.0)
                        .unwrap_or(FALLBACK_SILVER_OUNCE)
                }),
            ),
            Err(e) => {
                warn!("{} rate fetch failed: {e}", self.forex.name());
                (
                    last_good
                        .map(|q| q.usd_try)
                        .filter(|p| *p > 0.0)
                        .unwrap_or(FALLBACK_USD_TRY),
                    last_good
                        .map(|q| q.usd_eur)
                        .filter(|p| *p > 0.0)
                        .unwrap_or(FALLBACK_USD_EUR),
                    last_good
                        .map(|q| q.silver_ounce)
                        .filter(|p| *p > 0.0)
                        .unwrap_or(FALLBACK_SILVER_OUNCE),
                )
            }
        };

        // No standard feed quotes the informal SYP market; carry the
        // last value forward unchanged.
        let usd_syp = last_good.map(|q| q.usd_syp).unwrap_or(0.0);

        debug!(
            "quote refresh: gold={gold_ounce:.2} try={usd_try:.2} eur={usd_eur:.3} live={is_live}"
        );

        RawQuote {
            gold_ounce,
            silver_ounce,
            usd_try,
            usd_eur,
            usd_syp,
            change_24h,
            is_live,
            as_of: Some(Utc::now()),
        }
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp non-finite feed values to zero so they can never reach a
/// division downstream.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

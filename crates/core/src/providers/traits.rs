use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::{ChartSymbol, Period};
use crate::models::quote::PricePoint;

/// A gold spot quote from the metals feed.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalSpot {
    /// USD per troy ounce of gold.
    pub gold_ounce: f64,

    /// 24h percent change.
    pub change_24h: f64,
}

/// USD exchange rates from the forex feed.
///
/// Optional legs are ones the feed may simply not carry; `None` means
/// "not quoted this time", which the quote service degrades gracefully.
#[derive(Debug, Clone, PartialEq)]
pub struct ForexRates {
    /// USD/TRY mid rate.
    pub usd_try: f64,

    /// USD/EUR mid rate.
    pub usd_eur: f64,

    /// USD per troy ounce of silver, when the feed quotes XAG.
    pub silver_ounce: Option<f64>,
}

/// Trait abstraction for the gold spot source.
///
/// Each feed implements one of these small traits. If a feed dies or
/// changes shape, only its implementation is replaced — the quote
/// service and everything above it are untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SpotMetalProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the current gold spot quote.
    async fn fetch_spot(&self) -> Result<MetalSpot, CoreError>;
}

/// Trait abstraction for the forex rate source.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ForexRateProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Fetch the current USD rate set.
    async fn fetch_rates(&self) -> Result<ForexRates, CoreError>;
}

/// Trait abstraction for the historical series source.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HistoryProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this provider has a series for the symbol at all.
    fn supports(&self, symbol: ChartSymbol) -> bool;

    /// Fetch the series for a symbol over a period, oldest first.
    async fn fetch_series(
        &self,
        symbol: ChartSymbol,
        period: Period,
    ) -> Result<Vec<PricePoint>, CoreError>;
}

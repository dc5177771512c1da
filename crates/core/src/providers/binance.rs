use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::chart::{ChartSymbol, Period};
use crate::models::quote::PricePoint;
use super::traits::{HistoryProvider, MetalSpot, SpotMetalProvider};

const BASE_URL: &str = "https://api.binance.com/api/v3";

/// Binance market-data provider.
///
/// - **Free**: public endpoints, no API key.
/// - **Gold proxy**: PAXG/USDT tracks the gold ounce closely enough for
///   a display feed; there is no true XAU spot on Binance.
/// - **Endpoints**: `/klines` (spot + history), `/ticker/24hr` (change).
///
/// Silver and the Syrian pound have no Binance series; `supports`
/// reports that honestly instead of substituting a lookalike symbol.
pub struct BinanceProvider {
    client: Client,
}

impl BinanceProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }

    /// Binance pair for a chart symbol, plus whether the close must be
    /// inverted. EURUSDT closes quote USD per EUR; the EUR series is
    /// reported as its inverse so all currency series read as
    /// units-per-USD.
    fn series_pair(symbol: ChartSymbol) -> Option<(&'static str, bool)> {
        match symbol {
            ChartSymbol::Gold => Some(("PAXGUSDT", false)),
            ChartSymbol::Eur => Some(("EURUSDT", true)),
            ChartSymbol::Try => Some(("USDTTRY", false)),
            ChartSymbol::Silver | ChartSymbol::Syp => None,
        }
    }

    async fn fetch_klines(
        &self,
        pair: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Kline>, CoreError> {
        let url = format!("{BASE_URL}/klines");
        let limit_str = limit.to_string();

        let raw: Vec<serde_json::Value> = self
            .client
            .get(&url)
            .query(&[
                ("symbol", pair),
                ("interval", interval),
                ("limit", limit_str.as_str()),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Binance".into(),
                message: format!("Failed to parse klines for {pair}: {e}"),
            })?;

        let mut klines = Vec::with_capacity(raw.len());
        for row in &raw {
            if let Some(kline) = parse_kline(row) {
                klines.push(kline);
            }
        }

        if klines.is_empty() {
            return Err(CoreError::Api {
                provider: "Binance".into(),
                message: format!("Empty kline response for {pair}"),
            });
        }

        Ok(klines)
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// One parsed candle: open time (epoch ms) and close price.
#[derive(Debug, Clone, PartialEq)]
pub struct Kline {
    pub open_time: i64,
    pub close: f64,
}

/// Binance klines are positional JSON arrays:
/// `[openTime, open, high, low, close, volume, ...]` with prices as
/// strings. Returns `None` on any malformed row.
pub fn parse_kline(row: &serde_json::Value) -> Option<Kline> {
    let arr = row.as_array()?;
    let open_time = arr.first()?.as_i64()?;
    let close = arr.get(4)?.as_str()?.parse::<f64>().ok()?;
    if !close.is_finite() {
        return None;
    }
    Some(Kline { open_time, close })
}

// ── Binance API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct Ticker24h {
    #[serde(rename = "priceChangePercent")]
    price_change_percent: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SpotMetalProvider for BinanceProvider {
    fn name(&self) -> &str {
        "Binance"
    }

    async fn fetch_spot(&self) -> Result<MetalSpot, CoreError> {
        // Latest 1-minute candle close = current spot.
        let klines = self.fetch_klines("PAXGUSDT", "1m", 1).await?;
        let gold_ounce = klines
            .last()
            .map(|k| k.close)
            .filter(|p| *p > 0.0)
            .ok_or_else(|| CoreError::Api {
                provider: "Binance".into(),
                message: "No usable gold spot candle".into(),
            })?;

        // 24h change is informational; a failure here doesn't sink the quote.
        let change_24h = self.fetch_change_24h().await.unwrap_or(0.0);

        Ok(MetalSpot {
            gold_ounce,
            change_24h,
        })
    }
}

impl BinanceProvider {
    async fn fetch_change_24h(&self) -> Result<f64, CoreError> {
        let url = format!("{BASE_URL}/ticker/24hr");
        let ticker: Ticker24h = self
            .client
            .get(&url)
            .query(&[("symbol", "PAXGUSDT")])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Binance".into(),
                message: format!("Failed to parse 24h ticker: {e}"),
            })?;

        ticker
            .price_change_percent
            .parse::<f64>()
            .map_err(|e| CoreError::Api {
                provider: "Binance".into(),
                message: format!("Unparseable 24h change: {e}"),
            })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HistoryProvider for BinanceProvider {
    fn name(&self) -> &str {
        "Binance"
    }

    fn supports(&self, symbol: ChartSymbol) -> bool {
        Self::series_pair(symbol).is_some()
    }

    async fn fetch_series(
        &self,
        symbol: ChartSymbol,
        period: Period,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let (pair, invert) = Self::series_pair(symbol)
            .ok_or_else(|| CoreError::NoHistorySource(symbol.to_string()))?;
        let (interval, limit) = period.interval_and_limit();

        let klines = self.fetch_klines(pair, interval, limit).await?;

        let points = klines
            .into_iter()
            .map(|k| {
                let value = if invert && k.close > 0.0 {
                    1.0 / k.close
                } else {
                    k.close
                };
                PricePoint {
                    timestamp: k.open_time,
                    value,
                }
            })
            .collect();

        Ok(points)
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use super::traits::{ForexRateProvider, ForexRates};

const BASE_URL: &str = "https://open.er-api.com/v6";

/// open.er-api.com provider for USD exchange rates.
///
/// - **Free**: no API key, daily-refreshed open data.
/// - **Base**: all rates quoted against USD in one `/latest/USD` call.
/// - **Coverage**: fiat currencies plus XAG/XAU troy-ounce rates.
///
/// The endpoint quotes units-per-USD. EUR arrives as EUR-per-USD and is
/// inverted to the USD/EUR mid the resolver expects; XAG (ounces of
/// silver per USD) inverts to the silver ounce price.
pub struct ErApiProvider {
    client: Client,
}

impl ErApiProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for ErApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── er-api response types ───────────────────────────────────────────

#[derive(Deserialize)]
struct LatestResponse {
    rates: HashMap<String, f64>,
}

/// Extract the rate set from a raw rates map. Split out of the HTTP
/// path so the mapping rules are testable offline.
pub fn rates_from_map(rates: &HashMap<String, f64>) -> Result<ForexRates, CoreError> {
    let usd_try = rates
        .get("TRY")
        .copied()
        .filter(|r| *r > 0.0)
        .ok_or_else(|| CoreError::Api {
            provider: "er-api".into(),
            message: "No TRY rate in response".into(),
        })?;

    let usd_eur = rates
        .get("EUR")
        .copied()
        .filter(|r| *r > 0.0)
        .map(|r| 1.0 / r)
        .ok_or_else(|| CoreError::Api {
            provider: "er-api".into(),
            message: "No EUR rate in response".into(),
        })?;

    let silver_ounce = rates
        .get("XAG")
        .copied()
        .filter(|r| *r > 0.0)
        .map(|r| 1.0 / r);

    Ok(ForexRates {
        usd_try,
        usd_eur,
        silver_ounce,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ForexRateProvider for ErApiProvider {
    fn name(&self) -> &str {
        "er-api"
    }

    async fn fetch_rates(&self) -> Result<ForexRates, CoreError> {
        let url = format!("{BASE_URL}/latest/USD");

        let resp: LatestResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "er-api".into(),
                message: format!("Failed to parse latest rates: {e}"),
            })?;

        rates_from_map(&resp.rates)
    }
}

use log::debug;

use crate::errors::CoreError;
use crate::models::chart::{ChartSymbol, Period};
use crate::models::quote::PricePoint;
use crate::providers::binance::BinanceProvider;
use crate::providers::traits::HistoryProvider;

/// Retrieves historical price series for chart rendering.
///
/// Each (symbol, period) change is a fresh request — there is no
/// incremental refresh. Symbols with no series source (silver, the
/// informal Syrian pound) return an empty vec: "no data" is a valid
/// answer, distinct from a transport error, and callers render it as
/// an empty chart rather than an error state.
pub struct HistoryService {
    provider: Box<dyn HistoryProvider>,
}

impl HistoryService {
    pub fn new() -> Self {
        Self {
            provider: Box::new(BinanceProvider::new()),
        }
    }

    pub fn with_provider(provider: Box<dyn HistoryProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the series for a symbol over a period, oldest first.
    pub async fn fetch(
        &self,
        symbol: ChartSymbol,
        period: Period,
    ) -> Result<Vec<PricePoint>, CoreError> {
        if !self.provider.supports(symbol) {
            debug!("no history source for {symbol}, returning empty series");
            return Ok(Vec::new());
        }

        let mut points = self.provider.fetch_series(symbol, period).await?;

        // Providers should already deliver oldest-first; enforce it so
        // chart consumers can rely on chronological order.
        points.sort_by_key(|p| p.timestamp);

        Ok(points)
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}

pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use std::time::Duration;

use models::{
    chart::{ChartSymbol, Period},
    config::MarketConfig,
    holding::{Holding, HoldingKind},
    prices::DerivedPrices,
    profile::Profile,
    quote::{PricePoint, RawQuote},
    valuation::PortfolioValuation,
};
use services::{
    converter::{Converter, ConvertUnit},
    history_service::HistoryService,
    portfolio_service::PortfolioService,
    quote_service::QuoteService,
    resolver::PriceResolver,
    valuator::PortfolioValuator,
};
use storage::store::ProfileStore;

use errors::CoreError;

/// How often the embedding application should poll the quote feed.
/// The timer itself lives with the caller so the library stays
/// clock-free and testable.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2 * 60);

/// Main entry point for the Mizan core library.
///
/// Owns the user profile (holdings, overrides, spread config), the
/// last-known-good raw quote, and the services that operate on them.
/// Prices shown to the user are always resolved from the retained
/// quote, so a refresh that fails — or is still in flight — never
/// blanks the display (stale-while-revalidate).
#[must_use]
pub struct Mizan {
    profile: Profile,
    quote: RawQuote,
    resolver: PriceResolver,
    valuator: PortfolioValuator,
    converter: Converter,
    portfolio_service: PortfolioService,
    quote_service: QuoteService,
    history_service: HistoryService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for Mizan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mizan")
            .field("holdings", &self.profile.holdings.len())
            .field("overrides", &self.profile.overrides)
            .field("quote_live", &self.quote.is_live)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Mizan {
    /// Create a fresh instance with an empty profile and default config.
    pub fn create_new() -> Self {
        Self::build(Profile::default())
    }

    /// Load a profile from serialized bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let profile = ProfileStore::load_from_bytes(data)?;
        Ok(Self::build(profile))
    }

    /// Load a profile from bytes, falling back to an empty profile on
    /// any error. Missing or corrupt persisted state means "start
    /// fresh", never a startup failure.
    pub fn load_or_new(data: Option<&[u8]>) -> Self {
        match data {
            Some(bytes) => match ProfileStore::load_from_bytes(bytes) {
                Ok(profile) => Self::build(profile),
                Err(e) => {
                    log::warn!("profile unreadable, starting empty: {e}");
                    Self::create_new()
                }
            },
            None => Self::create_new(),
        }
    }

    /// Serialize the current profile. Clears the unsaved-changes flag.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = ProfileStore::save_to_bytes(&self.profile)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from a profile file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let profile = ProfileStore::load_from_file(path)?;
        Ok(Self::build(profile))
    }

    /// Save to a profile file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        ProfileStore::save_to_file(&self.profile, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Prices ──────────────────────────────────────────────────────

    /// Resolve the full derived price set from the retained quote and
    /// the current overrides. Cheap enough to call on every render.
    #[must_use]
    pub fn current_prices(&self) -> DerivedPrices {
        self.resolver.resolve(&self.quote, &self.profile.overrides)
    }

    /// Fetch a fresh quote from the feeds and make it current.
    ///
    /// Degrades leg by leg to the previous quote and then to fallback
    /// constants — never fails, never blanks the display. Last applied
    /// wins; there is no sequencing of overlapping refreshes.
    pub async fn refresh(&mut self) -> DerivedPrices {
        let quote = self.quote_service.fetch_latest(Some(&self.quote)).await;
        self.quote = quote;
        self.current_prices()
    }

    /// The raw quote currently backing the derived prices.
    #[must_use]
    pub fn raw_quote(&self) -> &RawQuote {
        &self.quote
    }

    /// Replace the retained quote directly (embedding apps that run
    /// their own fetch loop, and tests).
    pub fn set_raw_quote(&mut self, quote: RawQuote) {
        self.quote = quote;
    }

    /// Whether a Syrian-pound rate is currently available.
    #[must_use]
    pub fn has_syp_rate(&self) -> bool {
        self.current_prices().has_syp()
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Add a holding to the portfolio. Returns its assigned id.
    pub fn add_holding(&mut self, kind: HoldingKind) -> Result<uuid::Uuid, CoreError> {
        let id = self.portfolio_service.add(&mut self.profile, kind)?;
        self.dirty = true;
        Ok(id)
    }

    /// Replace an existing holding's contents, keeping its identity.
    pub fn update_holding(&mut self, id: uuid::Uuid, kind: HoldingKind) -> Result<(), CoreError> {
        self.portfolio_service.update(&mut self.profile, id, kind)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a holding by id.
    pub fn remove_holding(&mut self, id: uuid::Uuid) -> Result<(), CoreError> {
        self.portfolio_service.remove(&mut self.profile, id)?;
        self.dirty = true;
        Ok(())
    }

    /// Get a single holding by id.
    #[must_use]
    pub fn get_holding(&self, id: uuid::Uuid) -> Option<&Holding> {
        self.portfolio_service.get(&self.profile, id)
    }

    /// All holdings, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.profile.holdings
    }

    /// Value the whole portfolio against the current derived prices.
    #[must_use]
    pub fn valuate_portfolio(&self) -> PortfolioValuation {
        let prices = self.current_prices();
        self.valuator.valuate(&self.profile.holdings, &prices)
    }

    // ── Manual overrides ────────────────────────────────────────────

    /// Set or clear the manual gold ounce price.
    pub fn set_manual_ounce(&mut self, value: Option<f64>) {
        self.profile.overrides.ounce = value;
        self.dirty = true;
    }

    /// Toggle whether the manual ounce price is applied.
    pub fn set_manual_ounce_active(&mut self, active: bool) {
        self.profile.overrides.ounce_active = active;
        self.dirty = true;
    }

    /// Set or clear the manual USD/SYP sell rate.
    pub fn set_manual_syp(&mut self, value: Option<f64>) {
        self.profile.overrides.syp = value;
        self.dirty = true;
    }

    /// Toggle whether the manual USD/SYP rate is applied.
    pub fn set_manual_syp_active(&mut self, active: bool) {
        self.profile.overrides.syp_active = active;
        self.dirty = true;
    }

    /// Current override state.
    #[must_use]
    pub fn overrides(&self) -> &models::overrides::ManualOverrides {
        &self.profile.overrides
    }

    // ── Converter ───────────────────────────────────────────────────

    /// Convert an amount between units at the current prices.
    #[must_use]
    pub fn convert(&self, amount: f64, from: ConvertUnit, to: ConvertUnit) -> f64 {
        let prices = self.current_prices();
        self.converter.convert(amount, from, to, &prices)
    }

    // ── History ─────────────────────────────────────────────────────

    /// Fetch the historical series for a chart. An empty vec is the
    /// valid "no data" answer for symbols without a series source.
    pub async fn history(
        &self,
        symbol: ChartSymbol,
        period: Period,
    ) -> Result<Vec<PricePoint>, CoreError> {
        self.history_service.fetch(symbol, period).await
    }

    // ── Config ──────────────────────────────────────────────────────

    /// Current spread/fallback policy.
    #[must_use]
    pub fn config(&self) -> &MarketConfig {
        self.resolver.config()
    }

    /// Replace the spread/fallback policy. Validated before it takes
    /// effect; the resolver is rebuilt so the next render uses it.
    pub fn set_config(&mut self, config: MarketConfig) -> Result<(), CoreError> {
        config.validate()?;
        self.profile.config = config.clone();
        self.resolver = PriceResolver::new(config);
        self.dirty = true;
        Ok(())
    }

    // ── Dirty state ─────────────────────────────────────────────────

    /// Returns `true` if the profile changed since the last save/load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(profile: Profile) -> Self {
        let resolver = PriceResolver::new(profile.config.clone());
        Self {
            profile,
            quote: RawQuote::default(),
            resolver,
            valuator: PortfolioValuator::new(),
            converter: Converter::new(),
            portfolio_service: PortfolioService::new(),
            quote_service: QuoteService::new(),
            history_service: HistoryService::new(),
            dirty: false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Integration Tests — the Mizan facade: quote → resolve → valuate,
// holdings CRUD, overrides, converter, save/load, dirty flag
// ═══════════════════════════════════════════════════════════════════

use mizan_core::errors::CoreError;
use mizan_core::models::config::MarketConfig;
use mizan_core::models::holding::{CurrencyCode, HoldingKind, Purity};
use mizan_core::models::prices::GRAMS_PER_TROY_OUNCE;
use mizan_core::models::quote::RawQuote;
use mizan_core::services::converter::ConvertUnit;
use mizan_core::{Mizan, POLL_INTERVAL};

fn market_quote() -> RawQuote {
    RawQuote {
        gold_ounce: 2945.0,
        silver_ounce: 31.5,
        usd_try: 34.95,
        usd_eur: 1.06,
        usd_syp: 15200.0,
        change_24h: 0.3,
        is_live: true,
        as_of: None,
    }
}

fn tracker_with_quote() -> Mizan {
    let mut tracker = Mizan::create_new();
    tracker.set_raw_quote(market_quote());
    tracker
}

// ═══════════════════════════════════════════════════════════════════
//  Startup & prices
// ═══════════════════════════════════════════════════════════════════

#[test]
fn new_tracker_is_clean_and_empty() {
    let tracker = Mizan::create_new();
    assert!(tracker.holdings().is_empty());
    assert!(!tracker.has_unsaved_changes());
    assert!(!tracker.has_syp_rate());
}

#[test]
fn prices_resolve_from_retained_quote() {
    let tracker = tracker_with_quote();
    let prices = tracker.current_prices();
    assert_eq!(prices.metals.gold_24, 2945.0 / GRAMS_PER_TROY_OUNCE);
    assert!(tracker.has_syp_rate());
}

#[test]
fn prices_before_any_quote_are_all_zero_but_finite() {
    let tracker = Mizan::create_new();
    let prices = tracker.current_prices();
    assert_eq!(prices.metals.gold_24, 0.0);
    assert!(prices.currencies.try_syp_sell.is_finite());
}

#[test]
fn poll_interval_is_two_minutes() {
    assert_eq!(POLL_INTERVAL.as_secs(), 120);
}

// ═══════════════════════════════════════════════════════════════════
//  Holdings CRUD through the facade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn add_edit_remove_holding() {
    let mut tracker = tracker_with_quote();

    let id = tracker
        .add_holding(HoldingKind::Metal {
            purity: Purity::K21,
            grams: 10.0,
        })
        .unwrap();
    assert_eq!(tracker.holdings().len(), 1);
    assert!(tracker.has_unsaved_changes());

    tracker
        .update_holding(
            id,
            HoldingKind::Cash {
                currency: CurrencyCode::Usd,
                amount: 500.0,
            },
        )
        .unwrap();
    assert_eq!(tracker.get_holding(id).unwrap().kind.amount(), 500.0);

    tracker.remove_holding(id).unwrap();
    assert!(tracker.holdings().is_empty());
}

#[test]
fn invalid_amount_never_reaches_the_portfolio() {
    let mut tracker = tracker_with_quote();
    let result = tracker.add_holding(HoldingKind::Metal {
        purity: Purity::K24,
        grams: 0.0,
    });
    assert!(matches!(result, Err(CoreError::ValidationError(_))));
    assert!(tracker.holdings().is_empty());
    assert!(!tracker.has_unsaved_changes());
}

#[test]
fn valuation_matches_hand_computation() {
    let mut tracker = tracker_with_quote();
    tracker
        .add_holding(HoldingKind::Metal {
            purity: Purity::K21,
            grams: 10.0,
        })
        .unwrap();
    tracker
        .add_holding(HoldingKind::Cash {
            currency: CurrencyCode::Usd,
            amount: 100.0,
        })
        .unwrap();

    let prices = tracker.current_prices();
    let valuation = tracker.valuate_portfolio();

    let expected_usd = 10.0 * prices.metals.gold_21 + 100.0;
    assert!((valuation.total_usd - expected_usd).abs() < 1e-9);
    assert!((valuation.total_syp - expected_usd * 15200.0).abs() < 1e-3);
}

// ═══════════════════════════════════════════════════════════════════
//  Overrides through the facade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn manual_ounce_flows_into_prices() {
    let mut tracker = tracker_with_quote();
    tracker.set_manual_ounce(Some(3000.0));
    tracker.set_manual_ounce_active(true);

    let prices = tracker.current_prices();
    assert_eq!(prices.metals.gold_ounce, 3000.0);
    assert_eq!(prices.metals.gold_24, 3000.0 / GRAMS_PER_TROY_OUNCE);

    // Deactivating restores the feed value without clearing the entry.
    tracker.set_manual_ounce_active(false);
    assert_eq!(tracker.current_prices().metals.gold_ounce, 2945.0);
    assert_eq!(tracker.overrides().ounce, Some(3000.0));
}

#[test]
fn manual_syp_enables_informal_market() {
    let mut tracker = Mizan::create_new();
    tracker.set_raw_quote(RawQuote {
        gold_ounce: 2945.0,
        usd_try: 34.95,
        usd_eur: 1.06,
        ..Default::default()
    });
    assert!(!tracker.has_syp_rate());

    tracker.set_manual_syp(Some(15200.0));
    tracker.set_manual_syp_active(true);
    assert!(tracker.has_syp_rate());

    let prices = tracker.current_prices();
    assert_eq!(prices.currencies.usd_syp_sell, 15200.0);
    assert_eq!(prices.currencies.usd_syp_buy, 15050.0);
}

// ═══════════════════════════════════════════════════════════════════
//  Converter through the facade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn convert_usd_to_gold() {
    let tracker = tracker_with_quote();
    let prices = tracker.current_prices();
    let grams = tracker.convert(1000.0, ConvertUnit::Usd, ConvertUnit::Gold24);
    assert!((grams - 1000.0 / prices.metals.gold_24).abs() < 1e-9);
}

#[test]
fn convert_respects_missing_syp() {
    let mut tracker = Mizan::create_new();
    tracker.set_raw_quote(RawQuote {
        gold_ounce: 2945.0,
        usd_try: 34.95,
        usd_eur: 1.06,
        ..Default::default()
    });
    assert_eq!(tracker.convert(100.0, ConvertUnit::Usd, ConvertUnit::Syp), 0.0);
}

// ═══════════════════════════════════════════════════════════════════
//  Config
// ═══════════════════════════════════════════════════════════════════

#[test]
fn config_change_applies_to_next_resolution() {
    let mut tracker = tracker_with_quote();
    tracker.set_manual_syp(Some(15200.0));
    tracker.set_manual_syp_active(true);

    tracker
        .set_config(MarketConfig {
            syp_spread: 500.0,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(tracker.current_prices().currencies.usd_syp_buy, 14700.0);
}

#[test]
fn invalid_config_is_rejected_and_ignored() {
    let mut tracker = tracker_with_quote();
    let result = tracker.set_config(MarketConfig {
        try_sell_factor: -1.0,
        ..Default::default()
    });
    assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    assert_eq!(tracker.config().try_sell_factor, 1.002);
}

// ═══════════════════════════════════════════════════════════════════
//  Persistence through the facade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn save_load_roundtrip_keeps_profile() {
    let mut tracker = tracker_with_quote();
    let id = tracker
        .add_holding(HoldingKind::Metal {
            purity: Purity::K18,
            grams: 25.0,
        })
        .unwrap();
    tracker.set_manual_syp(Some(15200.0));
    tracker.set_manual_syp_active(true);

    let bytes = tracker.save_to_bytes().unwrap();
    assert!(!tracker.has_unsaved_changes());

    let restored = Mizan::load_from_bytes(&bytes).unwrap();
    assert_eq!(restored.holdings().len(), 1);
    assert_eq!(restored.holdings()[0].id, id);
    assert_eq!(restored.overrides().syp, Some(15200.0));
    assert!(restored.overrides().syp_active);
    assert!(!restored.has_unsaved_changes());
}

#[test]
fn load_or_new_swallows_corrupt_data() {
    let tracker = Mizan::load_or_new(Some(b"definitely not a profile"));
    assert!(tracker.holdings().is_empty());
    assert!(!tracker.has_unsaved_changes());
}

#[test]
fn load_or_new_without_data_starts_fresh() {
    let tracker = Mizan::load_or_new(None);
    assert!(tracker.holdings().is_empty());
}

#[test]
fn file_roundtrip_through_facade() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mizan.json");
    let path = path.to_str().unwrap();

    let mut tracker = tracker_with_quote();
    tracker
        .add_holding(HoldingKind::Cash {
            currency: CurrencyCode::Try,
            amount: 40_000.0,
        })
        .unwrap();
    tracker.save_to_file(path).unwrap();

    let restored = Mizan::load_from_file(path).unwrap();
    assert_eq!(restored.holdings().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════
//  Stale-while-revalidate
// ═══════════════════════════════════════════════════════════════════

#[test]
fn replacing_the_quote_replaces_all_prices_at_once() {
    let mut tracker = tracker_with_quote();
    let before = tracker.current_prices();

    let mut newer = market_quote();
    newer.gold_ounce = 3000.0;
    tracker.set_raw_quote(newer);

    let after = tracker.current_prices();
    assert_eq!(before.metals.gold_24, 2945.0 / GRAMS_PER_TROY_OUNCE);
    assert_eq!(after.metals.gold_24, 3000.0 / GRAMS_PER_TROY_OUNCE);
    // The non-gold legs came along with the same snapshot.
    assert_eq!(after.currencies.usd_try_sell, before.currencies.usd_try_sell);
}

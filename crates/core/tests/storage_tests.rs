// ═══════════════════════════════════════════════════════════════════
// Storage Tests — ProfileStore bytes/file round-trips, version
// handling, tolerant loading
// ═══════════════════════════════════════════════════════════════════

use mizan_core::errors::CoreError;
use mizan_core::models::config::MarketConfig;
use mizan_core::models::holding::{CurrencyCode, Holding, Purity};
use mizan_core::models::profile::Profile;
use mizan_core::storage::store::{ProfileStore, CURRENT_VERSION};

fn sample_profile() -> Profile {
    let mut profile = Profile::default();
    profile.holdings.push(Holding::metal(Purity::K21, 10.0));
    profile.holdings.push(Holding::cash(CurrencyCode::Syp, 2_500_000.0));
    profile.overrides.ounce = Some(2950.0);
    profile.overrides.ounce_active = true;
    profile.overrides.syp = Some(15200.0);
    profile.overrides.syp_active = true;
    profile
}

// ═══════════════════════════════════════════════════════════════════
//  Bytes round-trips
// ═══════════════════════════════════════════════════════════════════

mod bytes {
    use super::*;

    #[test]
    fn roundtrip_preserves_everything() {
        let profile = sample_profile();
        let bytes = ProfileStore::save_to_bytes(&profile).unwrap();
        let loaded = ProfileStore::load_from_bytes(&bytes).unwrap();
        assert_eq!(profile, loaded);
    }

    #[test]
    fn roundtrip_of_empty_profile() {
        let profile = Profile::default();
        let bytes = ProfileStore::save_to_bytes(&profile).unwrap();
        let loaded = ProfileStore::load_from_bytes(&bytes).unwrap();
        assert_eq!(profile, loaded);
    }

    #[test]
    fn output_is_versioned_json() {
        let bytes = ProfileStore::save_to_bytes(&Profile::default()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], CURRENT_VERSION);
        assert!(value["holdings"].is_array());
    }

    #[test]
    fn custom_config_survives_roundtrip() {
        let mut profile = Profile::default();
        profile.config = MarketConfig {
            syp_spread: 200.0,
            ..Default::default()
        };
        let bytes = ProfileStore::save_to_bytes(&profile).unwrap();
        let loaded = ProfileStore::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.config.syp_spread, 200.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Malformed / versioned input
// ═══════════════════════════════════════════════════════════════════

mod tolerant_loading {
    use super::*;

    #[test]
    fn garbage_bytes_fail_cleanly() {
        let result = ProfileStore::load_from_bytes(b"\xff\xfe not json");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_is_a_deserialization_error() {
        let result = ProfileStore::load_from_bytes(b"{ not json }");
        assert!(matches!(result, Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn future_version_is_rejected() {
        let json = format!(r#"{{"version":{},"holdings":[]}}"#, CURRENT_VERSION + 1);
        let result = ProfileStore::load_from_bytes(json.as_bytes());
        assert!(matches!(result, Err(CoreError::UnsupportedVersion(_))));
    }

    #[test]
    fn version_zero_is_rejected() {
        let result = ProfileStore::load_from_bytes(br#"{"version":0}"#);
        assert!(matches!(result, Err(CoreError::UnsupportedVersion(0))));
    }

    #[test]
    fn missing_sections_load_as_defaults() {
        // An older or partially written profile: version only.
        let json = format!(r#"{{"version":{CURRENT_VERSION}}}"#);
        let loaded = ProfileStore::load_from_bytes(json.as_bytes()).unwrap();
        assert_eq!(loaded, Profile::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = format!(
            r#"{{"version":{CURRENT_VERSION},"holdings":[],"theme":"dark","language":"ar"}}"#
        );
        assert!(ProfileStore::load_from_bytes(json.as_bytes()).is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  File round-trips (native)
// ═══════════════════════════════════════════════════════════════════

mod files {
    use super::*;

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let path = path.to_str().unwrap();

        let profile = sample_profile();
        ProfileStore::save_to_file(&profile, path).unwrap();
        let loaded = ProfileStore::load_from_file(path).unwrap();
        assert_eq!(profile, loaded);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ProfileStore::load_from_file("/nonexistent/profile.json");
        assert!(matches!(result, Err(CoreError::FileIO(_))));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let path = path.to_str().unwrap();

        ProfileStore::save_to_file(&sample_profile(), path).unwrap();
        ProfileStore::save_to_file(&Profile::default(), path).unwrap();

        let loaded = ProfileStore::load_from_file(path).unwrap();
        assert_eq!(loaded, Profile::default());
    }
}

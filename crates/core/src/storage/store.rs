use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::profile::Profile;

/// Current profile format version.
pub const CURRENT_VERSION: u32 = 1;

/// The on-disk envelope: a version tag wrapping the profile fields.
///
/// All payload fields are `#[serde(default)]` on the model side, so an
/// older or partially written profile loads with the missing pieces at
/// their defaults instead of failing.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileEnvelope {
    version: u32,

    #[serde(flatten)]
    profile: Profile,
}

/// Profile persistence: plain versioned JSON, read at startup, written
/// on every mutation. Small enough that rewriting the whole document is
/// the simplest correct thing.
pub struct ProfileStore;

impl ProfileStore {
    /// Serialize a profile to JSON bytes.
    pub fn save_to_bytes(profile: &Profile) -> Result<Vec<u8>, CoreError> {
        let envelope = ProfileEnvelope {
            version: CURRENT_VERSION,
            profile: profile.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize profile: {e}")))?;
        Ok(json.into_bytes())
    }

    /// Deserialize a profile from JSON bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Profile, CoreError> {
        let text = std::str::from_utf8(data).map_err(|_| {
            CoreError::InvalidProfileFormat("Profile is not valid UTF-8".into())
        })?;

        let envelope: ProfileEnvelope = serde_json::from_str(text)
            .map_err(|e| CoreError::Deserialization(format!("Failed to parse profile: {e}")))?;

        if envelope.version == 0 || envelope.version > CURRENT_VERSION {
            return Err(CoreError::UnsupportedVersion(envelope.version));
        }

        Ok(envelope.profile)
    }

    /// Save a profile to a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(profile: &Profile, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(profile)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a profile from a file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Profile, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}

use serde::{Deserialize, Serialize};

/// User-entered price overrides, set through the converter screen and
/// persisted with the profile.
///
/// The resolver consults these on every recomputation and never mutates
/// them. Value and active flag are stored separately so a user can keep
/// a number typed in while toggling it on and off.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManualOverrides {
    /// Manual gold ounce price (USD). Only applied when active AND > 0.
    #[serde(default)]
    pub ounce: Option<f64>,

    #[serde(default)]
    pub ounce_active: bool,

    /// Manual USD/SYP sell rate. Applied whenever active and set —
    /// a zero value deliberately blanks every SYP leg.
    #[serde(default)]
    pub syp: Option<f64>,

    #[serde(default)]
    pub syp_active: bool,
}

impl ManualOverrides {
    /// The ounce override value, if it should take effect.
    pub fn effective_ounce(&self) -> Option<f64> {
        match self.ounce {
            Some(v) if self.ounce_active && v > 0.0 => Some(v),
            _ => None,
        }
    }

    /// The SYP override value, if it should take effect.
    pub fn effective_syp(&self) -> Option<f64> {
        match self.syp {
            Some(v) if self.syp_active => Some(v),
            _ => None,
        }
    }
}

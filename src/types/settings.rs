use serde::{Deserialize, Serialize};

/// Overlay presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// How long an overlay stays on screen before auto-dismissing, in ms.
    pub auto_dismiss_ms: u64,
    /// Whether the no-note reminder is shown at all.
    pub reminder_enabled: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5_000,
            reminder_enabled: true,
        }
    }
}

/// Background coordinator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorSettings {
    /// Delay between a tab event and the note lookup, in ms. Gives the
    /// page-side renderer time to initialize.
    pub check_delay_ms: u64,
    /// URL prefixes that are never checked (browser-internal schemes).
    pub denylist: Vec<String>,
}

impl CoordinatorSettings {
    pub fn default_denylist() -> Vec<String> {
        ["chrome://", "edge://", "about:", "devtools://"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            check_delay_ms: 2_000,
            denylist: Self::default_denylist(),
        }
    }
}

/// Top-level TabIntent settings, persisted as JSON at the platform
/// config path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabIntentSettings {
    pub overlay: OverlaySettings,
    pub coordinator: CoordinatorSettings,
}

//! Platform capability flags and mode-gating configuration.
//!
//! Platform detection (user-agent sniffing, feature probes that need a
//! DOM) stays in the host; this crate receives the results as plain
//! flags. Gating details that differ between deployed viewer generations
//! are configuration, not code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ArError;

/// The browser the host detected itself running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Safari,
    Chrome,
    #[default]
    Other,
}

impl FromStr for Browser {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safari" => Ok(Browser::Safari),
            "chrome" => Ok(Browser::Chrome),
            "other" => Ok(Browser::Other),
            other => Err(ArError::config(format!("unknown browser `{other}`"))),
        }
    }
}

/// Static platform-detection flags, probed once by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    /// Device can run an immersive WebXR AR session.
    pub webxr_capable: bool,
    /// Device/browser can hand off to Android Scene Viewer.
    pub scene_viewer_capable: bool,
    /// Browser can hand off to iOS AR Quick Look.
    pub quick_look_capable: bool,
    /// Running on Android.
    pub is_android: bool,
    /// Detected browser, for the Quick Look allowed set.
    pub browser: Browser,
}

/// Gating variants for the mode selector.
///
/// Deployed viewer generations disagree on two details: whether Scene
/// Viewer additionally requires an is-Android flag, and which browsers
/// may use Quick Look. Both are options here rather than hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeGating {
    /// Require [`Platform::is_android`] in addition to the Scene Viewer
    /// capability flag.
    pub scene_viewer_needs_android: bool,
    /// Browsers allowed to use Quick Look.
    pub quick_look_browsers: QuickLookBrowsers,
}

impl Default for ModeGating {
    fn default() -> Self {
        Self {
            scene_viewer_needs_android: false,
            quick_look_browsers: QuickLookBrowsers::default(),
        }
    }
}

/// Allowed-browser set for Quick Look, parsed from a space-separated
/// string (`"safari"`, `"safari chrome"`). Unknown tokens are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLookBrowsers {
    safari: bool,
    chrome: bool,
}

impl QuickLookBrowsers {
    pub fn parse(input: &str) -> Self {
        let mut set = Self {
            safari: false,
            chrome: false,
        };
        for token in input.split_whitespace() {
            match token {
                "safari" => set.safari = true,
                "chrome" => set.chrome = true,
                _ => {}
            }
        }
        set
    }

    /// Whether `browser` may use Quick Look. [`Browser::Other`] never may.
    pub fn allows(&self, browser: Browser) -> bool {
        match browser {
            Browser::Safari => self.safari,
            Browser::Chrome => self.chrome,
            Browser::Other => false,
        }
    }
}

impl Default for QuickLookBrowsers {
    /// Safari only — the conservative default for deployed pages.
    fn default() -> Self {
        Self {
            safari: true,
            chrome: false,
        }
    }
}

impl fmt::Display for QuickLookBrowsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (enabled, token) in [(self.safari, "safari"), (self.chrome, "chrome")] {
            if enabled {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(token)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Serialize for QuickLookBrowsers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for QuickLookBrowsers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

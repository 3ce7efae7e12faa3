//! AR presentation modes — the mode enum, the ordered preference list,
//! platform context, session blocks, and the selection algorithm.
//!
//! Selection is a pure, first-match-wins resolution: the host declares an
//! ordered preference string (e.g. `"webxr scene-viewer quick-look"`) and
//! the selector walks it against the platform's capability flags.

pub mod blocks;
pub mod context;
pub mod selector;

pub use blocks::SessionBlocks;
pub use context::{Browser, ModeGating, Platform, QuickLookBrowsers};
pub use selector::{select_mode, SelectionContext};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ArError;

/// An AR presentation path. Exactly one is active at a time;
/// [`ArMode::None`] means AR cannot currently be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArMode {
    /// iOS AR Quick Look, driven by a USDZ file.
    QuickLook,
    /// Android Scene Viewer, launched through an `intent://` URI.
    SceneViewer,
    /// Platform-native WebXR session presented by the viewer's renderer.
    WebXr,
    /// No AR path is currently available.
    #[default]
    None,
}

impl ArMode {
    /// The attribute token for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArMode::QuickLook => "quick-look",
            ArMode::SceneViewer => "scene-viewer",
            ArMode::WebXr => "webxr",
            ArMode::None => "none",
        }
    }
}

impl fmt::Display for ArMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArMode {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick-look" => Ok(ArMode::QuickLook),
            "scene-viewer" => Ok(ArMode::SceneViewer),
            "webxr" => Ok(ArMode::WebXr),
            "none" => Ok(ArMode::None),
            other => Err(ArError::config(format!("unknown ar mode `{other}`"))),
        }
    }
}

/// Ordered AR mode preferences, deserialized from a space-separated
/// attribute string such as `"webxr scene-viewer quick-look"`.
///
/// Duplicates and unknown tokens are dropped; `none` never enters the
/// list (it gates nothing). Order encodes priority: the first supported
/// mode wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePreferences {
    modes: Vec<ArMode>,
}

impl ModePreferences {
    /// Parse a space-separated preference string.
    pub fn parse(input: &str) -> Self {
        let mut modes = Vec::new();
        for token in input.split_whitespace() {
            match token.parse::<ArMode>() {
                Ok(ArMode::None) | Err(_) => {}
                Ok(mode) => {
                    if !modes.contains(&mode) {
                        modes.push(mode);
                    }
                }
            }
        }
        Self { modes }
    }

    /// Build from explicit modes; same dedup/`none` rules as [`parse`].
    ///
    /// [`parse`]: ModePreferences::parse
    pub fn from_modes(input: &[ArMode]) -> Self {
        let mut modes = Vec::new();
        for &mode in input {
            if mode != ArMode::None && !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        Self { modes }
    }

    pub fn iter(&self) -> impl Iterator<Item = ArMode> + '_ {
        self.modes.iter().copied()
    }

    pub fn as_slice(&self) -> &[ArMode] {
        &self.modes
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }
}

impl Default for ModePreferences {
    /// The default preference order: WebXR, then Scene Viewer, then
    /// Quick Look.
    fn default() -> Self {
        Self {
            modes: vec![ArMode::WebXr, ArMode::SceneViewer, ArMode::QuickLook],
        }
    }
}

impl fmt::Display for ModePreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mode) in self.modes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(mode.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for ModePreferences {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ModePreferences {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_token_roundtrip() {
        for mode in [
            ArMode::QuickLook,
            ArMode::SceneViewer,
            ArMode::WebXr,
            ArMode::None,
        ] {
            assert_eq!(mode.as_str().parse::<ArMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert!("magic-window".parse::<ArMode>().is_err());
    }

    #[test]
    fn preferences_parse_in_order() {
        let prefs = ModePreferences::parse("scene-viewer webxr quick-look");
        assert_eq!(
            prefs.as_slice(),
            &[ArMode::SceneViewer, ArMode::WebXr, ArMode::QuickLook]
        );
    }

    #[test]
    fn preferences_drop_duplicates_and_unknowns() {
        let prefs = ModePreferences::parse("webxr bogus webxr scene-viewer");
        assert_eq!(prefs.as_slice(), &[ArMode::WebXr, ArMode::SceneViewer]);
    }

    #[test]
    fn none_never_enters_the_list() {
        let prefs = ModePreferences::parse("none webxr");
        assert_eq!(prefs.as_slice(), &[ArMode::WebXr]);
    }

    #[test]
    fn empty_string_parses_to_empty_list() {
        let prefs = ModePreferences::parse("   ");
        assert!(prefs.is_empty());
        assert_eq!(prefs.len(), 0);
    }

    #[test]
    fn display_roundtrip() {
        let prefs = ModePreferences::parse("quick-look webxr");
        assert_eq!(prefs.to_string(), "quick-look webxr");
        assert_eq!(ModePreferences::parse(&prefs.to_string()), prefs);
    }

    #[test]
    fn from_modes_applies_same_rules() {
        let prefs =
            ModePreferences::from_modes(&[ArMode::WebXr, ArMode::None, ArMode::WebXr]);
        assert_eq!(prefs.as_slice(), &[ArMode::WebXr]);
    }

    #[test]
    fn serde_uses_string_form() {
        let prefs = ModePreferences::parse("webxr quick-look");
        let yaml = serde_yaml::to_string(&prefs).unwrap();
        assert!(yaml.contains("webxr quick-look"));
        let parsed: ModePreferences = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, prefs);
    }
}

//! Viewer configuration — one typed struct, one deserialization boundary.
//!
//! The host component's attribute strings (`ar-modes`, `ar-scale`,
//! `quick-look-browsers`) are parsed here exactly once into typed values
//! instead of being re-validated in every reactive update hook. The
//! whole struct also round-trips through YAML so the CLI and embedding
//! tools can describe a viewer setup in a file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArError;
use crate::intent::{ApplePayButtonKind, BannerHeight};
use crate::mode::ModePreferences;

/// Governs whether the user may rescale the placed model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArScale {
    #[default]
    Auto,
    Fixed,
}

impl ArScale {
    /// Parse the attribute token; anything unknown falls back to `auto`.
    pub fn parse(input: &str) -> Self {
        match input {
            "fixed" => ArScale::Fixed,
            _ => ArScale::Auto,
        }
    }

    /// `fixed` pins the model to the page-chosen scale.
    pub fn resizable(&self) -> bool {
        matches!(self, ArScale::Auto)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArScale::Auto => "auto",
            ArScale::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ArScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArScale {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ArScale::Auto),
            "fixed" => Ok(ArScale::Fixed),
            other => Err(ArError::config(format!("unknown ar scale `{other}`"))),
        }
    }
}

/// Full AR configuration for one viewer element.
///
/// Every field mirrors a public attribute of the host component. An
/// empty string is treated the same as an absent attribute throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArConfig {
    /// Master enable; AR is unreachable while false.
    pub ar: bool,
    /// Ordered mode preferences.
    pub modes: ModePreferences,
    pub scale: ArScale,
    /// GLB/GLTF asset for Scene Viewer and WebXR.
    pub src: Option<String>,
    /// USDZ asset for Quick Look; its presence gates the mode.
    pub ios_src: Option<String>,
    /// Model title shown on both platform banners.
    pub title: Option<String>,
    /// Canonical link for the model.
    pub link: Option<String>,
    // Quick Look banner extras.
    pub checkout_subtitle: Option<String>,
    pub price: Option<String>,
    pub apple_pay_button: Option<ApplePayButtonKind>,
    pub call_to_action: Option<String>,
    pub custom_banner: Option<String>,
    pub custom_banner_height: Option<BannerHeight>,
    // Scene Viewer extras.
    pub fallback_url: Option<String>,
    pub sound: Option<String>,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            ar: false,
            modes: ModePreferences::default(),
            scale: ArScale::Auto,
            src: None,
            ios_src: None,
            title: None,
            link: None,
            checkout_subtitle: None,
            price: None,
            apple_pay_button: None,
            call_to_action: None,
            custom_banner: None,
            custom_banner_height: None,
            fallback_url: None,
            sound: None,
        }
    }
}

impl ArConfig {
    /// Whether a Quick Look asset is configured.
    pub fn has_ios_src(&self) -> bool {
        self.ios_src.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether a Scene Viewer / WebXR asset is configured.
    pub fn has_src(&self) -> bool {
        self.src.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ArError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ArError::config(format!("read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| ArError::config(format!("parse {}: {e}", path.display())))
    }
}

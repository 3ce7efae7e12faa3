//! iOS AR Quick Look intent — a USDZ URL with fragment-encoded banner
//! parameters.
//!
//! Apple's viewer reads its banner configuration from the URL fragment:
//! `model.usdz#allowsContentScaling=0&checkoutTitle=...`. Three fields
//! are renamed on the wire (`title` → `checkoutTitle`, `resizable` →
//! `allowsContentScaling`, `link` → `canonicalWebPageURL`); the rest pass
//! through under their own names. All values are percent-encoded.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ArError;

use super::{resolve_against, ParamWriter};

/// Apple Pay button style shown on the Quick Look banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplePayButtonKind {
    Plain,
    Pay,
    Buy,
    CheckOut,
    Book,
    Donate,
    Subscribe,
}

impl ApplePayButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplePayButtonKind::Plain => "plain",
            ApplePayButtonKind::Pay => "pay",
            ApplePayButtonKind::Buy => "buy",
            ApplePayButtonKind::CheckOut => "check-out",
            ApplePayButtonKind::Book => "book",
            ApplePayButtonKind::Donate => "donate",
            ApplePayButtonKind::Subscribe => "subscribe",
        }
    }
}

impl fmt::Display for ApplePayButtonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplePayButtonKind {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "pay" => Ok(Self::Pay),
            "buy" => Ok(Self::Buy),
            "check-out" => Ok(Self::CheckOut),
            "book" => Ok(Self::Book),
            "donate" => Ok(Self::Donate),
            "subscribe" => Ok(Self::Subscribe),
            other => Err(ArError::config(format!(
                "unknown apple pay button kind `{other}`"
            ))),
        }
    }
}

/// Height of a custom Quick Look banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerHeight {
    Small,
    Medium,
    Large,
}

impl BannerHeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerHeight::Small => "small",
            BannerHeight::Medium => "medium",
            BannerHeight::Large => "large",
        }
    }
}

impl fmt::Display for BannerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BannerHeight {
    type Err = ArError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ArError::config(format!("unknown banner height `{other}`"))),
        }
    }
}

/// Parameters serialized into the Quick Look URL fragment.
#[derive(Debug, Clone)]
pub struct QuickLookParams {
    pub title: Option<String>,
    pub checkout_subtitle: Option<String>,
    pub price: Option<String>,
    /// `false` serializes as `allowsContentScaling=0`: the placed model
    /// keeps the page-chosen scale instead of letting the user pinch.
    pub resizable: bool,
    /// Canonical web page for the model; relative values resolve against
    /// the page.
    pub link: Option<String>,
    pub apple_pay_button: Option<ApplePayButtonKind>,
    /// Label for a plain (non Apple Pay) banner button.
    pub call_to_action: Option<String>,
    /// URL of a custom banner document; relative values resolve against
    /// the page.
    pub custom_banner: Option<String>,
    pub custom_banner_height: Option<BannerHeight>,
}

impl Default for QuickLookParams {
    fn default() -> Self {
        Self {
            title: None,
            checkout_subtitle: None,
            price: None,
            resizable: true,
            link: None,
            apple_pay_button: None,
            call_to_action: None,
            custom_banner: None,
            custom_banner_height: None,
        }
    }
}

/// An AR Quick Look activation target: a USDZ file plus its banner
/// parameters. Immutable; built fresh per activation attempt.
#[derive(Debug, Clone)]
pub struct QuickLookIntent {
    file: Url,
    params: QuickLookParams,
}

impl QuickLookIntent {
    /// Build an intent for `usdz`. Relative `link` and `custom_banner`
    /// references are resolved against `page` here so serialization
    /// stays a pure function of the intent.
    pub fn new(page: &Url, usdz: Url, mut params: QuickLookParams) -> Self {
        params.link = resolve_against(page, params.link.take());
        params.custom_banner = resolve_against(page, params.custom_banner.take());
        Self { file: usdz, params }
    }

    pub fn file(&self) -> &Url {
        &self.file
    }

    pub fn params(&self) -> &QuickLookParams {
        &self.params
    }

    /// Serialize per Apple AR Quick Look conventions.
    ///
    /// `allowsContentScaling` is always present (a boolean never coerces
    /// to an empty string); every other field is filtered out when absent
    /// or empty. A banner with neither an Apple Pay button nor a
    /// call-to-action label is degraded UX, not an error: Quick Look
    /// shows a bare banner, so it is only warned about.
    pub fn to_url(&self) -> String {
        let p = &self.params;
        if p.apple_pay_button.is_none() && p.call_to_action.is_none() {
            warn!("quick-look banner has neither an apple pay button nor a call-to-action");
        }

        let mut w = ParamWriter::new();
        w.push_raw(
            "allowsContentScaling",
            Some(if p.resizable { "1" } else { "0" }),
        );
        w.push_encoded("checkoutTitle", p.title.as_deref());
        w.push_encoded("checkoutSubtitle", p.checkout_subtitle.as_deref());
        w.push_encoded("price", p.price.as_deref());
        w.push_encoded("canonicalWebPageURL", p.link.as_deref());
        w.push_encoded("applePayButtonType", p.apple_pay_button.map(|k| k.as_str()));
        w.push_encoded("callToAction", p.call_to_action.as_deref());
        w.push_encoded("custom", p.custom_banner.as_deref());
        w.push_encoded("customHeight", p.custom_banner_height.map(|h| h.as_str()));

        let mut url = self.file.clone();
        url.set_fragment(Some(&w.join('&')));
        url.to_string()
    }
}

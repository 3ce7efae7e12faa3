//! Intent construction — platform-specific AR activation URLs.
//!
//! An intent is an immutable value object built fresh per activation
//! attempt: the absolute model file URL plus its parameter set, with a
//! deterministic `to_url()`. Serialization is a filter-map over present
//! fields — anything absent or empty after string coercion is omitted,
//! so no serialized URL ever carries a hollow parameter.

pub mod quick_look;
pub mod scene_viewer;

pub use quick_look::{ApplePayButtonKind, BannerHeight, QuickLookIntent, QuickLookParams};
pub use scene_viewer::{SceneViewerIntent, SceneViewerParams};

use log::warn;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters escaped the way `encodeURIComponent` escapes them:
/// everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a parameter value.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Resolve `reference` against the current page location. Absolute
/// references pass through unchanged; relative ones pick up the page
/// origin so the native viewer, which has no document context, can fetch
/// them. Unresolvable references are dropped with a warning.
pub(crate) fn resolve_against(page: &Url, reference: Option<String>) -> Option<String> {
    let reference = reference.filter(|r| !r.is_empty())?;
    match page.join(&reference) {
        Ok(url) => Some(url.to_string()),
        Err(err) => {
            warn!("dropping unresolvable url `{reference}`: {err}");
            None
        }
    }
}

/// Accumulates `key=value` pairs, dropping absent and empty values.
pub(crate) struct ParamWriter {
    pairs: Vec<String>,
}

impl ParamWriter {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append `key=value` with the value taken as-is.
    pub fn push_raw(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.pairs.push(format!("{key}={v}"));
            }
        }
    }

    /// Append `key=value` with the value percent-encoded.
    pub fn push_encoded(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.pairs.push(format!("{key}={}", encode_component(v)));
            }
        }
    }

    pub fn join(&self, separator: char) -> String {
        self.pairs.join(&separator.to_string())
    }
}

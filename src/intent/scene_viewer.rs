//! Android Scene Viewer intent — the `intent://` URI scheme.
//!
//! Shape: `intent://arvr.google.com/scene-viewer/1.0?<query>#<Intent
//! block>`. The `file` value embeds the absolute model URL unencoded so
//! query parameters already on it (CDN tokens and the like) round-trip
//! verbatim; only `title` and the browser fallback URL are
//! percent-encoded. The fragment carries the Android intent envelope and
//! copies its `scheme` from the model URL.

use url::Url;

use super::{encode_component, resolve_against, ParamWriter};

/// Intent authority for the Scene Viewer app.
const AUTHORITY: &str = "arvr.google.com/scene-viewer/1.0";
/// Package that answers the intent.
const PACKAGE: &str = "com.google.ar.core";
const ACTION: &str = "android.intent.action.VIEW";

/// Parameters serialized into the Scene Viewer query string.
#[derive(Debug, Clone)]
pub struct SceneViewerParams {
    pub title: Option<String>,
    /// Opened by the browser when no native app answers the intent.
    pub fallback_url: Option<String>,
    /// `false` serializes as `resizable=false`; the default (resizable)
    /// is omitted.
    pub resizable: bool,
    /// Link shown inside the AR view; relative values resolve against
    /// the page.
    pub link: Option<String>,
    /// Sound asset looped during the AR session; relative values resolve
    /// against the page.
    pub sound: Option<String>,
}

impl Default for SceneViewerParams {
    fn default() -> Self {
        Self {
            title: None,
            fallback_url: None,
            resizable: true,
            link: None,
            sound: None,
        }
    }
}

/// A Scene Viewer activation target: a GLB/GLTF file plus its
/// parameters. Immutable; built fresh per activation attempt.
#[derive(Debug, Clone)]
pub struct SceneViewerIntent {
    file: Url,
    params: SceneViewerParams,
}

impl SceneViewerIntent {
    /// Build an intent for `model`. Relative `link` and `sound`
    /// references are resolved against `page` here so serialization
    /// stays a pure function of the intent.
    pub fn new(page: &Url, model: Url, mut params: SceneViewerParams) -> Self {
        params.link = resolve_against(page, params.link.take());
        params.sound = resolve_against(page, params.sound.take());
        Self {
            file: model,
            params,
        }
    }

    pub fn file(&self) -> &Url {
        &self.file
    }

    pub fn params(&self) -> &SceneViewerParams {
        &self.params
    }

    /// Serialize to the Scene Viewer intent URI.
    pub fn to_url(&self) -> String {
        let p = &self.params;

        let mut w = ParamWriter::new();
        w.push_raw("file", Some(self.file.as_str()));
        w.push_raw("mode", Some("ar_only"));
        w.push_raw("link", p.link.as_deref());
        w.push_encoded("title", p.title.as_deref());
        w.push_raw("sound", p.sound.as_deref());
        if !p.resizable {
            w.push_raw("resizable", Some("false"));
        }

        let mut fragment = format!(
            "Intent;scheme={};package={PACKAGE};action={ACTION};",
            self.file.scheme()
        );
        if let Some(fallback) = p.fallback_url.as_deref().filter(|s| !s.is_empty()) {
            fragment.push_str("S.browser_fallback_url=");
            fragment.push_str(&encode_component(fallback));
            fragment.push(';');
        }
        fragment.push_str("end;");

        format!("intent://{AUTHORITY}?{}#{fragment}", w.join('&'))
    }
}

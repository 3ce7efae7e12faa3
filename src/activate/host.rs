//! Host traits — the renderer and navigation primitives the embedding
//! viewer supplies.
//!
//! Everything here runs on the single cooperative event loop of the host:
//! the async methods are `?Send` by design and are awaited sequentially,
//! never concurrently for the same viewer instance.

use async_trait::async_trait;
use url::Url;

use crate::error::ArError;

/// Renderer capability surface consumed by activation.
///
/// `present`/`stop_presenting` wrap the viewer's own WebXR session
/// handling; this crate only decides whether to attempt WebXR and hands
/// off the scene.
#[async_trait(?Send)]
pub trait XrRenderer {
    /// Probe whether an immersive AR session could start right now.
    async fn supports_presentation(&self) -> bool;

    /// Enter AR presentation. A failure here blocks WebXR for the session
    /// and triggers one fallback activation attempt.
    async fn present(&mut self) -> Result<(), ArError>;

    /// Leave AR presentation after a failed or finished session.
    async fn stop_presenting(&mut self) -> Result<(), ArError>;

    /// Whether the scene's model is fully loaded.
    fn scene_loaded(&self) -> bool;

    /// Force a preload and resolve once the load event fires.
    async fn load_scene(&mut self) -> Result<(), ArError>;
}

/// How the transient activation anchor must be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// A bare anchor; used for the Scene Viewer intent handoff.
    Plain,
    /// `rel="ar"` with a nested image child — iOS requires both for the
    /// native Quick Look viewer to take over instead of navigating.
    ArLink,
}

/// Navigation primitive: transient-anchor activation, hash manipulation
/// and one step of history traversal. Hash-change events flow the other
/// way, from the host into [`ArActivator::on_hash_change`].
///
/// [`ArActivator::on_hash_change`]: crate::activate::ArActivator::on_hash_change
pub trait Navigator {
    /// Current page location; relative asset references resolve against
    /// it.
    fn page_url(&self) -> Url;

    /// Set `url` on a transient anchor shaped per `kind` and click it.
    fn activate_anchor(&mut self, url: &str, kind: AnchorKind);

    /// Replace the location hash (`hash` carries no leading `#`).
    fn set_hash(&mut self, hash: &str);

    /// Move one step back in session history.
    fn history_back(&mut self);
}

/// Statuses the renderer emits on its own event stream, forwarded into
/// the public `ar-status` stream by the activator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererStatus {
    NotPresenting,
    Failed,
}

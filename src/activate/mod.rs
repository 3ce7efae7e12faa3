//! Activation orchestration — mode cache, handoff, fallback plumbing.
//!
//! [`ArActivator`] glues the pieces together: it re-runs the mode
//! selector eagerly on every configuration change so `can_activate_ar`
//! is always current, builds a fresh intent per activation attempt, arms
//! the Scene Viewer fallback watch, and drives the WebXR entry path with
//! its single fallback retry. Events for the host accumulate in a queue
//! drained via [`ArActivator::poll_event`].

pub mod events;
pub mod fallback;
pub mod host;

pub use events::{ArEvent, ArStatus};
pub use fallback::{FallbackOutcome, FallbackState, FallbackWatch, NO_AR_SIGIL};
pub use host::{AnchorKind, Navigator, RendererStatus, XrRenderer};

use std::collections::VecDeque;

use log::{debug, warn};

use crate::config::ArConfig;
use crate::error::ArError;
use crate::intent::{QuickLookIntent, QuickLookParams, SceneViewerIntent, SceneViewerParams};
use crate::mode::{select_mode, ArMode, ModeGating, Platform, SelectionContext, SessionBlocks};

/// Payload an anchor `message` event carries when the custom Quick Look
/// banner button is tapped.
pub const QUICK_LOOK_BUTTON_SIGIL: &str = "_apple_ar_quicklook_button_tapped";

/// Drives AR activation for one viewer element.
pub struct ArActivator<R, N> {
    config: ArConfig,
    platform: Platform,
    gating: ModeGating,
    blocks: SessionBlocks,
    renderer: R,
    navigator: N,
    selected: ArMode,
    /// Guards against interleaved activation attempts.
    pending: bool,
    fallback: FallbackWatch,
    events: VecDeque<ArEvent>,
}

impl<R: XrRenderer, N: Navigator> ArActivator<R, N> {
    /// Create an activator with everything still unselected. Call
    /// [`refresh_mode`] (or [`set_config`]) before the first activation
    /// so the cached mode reflects the platform.
    ///
    /// [`refresh_mode`]: ArActivator::refresh_mode
    /// [`set_config`]: ArActivator::set_config
    pub fn new(
        config: ArConfig,
        platform: Platform,
        gating: ModeGating,
        renderer: R,
        navigator: N,
    ) -> Self {
        Self {
            config,
            platform,
            gating,
            blocks: SessionBlocks::new(),
            renderer,
            navigator,
            selected: ArMode::None,
            pending: false,
            fallback: FallbackWatch::new(),
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &ArConfig {
        &self.config
    }

    /// Replace the configuration and reselect eagerly, so
    /// [`can_activate_ar`] is already current when this returns.
    ///
    /// [`can_activate_ar`]: ArActivator::can_activate_ar
    pub async fn set_config(&mut self, config: ArConfig) -> ArMode {
        self.config = config;
        self.refresh_mode().await
    }

    pub fn selected_mode(&self) -> ArMode {
        self.selected
    }

    pub fn can_activate_ar(&self) -> bool {
        self.selected != ArMode::None
    }

    pub fn session_blocks(&self) -> &SessionBlocks {
        &self.blocks
    }

    /// Mutable block access, for hosts sharing blocks across viewers and
    /// for tests resetting between cases.
    pub fn session_blocks_mut(&mut self) -> &mut SessionBlocks {
        &mut self.blocks
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Pop the oldest queued event, if any.
    pub fn poll_event(&mut self) -> Option<ArEvent> {
        self.events.pop_front()
    }

    /// Re-run mode selection against the current inputs.
    ///
    /// The inputs are read synchronously before the capability probe
    /// suspends; a configuration mutation racing an in-flight pass can
    /// produce one stale decision, which the next pass corrects.
    pub async fn refresh_mode(&mut self) -> ArMode {
        let previous = self.selected;
        let mode = {
            let ctx = SelectionContext {
                ar_enabled: self.config.ar,
                has_ios_src: self.config.has_ios_src(),
                platform: &self.platform,
                gating: &self.gating,
                blocks: &self.blocks,
            };
            select_mode(&self.config.modes, &ctx, &self.renderer).await
        };
        self.selected = mode;
        if mode != previous {
            debug!("ar mode changed: {previous} -> {mode}");
            self.events.push_back(ArEvent::ModeChanged {
                mode,
                can_activate: mode != ArMode::None,
            });
            if previous != ArMode::None && mode == ArMode::None {
                self.events.push_back(ArEvent::Status(ArStatus::Failed));
            }
        }
        mode
    }

    /// Activate AR along the currently selected mode.
    ///
    /// With no mode available this is not an error: a `failed` status is
    /// queued and the call resolves. A second call while one is in
    /// flight is rejected with [`ArError::pending`].
    pub async fn activate_ar(&mut self) -> Result<(), ArError> {
        if self.pending {
            warn!("ignoring activate_ar: an attempt is already in flight");
            return Err(ArError::pending());
        }
        self.pending = true;
        let result = self.activate_now().await;
        self.pending = false;
        result
    }

    async fn activate_now(&mut self) -> Result<(), ArError> {
        let mut retried = false;
        loop {
            match self.selected {
                ArMode::None => {
                    warn!("activate_ar called with no available ar mode");
                    self.events.push_back(ArEvent::Status(ArStatus::Failed));
                    return Ok(());
                }
                ArMode::QuickLook => return self.launch_quick_look(),
                ArMode::SceneViewer => return self.launch_scene_viewer(),
                ArMode::WebXr => {
                    if self.enter_webxr().await.is_ok() {
                        return Ok(());
                    }
                    if retried {
                        self.events.push_back(ArEvent::Status(ArStatus::Failed));
                        return Ok(());
                    }
                    // enter_webxr blocked the mode and reselected; fall
                    // through to whatever came next, once.
                    retried = true;
                }
            }
        }
    }

    /// Enter WebXR presentation, preloading the scene if needed.
    ///
    /// Selection re-runs after the attempt regardless of outcome, so a
    /// failure has already picked the fallback mode by the time the
    /// caller sees the error.
    async fn enter_webxr(&mut self) -> Result<(), ArError> {
        let result = self.try_present().await;
        match &result {
            Ok(()) => {
                self.events
                    .push_back(ArEvent::Status(ArStatus::SessionStarted));
            }
            Err(err) => {
                warn!("failed to enter webxr: {err}");
                if let Err(stop_err) = self.renderer.stop_presenting().await {
                    warn!("stop_presenting after failed entry: {stop_err}");
                }
                self.blocks.block(ArMode::WebXr);
            }
        }
        self.refresh_mode().await;
        result
    }

    async fn try_present(&mut self) -> Result<(), ArError> {
        if !self.renderer.scene_loaded() {
            self.renderer.load_scene().await?;
        }
        self.renderer.present().await
    }

    fn launch_quick_look(&mut self) -> Result<(), ArError> {
        let Some(ios_src) = self.config.ios_src.clone().filter(|s| !s.is_empty()) else {
            warn!("quick-look selected without an ios asset url");
            self.events.push_back(ArEvent::Status(ArStatus::Failed));
            return Ok(());
        };
        let page = self.navigator.page_url();
        let file = match page.join(&ios_src) {
            Ok(url) => url,
            Err(err) => {
                warn!("invalid ios asset url `{ios_src}`: {err}");
                self.events.push_back(ArEvent::Status(ArStatus::Failed));
                return Ok(());
            }
        };

        let params = QuickLookParams {
            title: self.config.title.clone(),
            checkout_subtitle: self.config.checkout_subtitle.clone(),
            price: self.config.price.clone(),
            resizable: self.config.scale.resizable(),
            link: self.config.link.clone(),
            apple_pay_button: self.config.apple_pay_button,
            call_to_action: self.config.call_to_action.clone(),
            custom_banner: self.config.custom_banner.clone(),
            custom_banner_height: self.config.custom_banner_height,
        };
        let url = QuickLookIntent::new(&page, file, params).to_url();
        debug!("launching quick-look: {url}");
        self.navigator.activate_anchor(&url, AnchorKind::ArLink);
        Ok(())
    }

    fn launch_scene_viewer(&mut self) -> Result<(), ArError> {
        let Some(src) = self.config.src.clone().filter(|s| !s.is_empty()) else {
            warn!("scene-viewer selected without a model asset url");
            self.events.push_back(ArEvent::Status(ArStatus::Failed));
            return Ok(());
        };
        let page = self.navigator.page_url();
        let file = match page.join(&src) {
            Ok(url) => url,
            Err(err) => {
                warn!("invalid model asset url `{src}`: {err}");
                self.events.push_back(ArEvent::Status(ArStatus::Failed));
                return Ok(());
            }
        };

        let params = SceneViewerParams {
            title: self.config.title.clone(),
            fallback_url: self.config.fallback_url.clone(),
            resizable: self.config.scale.resizable(),
            link: self.config.link.clone(),
            sound: self.config.sound.clone(),
        };
        let url = SceneViewerIntent::new(&page, file, params).to_url();
        debug!("launching scene-viewer: {url}");

        // Plant the sigil and arm the watch before the click: if nothing
        // answers the intent, the browser bounces the hash back to the
        // sigil and on_hash_change picks it up.
        self.navigator.set_hash(NO_AR_SIGIL);
        self.fallback.arm();
        self.navigator.activate_anchor(&url, AnchorKind::Plain);
        Ok(())
    }

    /// Feed a browser `hashchange` into the fallback watch.
    ///
    /// A detected bounce blocks Scene Viewer for the session, unwinds
    /// the synthetic hash-only history entry, and reselects.
    pub async fn on_hash_change(&mut self, hash: &str) {
        match self.fallback.observe(hash) {
            FallbackOutcome::FallbackDetected => {
                warn!("scene-viewer intent went unanswered; blocking it for this session");
                self.blocks.block(ArMode::SceneViewer);
                self.navigator.history_back();
                self.refresh_mode().await;
            }
            FallbackOutcome::NavigatedAway | FallbackOutcome::Ignored => {}
        }
    }

    /// Feed an anchor `message` payload; the Quick Look button sigil
    /// becomes a public event.
    pub fn on_anchor_message(&mut self, payload: &str) {
        if payload == QUICK_LOOK_BUTTON_SIGIL {
            self.events.push_back(ArEvent::QuickLookButtonTapped);
        }
    }

    /// Forward a status from the renderer's own event stream.
    pub fn on_renderer_status(&mut self, status: RendererStatus) {
        let status = match status {
            RendererStatus::NotPresenting => ArStatus::NotPresenting,
            RendererStatus::Failed => ArStatus::Failed,
        };
        self.events.push_back(ArEvent::Status(status));
    }
}

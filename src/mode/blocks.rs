//! Session-scoped mode blocks.
//!
//! After a failed handoff (a rejected WebXR `present()`, a Scene Viewer
//! intent nothing answered) the mode is blocked so later selection passes
//! skip it. Flags are write-once-per-failure, read on every pass, and
//! live until page reload or an explicit [`SessionBlocks::reset`].

use super::ArMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionBlocks {
    webxr: bool,
    scene_viewer: bool,
    quick_look: bool,
}

impl SessionBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block `mode` for the rest of the session. Blocking [`ArMode::None`]
    /// is a no-op.
    pub fn block(&mut self, mode: ArMode) {
        match mode {
            ArMode::WebXr => self.webxr = true,
            ArMode::SceneViewer => self.scene_viewer = true,
            ArMode::QuickLook => self.quick_look = true,
            ArMode::None => {}
        }
    }

    pub fn is_blocked(&self, mode: ArMode) -> bool {
        match mode {
            ArMode::WebXr => self.webxr,
            ArMode::SceneViewer => self.scene_viewer,
            ArMode::QuickLook => self.quick_look,
            ArMode::None => false,
        }
    }

    /// Clear every block. For tests and host teardown.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

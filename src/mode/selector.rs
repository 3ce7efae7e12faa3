//! Mode selection — first-match-wins resolution over the preference list.

use crate::activate::host::XrRenderer;

use super::blocks::SessionBlocks;
use super::context::{ModeGating, Platform};
use super::{ArMode, ModePreferences};

/// Everything one selection pass reads, bundled so the pass is a pure
/// function of its inputs. Built fresh per pass: the fields are read
/// synchronously before the probe suspends, so an in-flight pass can at
/// worst produce one stale decision after a concurrent config mutation.
pub struct SelectionContext<'a> {
    /// Master enable; when false, no probe runs at all.
    pub ar_enabled: bool,
    /// Whether an iOS-compatible (USDZ) asset URL is configured.
    pub has_ios_src: bool,
    pub platform: &'a Platform,
    pub gating: &'a ModeGating,
    pub blocks: &'a SessionBlocks,
}

/// Pick the first preference whose gate holds.
///
/// Short-circuits to [`ArMode::None`] when AR is disabled — the WebXR
/// capability probe is asynchronous and must not run needlessly. No
/// fallback scoring: the walk stops at the first supported mode.
pub async fn select_mode<R>(
    preferences: &ModePreferences,
    ctx: &SelectionContext<'_>,
    renderer: &R,
) -> ArMode
where
    R: XrRenderer + ?Sized,
{
    if !ctx.ar_enabled {
        return ArMode::None;
    }

    for mode in preferences.iter() {
        let supported = match mode {
            ArMode::WebXr => {
                ctx.platform.webxr_capable
                    && !ctx.blocks.is_blocked(ArMode::WebXr)
                    && renderer.supports_presentation().await
            }
            ArMode::SceneViewer => {
                ctx.platform.scene_viewer_capable
                    && (!ctx.gating.scene_viewer_needs_android || ctx.platform.is_android)
                    && !ctx.blocks.is_blocked(ArMode::SceneViewer)
            }
            ArMode::QuickLook => {
                ctx.has_ios_src
                    && ctx.platform.quick_look_capable
                    && !ctx.blocks.is_blocked(ArMode::QuickLook)
                    && ctx.gating.quick_look_browsers.allows(ctx.platform.browser)
            }
            ArMode::None => false,
        };
        if supported {
            return mode;
        }
    }

    ArMode::None
}

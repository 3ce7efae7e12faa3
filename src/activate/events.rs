//! Public events drained by the host.

use crate::mode::ArMode;

/// Payload of the `ar-status` event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArStatus {
    /// A WebXR session started presenting.
    SessionStarted,
    /// Presentation ended, or never began.
    NotPresenting,
    /// No AR mode is available, or a handoff failed.
    Failed,
}

impl ArStatus {
    /// The wire token carried in the event detail.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArStatus::SessionStarted => "session-started",
            ArStatus::NotPresenting => "not-presenting",
            ArStatus::Failed => "failed",
        }
    }
}

/// Events queued by the activator; the host drains them with
/// [`ArActivator::poll_event`] and re-dispatches as DOM events.
///
/// [`ArActivator::poll_event`]: crate::activate::ArActivator::poll_event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArEvent {
    /// Selection produced a different mode. `can_activate` mirrors
    /// `mode != ArMode::None` so the host can toggle its AR affordance
    /// without re-asking.
    ModeChanged { mode: ArMode, can_activate: bool },
    /// An `ar-status` event.
    Status(ArStatus),
    /// The custom Quick Look banner button was tapped.
    QuickLookButtonTapped,
}

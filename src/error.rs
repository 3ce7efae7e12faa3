//! Error types for the activation layer.

use std::fmt;

/// An error surfaced by AR activation.
///
/// Nothing here is fatal to the hosting viewer: activation failures
/// degrade to status events and session-scoped mode blocks, and the worst
/// outcome is AR staying unavailable until the page reloads.
#[derive(Debug, Clone)]
pub struct ArError {
    pub message: String,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A previous activation attempt is still in flight.
    ActivationPending,
    /// The renderer failed to enter or leave a WebXR session.
    Present,
    /// The scene failed to preload before presentation.
    Load,
    /// Configuration could not be read or parsed.
    Config,
}

impl ArError {
    pub fn pending() -> Self {
        Self {
            message: "an activation attempt is already in flight".to_string(),
            kind: ErrorKind::ActivationPending,
        }
    }

    pub fn present(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Present,
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Load,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Config,
        }
    }
}

impl fmt::Display for ArError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ArError {}

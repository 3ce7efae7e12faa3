//! Scene Viewer fallback detection — a one-shot hash-change watch.
//!
//! A Scene Viewer anchor click is a heuristic handoff, not a confirmed
//! one: the browser may silently stay on the page. Before the click the
//! location hash is set to a sigil and the watch is armed. If no native
//! app takes the intent, the browser fires the hash change back to the
//! sigil and the watch reports it; a genuine handoff never fires the
//! watch. The mechanism cannot distinguish "app accepted the intent"
//! from "OS still resolving", so detection is best effort.

/// Hash sigil set before a Scene Viewer attempt. Kept verbatim for wire
/// compatibility with deployed viewers.
pub const NO_AR_SIGIL: &str = "model-viewer-no-ar-fallback";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackState {
    #[default]
    Idle,
    /// An intent anchor was clicked; the next hash change resolves it.
    Attempting,
}

/// Outcome of feeding one hash change to the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// Watch not armed; unrelated hash traffic.
    Ignored,
    /// First change after arming was not the sigil: the page navigated
    /// away normally.
    NavigatedAway,
    /// The hash bounced back to the sigil: nothing answered the intent.
    FallbackDetected,
}

/// One-shot watch: `arm` once per attempt, the first observed change
/// consumes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackWatch {
    state: FallbackState,
}

impl FallbackWatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FallbackState {
        self.state
    }

    /// Arm the watch for one upcoming hash change.
    pub fn arm(&mut self) {
        self.state = FallbackState::Attempting;
    }

    /// Feed a hash change (leading `#` optional). The first change after
    /// arming consumes the watch regardless of outcome.
    pub fn observe(&mut self, hash: &str) -> FallbackOutcome {
        if self.state != FallbackState::Attempting {
            return FallbackOutcome::Ignored;
        }
        self.state = FallbackState::Idle;
        if hash.trim_start_matches('#') == NO_AR_SIGIL {
            FallbackOutcome::FallbackDetected
        } else {
            FallbackOutcome::NavigatedAway
        }
    }
}

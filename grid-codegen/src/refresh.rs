//! Minimum-duration "refreshing" indicator for regenerated code.
//!
//! Generation is synchronous and instant; the hold only exists so a viewer
//! notices the code panel changed. The first artifact is shown without a
//! hold. Time is passed in by the caller.

use std::time::{Duration, Instant};

/// Default hold after the generated code changes.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(220);

/// Tracks whether the code panel should currently show its loading state.
#[derive(Debug, Clone)]
pub struct RefreshHold {
    duration: Duration,
    last: Option<String>,
    until: Option<Instant>,
}

impl RefreshHold {
    /// Create a hold with the default duration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_HOLD)
    }

    /// Create a hold with a custom duration.
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            last: None,
            until: None,
        }
    }

    /// Record the artifact currently displayed.
    ///
    /// Returns `true` if the artifact changed and a new hold started. A new
    /// change during a hold restarts it.
    pub fn observe(&mut self, artifact: &str, now: Instant) -> bool {
        match self.last.as_deref() {
            None => {
                self.last = Some(artifact.to_string());
                false
            }
            Some(previous) if previous == artifact => false,
            Some(_) => {
                self.last = Some(artifact.to_string());
                self.until = Some(now + self.duration);
                tracing::trace!("Code changed, holding refresh for {:?}", self.duration);
                true
            }
        }
    }

    /// Whether the loading state should be shown at `now`.
    #[must_use]
    pub fn is_holding(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Time left in the current hold.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.until
            .map_or(Duration::ZERO, |until| until.saturating_duration_since(now))
    }
}

impl Default for RefreshHold {
    fn default() -> Self {
        Self::new()
    }
}

//! Resize coalescing.
//!
//! Terminals emit a burst of resize events while a window is dragged. Each
//! one would otherwise throw away and rebuild the whole tile set, so only
//! the last size is applied once events stop arriving for a quiet period.

use std::time::{Duration, Instant};

use crate::Viewport;

/// Quiet period used when none is configured.
pub const DEFAULT_RESIZE_QUIET: Duration = Duration::from_millis(120);

#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    /// Latest observed size and when it may be applied.
    pending: Option<(Viewport, Instant)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_QUIET)
    }
}

impl ResizeDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize; restarts the quiet period.
    pub fn push(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some((viewport, now + self.quiet));
    }

    /// Take the pending size once its quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some((viewport, deadline)) if now >= deadline => {
                self.pending = None;
                Some(viewport)
            }
            _ => None,
        }
    }

    /// When the pending size becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//! Save tracking — counts outstanding save calls for UI feedback.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tracks how many save calls are in flight.
///
/// The counter is the source of truth; "is saving" is derived from it, so
/// the flag stays true until *all* outstanding saves complete, no matter
/// how the calls interleave.
#[derive(Debug, Default)]
pub struct SaveTracker {
    in_progress: Arc<AtomicUsize>,
}

impl SaveTracker {
    /// Create a tracker with no saves in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a save call.
    ///
    /// The returned guard decrements the counter when dropped, which
    /// happens when the save's response lands — or when the call fails,
    /// so a failed save cannot leave the flag stuck.
    #[must_use]
    pub fn begin(&self) -> SaveGuard {
        self.in_progress.fetch_add(1, Ordering::SeqCst);
        SaveGuard {
            in_progress: Arc::clone(&self.in_progress),
        }
    }

    /// Number of outstanding save calls.
    #[must_use]
    pub fn count(&self) -> usize {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Whether any save is still in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.count() > 0
    }
}

/// RAII guard for one in-flight save call.
#[derive(Debug)]
pub struct SaveGuard {
    in_progress: Arc<AtomicUsize>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.in_progress.fetch_sub(1, Ordering::SeqCst);
    }
}

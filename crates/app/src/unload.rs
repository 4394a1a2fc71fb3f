//! Unload guard — warns before leaving while a save is in flight.

use std::sync::Arc;

use crate::save::SaveTracker;

/// Warning shown when navigation would abandon an in-flight save.
pub const UNSAVED_CHANGES_WARNING: &str =
    "Data is still being saved and your changes will be lost if you leave.";

/// Guards shutdown/navigation against losing an in-flight save.
///
/// The hosting shell asks [`UnloadGuard::warning`] before tearing the
/// panel down; a `Some` answer means the user should be prompted first.
pub struct UnloadGuard {
    saves: Arc<SaveTracker>,
}

impl UnloadGuard {
    /// Create a guard watching the given save tracker.
    #[must_use]
    pub fn new(saves: Arc<SaveTracker>) -> Self {
        Self { saves }
    }

    /// The warning to show, or `None` when leaving is safe.
    #[must_use]
    pub fn warning(&self) -> Option<&'static str> {
        self.saves.is_saving().then_some(UNSAVED_CHANGES_WARNING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_leaving_when_nothing_is_saving() {
        let guard = UnloadGuard::new(Arc::new(SaveTracker::new()));
        assert_eq!(guard.warning(), None);
    }

    #[test]
    fn should_warn_while_a_save_is_in_flight() {
        let saves = Arc::new(SaveTracker::new());
        let guard = UnloadGuard::new(Arc::clone(&saves));

        let in_flight = saves.begin();
        assert_eq!(guard.warning(), Some(UNSAVED_CHANGES_WARNING));

        drop(in_flight);
        assert_eq!(guard.warning(), None);
    }
}

//! UI port — change notification after each logical action.

/// Receives one change notification per completed logical action.
///
/// This replaces the browser framework's apply/digest cycle: the contract
/// is "exactly one visible UI update per logical action", not once per
/// internal mutation. Implementations decide what a commit means (bump a
/// generation counter, redraw, no-op in tests).
pub trait UiSink {
    /// Commit pending state changes to the visible UI.
    fn changed(&self);
}

impl<T: UiSink + Send + Sync> UiSink for std::sync::Arc<T> {
    fn changed(&self) {
        (**self).changed();
    }
}

//! Alert port — the single user-visible error surface.

/// Shows a blocking, user-visible message.
///
/// There is exactly one alert surface per controller and it is applied
/// uniformly to every failed call, regardless of which action triggered it.
/// No error is silently dropped.
pub trait AlertSink {
    /// Display `message` to the user.
    fn alert(&self, message: &str);
}

impl<T: AlertSink + Send + Sync> AlertSink for std::sync::Arc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

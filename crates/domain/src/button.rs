//! Held-button state for the press-and-hold repeat loop.
//!
//! While a remote button is physically held, the controller keeps re-sending
//! the press signal, paced by server round trips. Before each re-send the
//! loop compares the pair it was started for against the currently held
//! pair; any mismatch (different button, or released) stops the loop.

/// A remote button, identified by its device and button names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRef {
    /// Device the button belongs to (e.g. `"tv"`).
    pub device: String,
    /// Button name on that device (e.g. `"power"`).
    pub button: String,
}

impl ButtonRef {
    /// Create a button reference.
    #[must_use]
    pub fn new(device: impl Into<String>, button: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            button: button.into(),
        }
    }
}

/// The currently held remote button, if any.
///
/// Mutated only by the controller in response to press/release events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldButton(Option<ButtonRef>);

impl HeldButton {
    /// The released state: no button held.
    #[must_use]
    pub fn released() -> Self {
        Self(None)
    }

    /// The state with `button` held.
    #[must_use]
    pub fn pressed(button: ButtonRef) -> Self {
        Self(Some(button))
    }

    /// Whether `button` is the currently held button.
    ///
    /// This is the repeat-loop gate: a stale loop observes `false` here
    /// after release (or after another button takes over) and stops.
    #[must_use]
    pub fn is_held(&self, button: &ButtonRef) -> bool {
        self.0.as_ref() == Some(button)
    }

    /// The held pair, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ButtonRef> {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_released() {
        let held = HeldButton::default();
        assert!(held.current().is_none());
        assert!(!held.is_held(&ButtonRef::new("tv", "power")));
    }

    #[test]
    fn should_match_only_the_exact_pair() {
        let held = HeldButton::pressed(ButtonRef::new("tv", "power"));
        assert!(held.is_held(&ButtonRef::new("tv", "power")));
        assert!(!held.is_held(&ButtonRef::new("tv", "mute")));
        assert!(!held.is_held(&ButtonRef::new("amp", "power")));
    }

    #[test]
    fn should_stop_matching_after_release() {
        let button = ButtonRef::new("tv", "power");
        let held = HeldButton::pressed(button.clone());
        assert!(held.is_held(&button));

        let released = HeldButton::released();
        assert!(!released.is_held(&button));
    }
}

//! Pointer-event normalization — touch and mouse share one action surface.
//!
//! The panel binds a press action and a release action per control;
//! whether the user is on a touch screen or a mouse must not matter.
//!
//! This is the binding surface for an embedding UI shell: the shell maps
//! its raw pointer events through [`PointerPhase::from_event`] and drives
//! the controller's `remote_button_down` / `remote_button_up` with the
//! result. The command-line front-end has no pointer events and does not
//! use it.

/// A normalized pointer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Finger down or primary mouse button down.
    Press,
    /// Finger lifted or primary mouse button released.
    Release,
}

impl PointerPhase {
    /// Map a raw UI event name to its normalized phase.
    ///
    /// `touchstart` and `mousedown` are presses; `touchend` and `mouseup`
    /// are releases. Anything else is not a pointer transition.
    #[must_use]
    pub fn from_event(event: &str) -> Option<Self> {
        match event {
            "touchstart" | "mousedown" => Some(Self::Press),
            "touchend" | "mouseup" => Some(Self::Release),
            _ => None,
        }
    }
}

//! Change notifications.

use serde::{Deserialize, Serialize};

/// Emitted when a transition completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchChanged {
    /// State before the transition
    pub from: bool,
    /// State after the transition
    pub to: bool,
}

impl SwitchChanged {
    /// Create a new change event.
    #[must_use]
    pub const fn new(from: bool, to: bool) -> Self {
        Self { from, to }
    }
}

/// Receives completed state changes.
///
/// `on_changed` fires first, then exactly one of `on_switch_on` or
/// `on_switch_off`. Cancelled transitions and instant jumps fire nothing.
pub trait SwitchListener {
    /// A transition completed with the given state.
    fn on_changed(&mut self, checked: bool);

    /// A transition completed in the checked state.
    fn on_switch_on(&mut self) {}

    /// A transition completed in the unchecked state.
    fn on_switch_off(&mut self) {}
}

impl<F: FnMut(bool)> SwitchListener for F {
    fn on_changed(&mut self, checked: bool) {
        self(checked);
    }
}

/// Deliver a completed change to `listener` in order.
pub(crate) fn notify(listener: &mut dyn SwitchListener, checked: bool) {
    listener.on_changed(checked);
    if checked {
        listener.on_switch_on();
    } else {
        listener.on_switch_off();
    }
}

//! Listener that records every notification.

use capsule_switch::SwitchListener;
use std::cell::RefCell;
use std::rc::Rc;

/// One listener callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCall {
    /// `on_changed(checked)`
    Changed(bool),
    /// `on_switch_on()`
    SwitchOn,
    /// `on_switch_off()`
    SwitchOff,
}

/// Shared recording listener.
///
/// Clones share one log, so a test can keep a clone while the switch owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    calls: Rc<RefCell<Vec<ListenerCall>>>,
}

impl RecordingListener {
    /// Create a new empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ListenerCall> {
        self.calls.borrow().clone()
    }

    /// Number of `on_changed` calls.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.count(|c| matches!(c, ListenerCall::Changed(_)))
    }

    /// Number of `on_switch_on` calls.
    #[must_use]
    pub fn on_count(&self) -> usize {
        self.count(|c| *c == ListenerCall::SwitchOn)
    }

    /// Number of `on_switch_off` calls.
    #[must_use]
    pub fn off_count(&self) -> usize {
        self.count(|c| *c == ListenerCall::SwitchOff)
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn count(&self, pred: impl Fn(&ListenerCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, call: ListenerCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SwitchListener for RecordingListener {
    fn on_changed(&mut self, checked: bool) {
        self.push(ListenerCall::Changed(checked));
    }

    fn on_switch_on(&mut self) {
        self.push(ListenerCall::SwitchOn);
    }

    fn on_switch_off(&mut self) {
        self.push(ListenerCall::SwitchOff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let recorder = RecordingListener::new();
        let mut owned = recorder.clone();
        owned.on_changed(true);
        owned.on_switch_on();
        assert_eq!(
            recorder.calls(),
            [ListenerCall::Changed(true), ListenerCall::SwitchOn]
        );
        assert_eq!(recorder.changed_count(), 1);
        assert_eq!(recorder.on_count(), 1);
        assert_eq!(recorder.off_count(), 0);

        recorder.clear();
        assert!(owned.calls().is_empty());
    }
}

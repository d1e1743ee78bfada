//! The slice of a UI event that row handlers are allowed to touch.

/// Minimal event capability handed to row handlers.
///
/// Handlers on inner controls stop the click before it reaches the row link,
/// so a favourite toggle never doubles as navigation.
pub trait UiEvent {
    fn prevent_default(&mut self);
    fn stop_propagation(&mut self);
    fn is_propagation_stopped(&self) -> bool;
}

/// A plain click, used by hosts without their own event type and by tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl UiEvent for ClickEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Swallow an event raised on an inner control.
pub fn intercept(evt: &mut (impl UiEvent + ?Sized)) {
    evt.prevent_default();
    evt.stop_propagation();
}

/// Keep a key press on an inner control from bubbling up to the row.
///
/// The default action is left alone, so Enter still activates the control
/// or submits the field it was pressed in.
pub fn claim_key(evt: &mut (impl UiEvent + ?Sized)) {
    evt.stop_propagation();
}

/// Whether `key` opens a focused row. Matches a native link: Enter only.
pub fn opens_row(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_key_keeps_default_action() {
        let mut evt = ClickEvent::new();
        claim_key(&mut evt);
        assert!(evt.is_propagation_stopped());
        assert!(!evt.is_default_prevented());
    }

    #[test]
    fn test_only_enter_opens_row() {
        assert!(opens_row("Enter"));
        assert!(!opens_row(" "));
        assert!(!opens_row("Escape"));
        assert!(!opens_row("a"));
    }
}

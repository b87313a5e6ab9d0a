//! Collaborators the controller drives but does not implement

/// Focus and hotkey capabilities supplied by the embedding UI.
///
/// Calls arrive from the controller after its internal lock is released, but
/// possibly from a runtime worker thread.
pub trait SelectHost: Send + Sync {
    /// Move input focus into the widget's text field.
    fn focus_input(&self);

    /// Remove input focus from the widget's text field.
    fn blur_input(&self);

    /// Register (`true`) or unregister (`false`) the widget's key handlers.
    fn set_hotkeys_active(&self, _active: bool) {}
}

/// A host that ignores every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl SelectHost for NoopHost {
    fn focus_input(&self) {}

    fn blur_input(&self) {}
}

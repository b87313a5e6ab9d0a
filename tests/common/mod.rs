#![allow(dead_code)]

pub mod mock_data;

use std::sync::Arc;

use parking_lot::Mutex;

use simple_select::SelectHost;

/// What the controller asked the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Focus,
    Blur,
    Hotkeys(bool),
}

/// Host that records every request instead of touching a real UI
#[derive(Debug, Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, event: HostEvent) -> usize {
        self.events.lock().iter().filter(|e| **e == event).count()
    }
}

impl SelectHost for RecordingHost {
    fn focus_input(&self) {
        self.events.lock().push(HostEvent::Focus);
    }

    fn blur_input(&self) {
        self.events.lock().push(HostEvent::Blur);
    }

    fn set_hotkeys_active(&self, active: bool) {
        self.events.lock().push(HostEvent::Hotkeys(active));
    }
}

/// Collects the values passed to `on_change`
#[derive(Debug)]
pub struct ChangeLog<T> {
    calls: Arc<Mutex<Vec<Option<T>>>>,
}

impl<T> Clone for ChangeLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

#[allow(dead_code)]
impl<T: Clone + Send + 'static> ChangeLog<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Callback suitable for `SelectProps::new`
    pub fn callback(&self) -> impl Fn(Option<T>) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |value| calls.lock().push(value)
    }

    pub fn calls(&self) -> Vec<Option<T>> {
        self.calls.lock().clone()
    }
}

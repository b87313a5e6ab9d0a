//! Interaction controller for a select widget
//!
//! Turns raw UI input (keys, pointer presses, focus, text edits) into reducer
//! actions and owns every side effect the reducer must not perform: the
//! debounce timer, the caller's async search, focus requests and caller
//! callbacks.
//!
//! The controller is a cheap `Clone` handle. All reducer calls for one widget
//! are serialized by a single lock, and caller callbacks (`on_change`, host
//! focus requests) always run with that lock released.

use std::sync::{Arc, Weak};

use iocraft::prelude::KeyCode;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::error::SearchError;
use crate::select::debounce::Debouncer;
use crate::select::host::SelectHost;
use crate::select::keymap::{KeyIntent, KeyOutcome, key_to_intent};
use crate::select::model::{Highlight, ReduceContext, SelectAction, SelectState, reduce};
use crate::select::props::SelectProps;
use crate::select::region::{Point, PointerTarget, WidgetRegions};
use crate::select::view_model::{SelectViewModel, compute_view_model, label_id};
use crate::utils::id::IdGenerator;

struct Inner<T> {
    props: SelectProps<T>,
    state: Arc<SelectState<T>>,
    debouncer: Debouncer,
    last_generation: u64,
}

struct Shared<T> {
    inner: Mutex<Inner<T>>,
    host: Arc<dyn SelectHost>,
    instance_id: String,
    state_tx: watch::Sender<Arc<SelectState<T>>>,
}

/// Result of one reducer step
struct Transition<T> {
    prev: Arc<SelectState<T>>,
    next: Arc<SelectState<T>>,
}

impl<T> Transition<T> {
    fn changed(&self) -> bool {
        !Arc::ptr_eq(&self.prev, &self.next)
    }
}

pub struct SelectController<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for SelectController<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> std::fmt::Debug for SelectController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectController")
            .field("instance_id", &self.shared.instance_id)
            .finish_non_exhaustive()
    }
}

impl<T> SelectController<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Mount a widget: seed its state with the caller's options.
    pub fn new(props: SelectProps<T>, host: Arc<dyn SelectHost>, ids: &dyn IdGenerator) -> Self {
        let state = Arc::new(SelectState::new(props.options.clone()));
        let (state_tx, _) = watch::channel(Arc::clone(&state));
        let debouncer = Debouncer::new(props.config.async_search_debounce());
        let instance_id = ids.next_id();

        tracing::debug!(instance_id = %instance_id, options = props.options.len(), "select mounted");

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    props,
                    state,
                    debouncer,
                    last_generation: 0,
                }),
                host,
                instance_id,
                state_tx,
            }),
        }
    }

    // ========================================================================
    // Observation
    // ========================================================================

    pub fn instance_id(&self) -> &str {
        &self.shared.instance_id
    }

    pub fn label_id(&self) -> String {
        label_id(&self.shared.instance_id)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Arc<SelectState<T>> {
        Arc::clone(&self.shared.inner.lock().state)
    }

    /// Receive every state change (unchanged transitions are not published)
    ///
    /// States are published while the controller lock is held, so a
    /// `borrow()` must not be kept alive across calls into the controller.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SelectState<T>>> {
        self.shared.state_tx.subscribe()
    }

    pub fn view_model(&self) -> SelectViewModel {
        let inner = self.shared.inner.lock();
        compute_view_model(&inner.state, &inner.props, &self.shared.instance_id)
    }

    pub fn value(&self) -> Option<T> {
        self.shared.inner.lock().props.value.clone()
    }

    // ========================================================================
    // Prop updates
    // ========================================================================

    pub fn set_value(&self, value: Option<T>) {
        self.shared.inner.lock().props.value = value;
    }

    /// Replace the caller's options.
    ///
    /// An open menu keeps its current list until the next reset; a closed
    /// menu picks up the new options immediately.
    pub fn set_options(&self, options: Vec<T>) {
        let transition = {
            let mut inner = self.shared.inner.lock();
            inner.props.options = options;
            if inner.state.menu_is_open {
                None
            } else {
                Some(self.apply_locked(&mut inner, SelectAction::CloseMenu))
            }
        };
        if let Some(transition) = transition {
            self.after_transition(&transition);
        }
    }

    // ========================================================================
    // Input handlers
    // ========================================================================

    /// The text field received focus.
    pub fn handle_input_focus(&self) {
        {
            let inner = self.shared.inner.lock();
            if inner.props.config.disabled || inner.state.active {
                return;
            }
        }
        self.dispatch(SelectAction::Focus);
    }

    /// The search text changed.
    ///
    /// Texts that qualify for the async search (one is configured and the
    /// text meets the minimum length) start a debounced search; everything
    /// else is filtered locally right away. Outside a tokio runtime every
    /// text is filtered locally.
    pub fn handle_text_input(&self, text: impl Into<String>) {
        let text = text.into();
        let transition = {
            let mut inner = self.shared.inner.lock();
            if inner.props.config.disabled || !inner.props.config.searchable {
                tracing::trace!(instance_id = %self.shared.instance_id, "text input ignored");
                return;
            }

            if inner.props.wants_async_search(&text) && self.runtime_available() {
                inner.last_generation += 1;
                let generation = inner.last_generation;
                let transition = self.apply_locked(
                    &mut inner,
                    SelectAction::AsyncSearchStart {
                        text: text.clone(),
                        generation,
                    },
                );

                let delay = inner.props.config.async_search_debounce();
                inner.debouncer.set_delay(delay);
                let weak = Arc::downgrade(&self.shared);
                inner.debouncer.schedule(async move {
                    if let Some(controller) = Self::upgrade(&weak) {
                        controller.fire_async_search(text, generation);
                    }
                });
                tracing::debug!(
                    instance_id = %self.shared.instance_id,
                    generation,
                    delay = ?delay,
                    "async search debounced"
                );
                transition
            } else {
                inner.debouncer.cancel();
                self.apply_locked(&mut inner, SelectAction::InputChanged(text))
            }
        };
        self.after_transition(&transition);
    }

    /// The pointer moved over the option row at `index`.
    pub fn handle_option_hover(&self, index: usize) {
        {
            let inner = self.shared.inner.lock();
            if inner.props.config.disabled {
                return;
            }
            match inner.state.visible_options.get(index) {
                Some(option) if !inner.props.is_option_disabled(option, index) => {}
                _ => return,
            }
        }
        self.dispatch(SelectAction::SetHighlighted(Highlight::Absolute(index)));
    }

    /// The option row at `index` was clicked or confirmed from the keyboard.
    pub fn handle_option_activate(&self, index: usize) {
        let (option, on_change) = {
            let inner = self.shared.inner.lock();
            if inner.props.config.disabled {
                return;
            }
            let Some(option) = inner.state.visible_options.get(index) else {
                return;
            };
            if inner.props.is_option_disabled(option, index) {
                tracing::trace!(index, "activation of disabled option ignored");
                return;
            }
            (option.clone(), Arc::clone(&inner.props.on_change))
        };

        on_change(Some(option));
        self.close_menu_and_refocus();
    }

    /// The clear control was pressed.
    pub fn handle_clear(&self) {
        let on_change = {
            let inner = self.shared.inner.lock();
            if inner.props.config.disabled || !inner.props.config.clearable {
                return;
            }
            Arc::clone(&inner.props.on_change)
        };

        on_change(None);
        self.close_menu_and_refocus();
    }

    /// A key was pressed while the widget may be active.
    pub fn handle_key(&self, code: KeyCode) -> KeyOutcome {
        let Some(intent) = key_to_intent(code) else {
            return KeyOutcome::Ignored;
        };

        let (menu_is_open, has_options) = {
            let inner = self.shared.inner.lock();
            if !inner.state.active || inner.props.config.disabled {
                return KeyOutcome::Ignored;
            }
            (
                inner.state.menu_is_open,
                !inner.state.visible_options.is_empty(),
            )
        };

        match intent {
            KeyIntent::MoveUp | KeyIntent::MoveDown if !menu_is_open => {
                self.dispatch(SelectAction::OpenMenu);
                KeyOutcome::Handled
            }
            KeyIntent::MoveUp => {
                self.dispatch(SelectAction::SetHighlighted(Highlight::Step(-1)));
                KeyOutcome::Handled
            }
            KeyIntent::MoveDown => {
                self.dispatch(SelectAction::SetHighlighted(Highlight::Step(1)));
                KeyOutcome::Handled
            }
            KeyIntent::Confirm => {
                if menu_is_open {
                    self.activate_highlighted();
                }
                KeyOutcome::Handled
            }
            KeyIntent::Dismiss => {
                self.close_menu_and_refocus();
                KeyOutcome::Handled
            }
            KeyIntent::Tab if menu_is_open && has_options => {
                self.activate_highlighted();
                KeyOutcome::PreventDefault
            }
            KeyIntent::Tab => {
                self.blur();
                KeyOutcome::Handled
            }
        }
    }

    /// A pointer press landed on `target`.
    pub fn handle_pointer_down(&self, target: PointerTarget) {
        match target {
            PointerTarget::Outside => {
                let idle = {
                    let inner = self.shared.inner.lock();
                    !inner.state.active && !inner.state.menu_is_open
                };
                if idle {
                    tracing::trace!(instance_id = %self.shared.instance_id, "outside press on idle widget ignored");
                    return;
                }
                self.blur();
            }
            PointerTarget::Container => {
                let menu_is_open = {
                    let inner = self.shared.inner.lock();
                    if inner.props.config.disabled {
                        return;
                    }
                    inner.state.menu_is_open
                };
                if menu_is_open {
                    self.close_menu_and_refocus();
                } else {
                    self.dispatch(SelectAction::OpenMenu);
                }
            }
            // Option rows and the clear control have their own handlers.
            PointerTarget::Menu | PointerTarget::ClearControl => {}
        }
    }

    /// Classify a pointer press against the widget layout, then handle it.
    pub fn handle_pointer_down_at(&self, point: Point, regions: &WidgetRegions) {
        self.handle_pointer_down(regions.classify(point));
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn upgrade(weak: &Weak<Shared<T>>) -> Option<Self> {
        weak.upgrade().map(|shared| Self { shared })
    }

    fn dispatch(&self, action: SelectAction<T>) -> Arc<SelectState<T>> {
        let transition = {
            let mut inner = self.shared.inner.lock();
            self.apply_locked(&mut inner, action)
        };
        self.after_transition(&transition);
        transition.next
    }

    /// Reduce and store. Changed states are published here, under the lock,
    /// so subscribers see them in the order they were applied.
    fn apply_locked(&self, inner: &mut Inner<T>, action: SelectAction<T>) -> Transition<T> {
        let name = action.name();
        let prev = Arc::clone(&inner.state);
        let ctx = ReduceContext::new(&inner.props.options, &inner.props.projections);
        let next = reduce(&prev, action, &ctx);
        inner.state = Arc::clone(&next);

        let transition = Transition { prev, next };
        if transition.changed() {
            self.shared.state_tx.send_replace(Arc::clone(&transition.next));
        }
        tracing::debug!(action = name, changed = transition.changed(), "select action");
        transition
    }

    /// Run focus / hotkey effects. Lock must be released.
    fn after_transition(&self, transition: &Transition<T>) {
        if !transition.changed() {
            return;
        }

        match (transition.prev.active, transition.next.active) {
            (false, true) => {
                self.shared.host.set_hotkeys_active(true);
                self.schedule_focus();
            }
            (true, false) => self.shared.host.set_hotkeys_active(false),
            _ => {}
        }
    }

    fn blur(&self) {
        let transition = {
            let mut inner = self.shared.inner.lock();
            inner.debouncer.cancel();
            self.apply_locked(&mut inner, SelectAction::Blur)
        };
        self.after_transition(&transition);
        self.shared.host.blur_input();
    }

    fn close_menu_and_refocus(&self) {
        let transition = {
            let mut inner = self.shared.inner.lock();
            inner.debouncer.cancel();
            self.apply_locked(&mut inner, SelectAction::CloseMenu)
        };
        self.after_transition(&transition);
        self.schedule_focus();
    }

    fn activate_highlighted(&self) {
        let index = {
            let inner = self.shared.inner.lock();
            if inner.state.highlighted_option().is_none() {
                return;
            }
            inner.state.highlighted_index
        };
        self.handle_option_activate(index);
    }

    /// Timers need a tokio runtime; without one, searches fall back to the
    /// local filter.
    fn runtime_available(&self) -> bool {
        if tokio::runtime::Handle::try_current().is_ok() {
            return true;
        }
        tracing::warn!(
            instance_id = %self.shared.instance_id,
            "no tokio runtime for async search, filtering locally"
        );
        false
    }

    /// Move focus to the text field on a later tick, after the host's own
    /// focus handling for the current event has run.
    fn schedule_focus(&self) {
        let host = Arc::clone(&self.shared.host);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::task::yield_now().await;
                    host.focus_input();
                });
            }
            Err(_) => host.focus_input(),
        }
    }

    /// Debounce timer fired: run the caller's search unless it was superseded.
    fn fire_async_search(&self, text: String, generation: u64) {
        let search = {
            let inner = self.shared.inner.lock();
            if !inner.state.searching || inner.state.search_generation != generation {
                tracing::debug!(generation, "superseded async search skipped");
                return;
            }
            match &inner.props.async_search {
                Some(search) => Arc::clone(search),
                None => return,
            }
        };

        tracing::debug!(instance_id = %self.shared.instance_id, generation, "async search started");
        let weak = Arc::downgrade(&self.shared);
        let instance_id = self.shared.instance_id.clone();

        // The search runs in its own task so a panic surfaces as a JoinError
        // instead of leaving `searching` set.
        let search_task = tokio::spawn(search(text));
        tokio::spawn(async move {
            let result = match search_task.await {
                Ok(result) => result,
                Err(_) => Err(SearchError::Panicked),
            };
            let options = result.unwrap_or_else(|e| {
                tracing::warn!(instance_id = %instance_id, error = %e, "async search failed, showing no options");
                Vec::new()
            });

            let Some(controller) = Self::upgrade(&weak) else {
                return;
            };
            let transition = {
                let mut inner = controller.shared.inner.lock();
                controller.apply_locked(
                    &mut inner,
                    SelectAction::AsyncSearchEnd {
                        options,
                        generation,
                    },
                )
            };
            if !transition.changed() {
                tracing::debug!(instance_id = %instance_id, generation, "stale async search result discarded");
            }
            controller.after_transition(&transition);
        });
    }
}

//! Select widget state and reducer
//!
//! [`SelectState`] is the single source of truth for one widget instance. It
//! only changes through [`reduce`], a pure function of the current state, an
//! action and the caller's current options. Side effects (timers, focus,
//! callbacks) live in the controller.

use std::sync::Arc;

use crate::select::props::OptionProjections;
use crate::select::search::{filter_options, wrap_index};

/// Raw state that changes during user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState<T> {
    /// Whether the widget has logical focus (keyboard handling is live)
    pub active: bool,
    /// Whether the option menu is shown
    pub menu_is_open: bool,
    /// Current text in the search box
    pub input_value: String,
    /// Index into `visible_options`; 0 when the list is empty
    pub highlighted_index: usize,
    /// Options currently shown in the menu, in source order
    pub visible_options: Vec<T>,
    /// Whether an async search is outstanding
    pub searching: bool,
    /// Token of the most recent async search request
    pub search_generation: u64,
}

impl<T> Default for SelectState<T> {
    fn default() -> Self {
        Self {
            active: false,
            menu_is_open: false,
            input_value: String::new(),
            highlighted_index: 0,
            visible_options: Vec::new(),
            searching: false,
            search_generation: 0,
        }
    }
}

impl<T> SelectState<T> {
    /// Fresh state for a newly mounted widget.
    pub fn new(options: Vec<T>) -> Self {
        Self {
            visible_options: options,
            ..Default::default()
        }
    }

    /// The highlighted option, if the visible list is non-empty.
    pub fn highlighted_option(&self) -> Option<&T> {
        self.visible_options.get(self.highlighted_index)
    }
}

/// How to move the highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Jump to an index (e.g. pointer hover)
    Absolute(usize),
    /// Move relative to the current index (e.g. arrow keys)
    Step(isize),
}

/// All possible actions on the select state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction<T> {
    /// The text field gained focus
    Focus,
    /// The widget lost focus; reset everything
    Blur,
    /// Search text changed and is filtered locally
    InputChanged(String),
    /// Show the menu
    OpenMenu,
    /// Hide the menu and reset the search
    CloseMenu,
    /// Move the highlight
    SetHighlighted(Highlight),
    /// An async search was requested for `text`
    AsyncSearchStart { text: String, generation: u64 },
    /// An async search finished (failures arrive as an empty list)
    AsyncSearchEnd { options: Vec<T>, generation: u64 },
}

impl<T> SelectAction<T> {
    /// Short action name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SelectAction::Focus => "focus",
            SelectAction::Blur => "blur",
            SelectAction::InputChanged(_) => "input_changed",
            SelectAction::OpenMenu => "open_menu",
            SelectAction::CloseMenu => "close_menu",
            SelectAction::SetHighlighted(_) => "set_highlighted",
            SelectAction::AsyncSearchStart { .. } => "async_search_start",
            SelectAction::AsyncSearchEnd { .. } => "async_search_end",
        }
    }
}

/// Caller data the reducer reads but never owns
pub struct ReduceContext<'a, T> {
    /// The caller's full option list, re-read at every reset
    pub options: &'a [T],
    /// Projections used by the search filter
    pub projections: &'a OptionProjections<T>,
}

impl<'a, T> ReduceContext<'a, T> {
    pub fn new(options: &'a [T], projections: &'a OptionProjections<T>) -> Self {
        Self {
            options,
            projections,
        }
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the very same `Arc` when the action changes nothing, so callers
/// can skip re-rendering with [`Arc::ptr_eq`].
pub fn reduce<T>(
    state: &Arc<SelectState<T>>,
    action: SelectAction<T>,
    ctx: &ReduceContext<'_, T>,
) -> Arc<SelectState<T>>
where
    T: Clone + 'static,
{
    match action {
        SelectAction::Focus => {
            if state.active {
                return Arc::clone(state);
            }
            update(state, |s| s.active = true)
        }

        SelectAction::Blur => update(state, |s| {
            s.active = false;
            s.input_value.clear();
            s.menu_is_open = false;
            s.highlighted_index = 0;
            s.searching = false;
            s.visible_options = ctx.options.to_vec();
        }),

        SelectAction::InputChanged(text) => {
            let visible = filter_options(ctx.options, &text, |o| ctx.projections.label(o));
            update(state, |s| {
                s.input_value = text;
                s.menu_is_open = true;
                s.highlighted_index = 0;
                s.searching = false;
                s.visible_options = visible;
            })
        }

        SelectAction::OpenMenu => update(state, |s| {
            s.active = true;
            s.menu_is_open = true;
            s.highlighted_index = 0;
        }),

        SelectAction::CloseMenu => update(state, |s| {
            s.input_value.clear();
            s.menu_is_open = false;
            s.highlighted_index = 0;
            s.searching = false;
            s.visible_options = ctx.options.to_vec();
        }),

        SelectAction::SetHighlighted(highlight) => {
            let target = match highlight {
                Highlight::Absolute(index) => isize::try_from(index).unwrap_or(isize::MAX),
                Highlight::Step(step) => {
                    isize::try_from(state.highlighted_index)
                        .unwrap_or(isize::MAX)
                        .saturating_add(step)
                }
            };
            match wrap_index(target, state.visible_options.len()) {
                Some(index) if index != state.highlighted_index => {
                    update(state, |s| s.highlighted_index = index)
                }
                _ => Arc::clone(state),
            }
        }

        SelectAction::AsyncSearchStart { text, generation } => update(state, |s| {
            s.input_value = text;
            s.menu_is_open = true;
            s.highlighted_index = 0;
            s.searching = true;
            s.search_generation = generation;
            s.visible_options.clear();
        }),

        SelectAction::AsyncSearchEnd {
            options,
            generation,
        } => {
            if !state.searching || generation != state.search_generation {
                return Arc::clone(state);
            }
            update(state, |s| {
                s.searching = false;
                s.highlighted_index = 0;
                s.visible_options = options;
            })
        }
    }
}

fn update<T, F>(state: &Arc<SelectState<T>>, f: F) -> Arc<SelectState<T>>
where
    T: Clone,
    F: FnOnce(&mut SelectState<T>),
{
    let mut next = SelectState::clone(state);
    f(&mut next);
    Arc::new(next)
}

// ============================================================================
// Tests
// ============================================================================

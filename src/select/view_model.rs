//! Render-ready view of a select widget
//!
//! The view layer is out of scope for this crate, but everything it needs to
//! draw the widget is derived here from the state and props, so that logic is
//! testable without a UI framework.

use crate::select::model::SelectState;
use crate::select::props::SelectProps;

/// Computed view model for rendering the whole widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectViewModel {
    /// Label text, if configured
    pub label: Option<String>,
    /// Element id tying the label to the control; set only with a label
    pub label_id: Option<String>,
    /// Label of the current value, or the placeholder
    pub display_value: String,
    /// Whether `display_value` is the placeholder
    pub is_placeholder: bool,
    /// The current value is hidden while the user is typing a search
    pub current_value_hidden: bool,
    /// Text in the search box
    pub input_value: String,
    /// The search box does not accept typing
    pub input_read_only: bool,
    /// The widget has logical focus
    pub active: bool,
    /// All interaction is disabled
    pub disabled: bool,
    /// Whether the clear control is shown
    pub show_clear: bool,
    /// The open menu, if shown
    pub menu: Option<MenuViewModel>,
}

/// View model for the option menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewModel {
    /// Rows to display
    pub rows: Vec<OptionRow>,
    /// Status line in place of rows (searching / no options)
    pub message: Option<String>,
}

/// View model for one option row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub key: String,
    pub label: String,
    pub highlighted: bool,
    pub selected: bool,
    pub disabled: bool,
}

/// Element id for a widget's label
pub fn label_id(instance_id: &str) -> String {
    format!("simple-select__label--{instance_id}")
}

/// Pure function: compute view model from state and props
pub fn compute_view_model<T>(
    state: &SelectState<T>,
    props: &SelectProps<T>,
    instance_id: &str,
) -> SelectViewModel
where
    T: 'static,
{
    let config = &props.config;
    let projections = &props.projections;

    let (display_value, is_placeholder) = match &props.value {
        Some(value) => (projections.label(value), false),
        None => (config.placeholder.clone(), true),
    };

    let menu = state.menu_is_open.then(|| {
        let rows: Vec<OptionRow> = state
            .visible_options
            .iter()
            .enumerate()
            .map(|(idx, option)| OptionRow {
                key: projections.key(option),
                label: projections.label(option),
                highlighted: idx == state.highlighted_index,
                selected: props
                    .value
                    .as_ref()
                    .is_some_and(|value| projections.same_value(option, value)),
                disabled: props.is_option_disabled(option, idx),
            })
            .collect();

        let message = if state.searching {
            Some(config.async_searching_text.clone())
        } else if rows.is_empty() {
            Some(config.no_options_message.clone())
        } else {
            None
        };

        MenuViewModel { rows, message }
    });

    SelectViewModel {
        label: config.label.clone(),
        label_id: config.label.as_ref().map(|_| label_id(instance_id)),
        display_value,
        is_placeholder,
        current_value_hidden: !state.input_value.is_empty(),
        input_value: state.input_value.clone(),
        input_read_only: !config.searchable,
        active: state.active,
        disabled: config.disabled,
        show_clear: !config.disabled && config.clearable && props.value.is_some(),
        menu,
    }
}

//! Caller-supplied configuration for a select widget
//!
//! Options are opaque to the widget. Everything it needs to know about an
//! option goes through [`OptionProjections`], and everything it does on the
//! caller's behalf goes through the callbacks held by [`SelectProps`].

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::config::SelectConfig;
use crate::error::SearchError;

/// Projects an option to a string (key or label)
pub type OptionTextFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Tests whether two options carry the same value
pub type SameValueFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Invoked with the chosen option, or `None` when the selection is cleared
pub type OnChangeFn<T> = Arc<dyn Fn(Option<T>) + Send + Sync>;

/// Per-option disable predicate, given the option and its visible index
pub type OptionDisabledFn<T> = Arc<dyn Fn(&T, usize) -> bool + Send + Sync>;

/// External async search capability
pub type AsyncSearchFn<T> =
    Arc<dyn Fn(String) -> BoxFuture<'static, Result<Vec<T>, SearchError>> + Send + Sync>;

/// Pure functions the widget uses to look inside an option.
pub struct OptionProjections<T> {
    key: OptionTextFn<T>,
    label: OptionTextFn<T>,
    same_value: SameValueFn<T>,
}

impl<T> Clone for OptionProjections<T> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            label: Arc::clone(&self.label),
            same_value: Arc::clone(&self.same_value),
        }
    }
}

impl<T> fmt::Debug for OptionProjections<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionProjections").finish_non_exhaustive()
    }
}

impl<T> OptionProjections<T>
where
    T: fmt::Display + PartialEq + 'static,
{
    /// Key and label are the option's `Display` text; values compare with `==`.
    pub fn display() -> Self {
        Self::from_label(|option: &T| option.to_string())
    }
}

impl<T> OptionProjections<T>
where
    T: PartialEq + 'static,
{
    /// Use `label` for both key and label; values compare with `==`.
    pub fn from_label<F>(label: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        let label: OptionTextFn<T> = Arc::new(label);
        Self {
            key: Arc::clone(&label),
            label,
            same_value: Arc::new(|a: &T, b: &T| a == b),
        }
    }
}

impl<T: 'static> OptionProjections<T> {
    /// Build from explicit key and label functions and a value projection.
    pub fn new<K, L, V, R>(key: K, label: L, value: V) -> Self
    where
        K: Fn(&T) -> String + Send + Sync + 'static,
        L: Fn(&T) -> String + Send + Sync + 'static,
        V: Fn(&T) -> R + Send + Sync + 'static,
        R: PartialEq,
    {
        Self {
            key: Arc::new(key),
            label: Arc::new(label),
            same_value: Arc::new(move |a: &T, b: &T| value(a) == value(b)),
        }
    }

    pub fn with_key<K>(mut self, key: K) -> Self
    where
        K: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.key = Arc::new(key);
        self
    }

    pub fn with_label<L>(mut self, label: L) -> Self
    where
        L: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.label = Arc::new(label);
        self
    }

    /// Compare options by a projected value instead of the whole option.
    pub fn with_value<V, R>(mut self, value: V) -> Self
    where
        V: Fn(&T) -> R + Send + Sync + 'static,
        R: PartialEq,
    {
        self.same_value = Arc::new(move |a: &T, b: &T| value(a) == value(b));
        self
    }

    pub fn key(&self, option: &T) -> String {
        (self.key)(option)
    }

    pub fn label(&self, option: &T) -> String {
        (self.label)(option)
    }

    pub fn same_value(&self, a: &T, b: &T) -> bool {
        (self.same_value)(a, b)
    }
}

/// Everything the caller hands a select widget.
pub struct SelectProps<T> {
    /// Source options, in display order
    pub options: Vec<T>,
    /// Currently selected option, owned by the caller
    pub value: Option<T>,
    /// Selection callback; `None` means "cleared"
    pub on_change: OnChangeFn<T>,
    /// Key/label/value projections
    pub projections: OptionProjections<T>,
    /// Optional per-option disable predicate
    pub option_is_disabled: Option<OptionDisabledFn<T>>,
    /// Optional external search; replaces local filtering when configured
    pub async_search: Option<AsyncSearchFn<T>>,
    /// Display text and tuning
    pub config: SelectConfig,
}

impl<T> fmt::Debug for SelectProps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("options", &self.options.len())
            .field("has_value", &self.value.is_some())
            .field("option_is_disabled", &self.option_is_disabled.is_some())
            .field("async_search", &self.async_search.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> SelectProps<T>
where
    T: Clone + Send + 'static,
{
    pub fn new<F>(options: Vec<T>, projections: OptionProjections<T>, on_change: F) -> Self
    where
        F: Fn(Option<T>) + Send + Sync + 'static,
    {
        Self {
            options,
            value: None,
            on_change: Arc::new(on_change),
            projections,
            option_is_disabled: None,
            async_search: None,
            config: SelectConfig::default(),
        }
    }

    pub fn value(mut self, value: Option<T>) -> Self {
        self.value = value;
        self
    }

    pub fn config(mut self, config: SelectConfig) -> Self {
        self.config = config;
        self
    }

    pub fn option_is_disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, usize) -> bool + Send + Sync + 'static,
    {
        self.option_is_disabled = Some(Arc::new(predicate));
        self
    }

    /// Install an async search. Any error type that implements `Display` is
    /// accepted; failures are reported to the widget as [`SearchError::Failed`].
    pub fn async_search<F, Fut, E>(mut self, search: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
        E: fmt::Display + 'static,
    {
        self.async_search = Some(Arc::new(move |text: String| {
            search(text)
                .map(|result| result.map_err(|e| SearchError::failed(e.to_string())))
                .boxed()
        }));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn no_options_message(mut self, message: impl Into<String>) -> Self {
        self.config.no_options_message = message.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.config.clearable = clearable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    pub fn async_search_debounce_ms(mut self, ms: u64) -> Self {
        self.config.async_search_debounce_ms = ms;
        self
    }

    pub fn async_search_min_length(mut self, len: usize) -> Self {
        self.config.async_search_min_length = len;
        self
    }

    pub fn async_searching_text(mut self, text: impl Into<String>) -> Self {
        self.config.async_searching_text = text.into();
        self
    }
}

impl<T> SelectProps<T> {
    pub fn is_option_disabled(&self, option: &T, index: usize) -> bool {
        self.option_is_disabled
            .as_ref()
            .is_some_and(|predicate| predicate(option, index))
    }

    /// Whether `text` should go to the async search rather than the local filter.
    pub fn wants_async_search(&self, text: &str) -> bool {
        self.async_search.is_some() && text.chars().count() >= self.config.async_search_min_length
    }
}

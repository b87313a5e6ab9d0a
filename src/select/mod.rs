//! Searchable, keyboard-navigable select widget core
//!
//! - [`model`] holds the state and the pure reducer
//! - [`controller`] maps UI input to actions and runs side effects
//! - [`search`] filters options locally
//! - [`view_model`] derives what a renderer needs to draw

pub mod controller;
pub mod debounce;
pub mod host;
pub mod keymap;
pub mod model;
pub mod props;
pub mod region;
pub mod search;
pub mod view_model;

pub use controller::SelectController;
pub use debounce::Debouncer;
pub use host::{NoopHost, SelectHost};
pub use keymap::{KeyIntent, KeyOutcome, key_to_intent};
pub use model::{Highlight, ReduceContext, SelectAction, SelectState, reduce};
pub use props::{AsyncSearchFn, OnChangeFn, OptionProjections, SelectProps};
pub use region::{Point, PointerTarget, Rect, WidgetRegions};
pub use search::{filter_options, wrap_index};
pub use view_model::{MenuViewModel, OptionRow, SelectViewModel, compute_view_model, label_id};

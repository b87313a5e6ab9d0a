pub mod config;
pub mod error;
pub mod select;
pub mod utils;

pub use config::SelectConfig;
pub use error::{Result, SearchError, SelectError};
pub use select::{
    Highlight, KeyOutcome, NoopHost, OptionProjections, PointerTarget, SelectAction,
    SelectController, SelectHost, SelectProps, SelectState, SelectViewModel, reduce,
};
pub use utils::{IdGenerator, SequentialIds, UuidIds, generate_uuid};

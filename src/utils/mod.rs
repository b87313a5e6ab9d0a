pub mod id;

pub use id::{IdGenerator, SequentialIds, UuidIds, generate_uuid};

// File: ./src/model/mod.rs
pub mod dates;
pub mod display;
pub mod fields;
pub mod item;
pub mod language;
pub mod parser;
pub mod patterns;
pub mod recurrence;
pub mod triggers;

pub use item::{ParsedTaskData, UserFieldValue};
pub use parser::{ParserOptions, TaskParser};

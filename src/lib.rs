pub mod cli;
pub mod engine;
pub mod error;
pub mod stone;
pub mod table;

pub use engine::{build_default_table, LevelEvent, RecurrenceEngine};
pub use error::LutError;
pub use stone::{transform, Successors};
pub use table::{BlinkTable, TableShape};

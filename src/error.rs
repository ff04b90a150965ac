use thiserror::Error;

#[derive(Error, Debug)]
pub enum LutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stone count overflow at value {value}, depth {depth}")]
    Overflow { value: u64, depth: usize },

    #[error("Depth {depth} out of range (max {max})")]
    DepthOutOfRange { depth: usize, max: usize },

    #[error("Value {value} out of range (table holds values below {max})")]
    ValueOutOfRange { value: u64, max: usize },

    #[error("Invalid table: {0}")]
    InvalidTable(String),
}

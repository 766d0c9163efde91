use crate::model::Table;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    /// Raw input matches no command shape at all.
    #[error("no command matched")]
    NoCommandMatched,

    /// The leading word is a known command, but the rest of the line
    /// does not fit its shape.
    #[error("malformed {keyword} command (enter 'help' for usage)")]
    MalformedCommand { keyword: &'static str },

    /// A captured field matched the shape but failed its type constraint.
    #[error("invalid {field}: {reason}")]
    FieldType { field: &'static str, reason: String },

    /// The referenced id is absent from the table the operation requires.
    #[error("no row with id {id} in {table}")]
    NotFound { table: Table, id: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;

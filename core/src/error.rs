use surql_types::Strategy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurqlError {
    /// A referenced field is not declared on the model
    #[error("Field {field} does not exist on {table}")]
    FieldNotFound { table: String, field: String },

    /// The operation requires a capability the active transport lacks
    #[error("{operation} queries are not supported in {strategy} mode")]
    UnsupportedUnderStrategy {
        operation: &'static str,
        strategy: Strategy,
    },

    /// A write operation was given no payload
    #[error("No data supplied to {0}")]
    EmptyInput(&'static str),

    /// A chain was executed without any statements
    #[error("Cannot execute an empty query chain")]
    EmptyChain,

    /// Value-mode selection needs exactly one field
    #[error("SELECT VALUE requires exactly one field, got {0}")]
    InvalidSelection(usize),

    /// Error executing a query
    #[error("Execution error: {0}")]
    Execution(String),

    /// The connection returned no statement results
    #[error("Query returned no results")]
    EmptyResponse,

    /// Error mapping results into the requested type
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error encoding a payload
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid connection options
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SurqlError {
    pub(crate) fn field_not_found(table: &str, field: &str) -> Self {
        Self::FieldNotFound {
            table: table.to_owned(),
            field: field.to_owned(),
        }
    }
}

/// Result type for surql operations
pub type Result<T> = std::result::Result<T, SurqlError>;

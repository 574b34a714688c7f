use thiserror::Error;

/// An event record failed validation at the aggregation boundary.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Missing required field '{field}' in event record {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("Unparseable timestamp '{value}' in event record {index}")]
    InvalidTimestamp {
        value: String,
        index: usize,
        #[source]
        source: chrono::ParseError,
    },
}

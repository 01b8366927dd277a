use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A name lookup did not match any city
    #[error("City not found - {0}")]
    CityNotFound(String),

    /// A connection references a city that was never loaded. Only the single
    /// connection is dropped.
    #[error("Connection Error: City not found - {name} (line {line})")]
    MalformedEdgeReference { line: u64, name: String },
}

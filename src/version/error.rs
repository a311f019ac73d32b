use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error(
        "Could not find any version matching '{pattern}' - there are {available} version(s) available but none matched!"
    )]
    NoMatch { pattern: String, available: usize },

    #[error("Malformed version: {0:?}")]
    Malformed(String),

    #[error("Invalid version range: {0:?}")]
    InvalidRange(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

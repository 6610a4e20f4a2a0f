use thiserror::Error;

/// Failure kinds shared by every tool.
///
/// Tools fail soft: callers suppress output on `MalformedInput`, keep their
/// previous state on `OutOfRange` and disable the action on `Unsatisfiable`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Out of range: {0}")]
    OutOfRange(String),
    #[error("Unsatisfiable: {0}")]
    Unsatisfiable(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl ToolError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        ToolError::MalformedInput(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        ToolError::OutOfRange(msg.into())
    }
}

impl From<toml::de::Error> for ToolError {
    fn from(e: toml::de::Error) -> Self {
        ToolError::Config(e.to_string())
    }
}

impl From<std::io::Error> for ToolError {
    fn from(e: std::io::Error) -> Self {
        ToolError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

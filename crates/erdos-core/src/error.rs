//! Error types and exit codes for erdos
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad configuration values)
//! - 3: Data error (unreachable destination, malformed graph)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreachable vertex, malformed graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during erdos operations
#[derive(Error, Debug)]
pub enum ErdosError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{destination:?} is not reachable")]
    NotReachable { destination: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ErdosError {
    /// Create an error for a destination that the search never reached
    pub fn not_reachable(destination: impl Into<String>) -> Self {
        ErdosError::NotReachable {
            destination: destination.into(),
        }
    }

    /// Create an error for a graph that failed validation
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        ErdosError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ErdosError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ErdosError::UnknownFormat(_)
            | ErdosError::UsageError(_)
            | ErdosError::InvalidValue { .. } => ExitCode::Usage,

            ErdosError::NotReachable { .. } | ErdosError::InvalidGraph { .. } => ExitCode::Data,

            ErdosError::Io(_) | ErdosError::Json(_) | ErdosError::Toml(_) | ErdosError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ErdosError::UnknownFormat(_) => "unknown_format",
            ErdosError::UsageError(_) => "usage_error",
            ErdosError::InvalidValue { .. } => "invalid_value",
            ErdosError::NotReachable { .. } => "not_reachable",
            ErdosError::InvalidGraph { .. } => "invalid_graph",
            ErdosError::Io(_) => "io_error",
            ErdosError::Json(_) => "json_error",
            ErdosError::Toml(_) => "toml_error",
            ErdosError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let ErdosError::NotReachable { destination } = self {
            error_obj["destination"] = serde_json::json!(destination);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for erdos operations
pub type Result<T> = std::result::Result<T, ErdosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_reachable_message_quotes_destination() {
        let err = ErdosError::not_reachable("C3");
        assert_eq!(err.to_string(), "\"C3\" is not reachable");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ErdosError::not_reachable("X").exit_code(), ExitCode::Data);
        assert_eq!(ErdosError::invalid_graph("bad").exit_code(), ExitCode::Data);
        assert_eq!(
            ErdosError::UnknownFormat("xml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ErdosError::invalid_value("max_paths", 0).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            ErdosError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let json = ErdosError::not_reachable("I42").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "not_reachable");
        assert_eq!(json["error"]["destination"], "I42");
        assert_eq!(json["error"]["message"], "\"I42\" is not reachable");
    }

    #[test]
    fn test_to_json_without_destination() {
        let json = ErdosError::UsageError("missing --graph".to_string()).to_json();
        assert_eq!(json["error"]["code"], 2);
        assert!(json["error"].get("destination").is_none());
    }
}

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for fi
#[derive(Error, Debug)]
pub enum FiError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Type error: expected {expected}, found {found}")]
    Type {
        code: u16,
        expected: &'static str,
        found: &'static str,
        operation: Option<&'static str>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FiError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::config_with_code(ErrorCode::CONFIG_GENERIC, message, None)
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::input_with_code(ErrorCode::INPUT_GENERIC, message, None)
    }

    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(code: u16, expected: &'static str, found: &'static str) -> Self {
        Self::Type {
            code,
            expected,
            found,
            operation: None,
        }
    }

    /// Create a "not a collection" error for the given type name
    pub fn not_a_collection(found: &'static str) -> Self {
        Self::type_mismatch(
            ErrorCode::TYPE_NOT_A_COLLECTION,
            "a sequence or a mapping",
            found,
        )
    }

    /// Create a generic other error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Record which operation rejected the value (type errors only)
    pub fn in_operation(mut self, name: &'static str) -> Self {
        if let Self::Type {
            ref mut operation, ..
        } = self
        {
            *operation = Some(name);
        }
        self
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. }
            | Self::Input { source: src, .. }
            | Self::Other { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Type { .. } => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Config { message, .. }
            | Self::Input { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
            Self::Type { .. } => {}
        }
        self
    }

    /// Attach a path to configuration and input errors
    pub fn with_path(mut self, new_path: impl Into<PathBuf>) -> Self {
        match &mut self {
            Self::Config { path, .. } | Self::Input { path, .. } => {
                *path = Some(new_path.into());
            }
            Self::Type { .. } | Self::Other { .. } => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Input { .. } => 3,
            Self::Type { .. } => 4,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Type { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Input { message, path, .. } => match path {
                Some(p) => format!("Cannot use input {}: {}", p.display(), message),
                None => format!("Cannot use input: {}", message),
            },
            Self::Type {
                expected,
                found,
                operation,
                ..
            } => match operation {
                Some(op) => format!("{} expected {}, got {}", op, expected, found),
                None => format!("Expected {}, got {}", expected, found),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        out
    }
}

/// Type alias for Results using FiError
pub type Result<T> = std::result::Result<T, FiError>;

// Conversion from common error types

impl From<std::io::Error> for FiError {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let (code, message) = match err.kind() {
            ErrorKind::NotFound => (ErrorCode::INPUT_NOT_FOUND, "File not found"),
            ErrorKind::PermissionDenied => {
                (ErrorCode::INPUT_PERMISSION_DENIED, "Permission denied")
            }
            _ => (ErrorCode::INPUT_READ_FAILED, "IO operation failed"),
        };

        FiError::input_with_code(code, message, None).with_source(err)
    }
}

impl From<serde_json::Error> for FiError {
    fn from(err: serde_json::Error) -> Self {
        FiError::input_with_code(ErrorCode::INPUT_INVALID_JSON, "Invalid JSON syntax", None)
            .with_source(err)
    }
}

impl From<toml::de::Error> for FiError {
    fn from(err: toml::de::Error) -> Self {
        FiError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax", None)
            .with_source(err)
    }
}

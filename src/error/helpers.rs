use super::{ErrorCode, FiError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to FiError with context
    fn to_fi(self, context: impl Into<String>) -> Result<T, FiError>;

    /// Convert to FiError with specific error type
    fn to_config_error(self, message: impl Into<String>) -> Result<T, FiError>;
    fn to_input_error(self, message: impl Into<String>) -> Result<T, FiError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_fi(self, context: impl Into<String>) -> Result<T, FiError> {
        self.map_err(|e| FiError::other(context).with_source(e))
    }

    fn to_config_error(self, message: impl Into<String>) -> Result<T, FiError> {
        self.map_err(|e| FiError::config(message).with_source(e))
    }

    fn to_input_error(self, message: impl Into<String>) -> Result<T, FiError> {
        self.map_err(|e| FiError::input(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> FiError {
        FiError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            "Configuration file not found",
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// Create an error for a value that must be a sequence
    pub fn not_a_sequence(found: &'static str) -> FiError {
        FiError::type_mismatch(ErrorCode::TYPE_NOT_A_SEQUENCE, "a sequence", found)
    }

    /// Create an error for a value that must be numeric
    pub fn not_a_number(found: &'static str) -> FiError {
        FiError::type_mismatch(ErrorCode::TYPE_NOT_A_NUMBER, "a number", found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_ext_wraps_source() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
        let err = result.to_input_error("Cannot read items").unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_GENERIC);
        assert!(err.developer_message().contains("disk gone"));
    }

    #[test]
    fn test_common_helpers() {
        let err = common::config_not_found("fi.toml");
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert!(err.user_message().contains("fi.toml"));

        assert_eq!(
            common::not_a_sequence("object").code(),
            ErrorCode::TYPE_NOT_A_SEQUENCE
        );
        assert_eq!(
            common::not_a_number("string").code(),
            ErrorCode::TYPE_NOT_A_NUMBER
        );
    }
}

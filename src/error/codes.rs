/// Error code registry for fi
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input errors
/// - 3000-3999: Type errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_READ_FAILED: u16 = 2002;
    pub const INPUT_INVALID_JSON: u16 = 2003;
    pub const INPUT_PERMISSION_DENIED: u16 = 2004;

    // Type errors (3000-3999)
    pub const TYPE_NOT_A_COLLECTION: u16 = 3001;
    pub const TYPE_NOT_A_SEQUENCE: u16 = 3002;
    pub const TYPE_NOT_A_NUMBER: u16 = 3004;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",

        // Input errors
        2000 => "Generic input error",
        2001 => "Input file not found",
        2002 => "Failed to read input",
        2003 => "Input is not valid JSON",
        2004 => "Permission denied reading input",

        // Type errors
        3001 => "Value is neither a sequence nor a mapping",
        3002 => "Value is not a sequence",
        3004 => "Value is not a number",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::CONFIG_GENERIC >= 1000 && ErrorCode::CONFIG_GENERIC < 2000);
        assert!(ErrorCode::INPUT_GENERIC >= 2000 && ErrorCode::INPUT_GENERIC < 3000);
        assert!(ErrorCode::TYPE_NOT_A_COLLECTION >= 3000 && ErrorCode::TYPE_NOT_A_COLLECTION < 4000);
        assert!(ErrorCode::OTHER_GENERIC >= 9000 && ErrorCode::OTHER_GENERIC < 10000);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(describe_error_code(1001), "Configuration file not found");
        assert_eq!(
            describe_error_code(ErrorCode::TYPE_NOT_A_COLLECTION),
            "Value is neither a sequence nor a mapping"
        );
        assert_eq!(describe_error_code(65535), "Unknown error code");
        assert_eq!(describe_error_code(3003), "Unknown error code");
    }
}

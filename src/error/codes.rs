/// Error code registry for Jobscope
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Load errors (job store I/O and decoding)
/// - 5000-5999: Date parse errors
/// - 7000-7999: Precondition errors
/// - 9000-9999: Other errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PARSE_ERROR: u16 = 1007;

    // Load errors (3000-3999)
    pub const LOAD_GENERIC: u16 = 3000;
    pub const LOAD_IO_ERROR: u16 = 3001;
    pub const LOAD_NOT_FOUND: u16 = 3004;
    pub const LOAD_DECODE_ERROR: u16 = 3012;
    pub const LOAD_REFRESH_FAILED: u16 = 3020;

    // Date parse errors (5000-5999)
    pub const PARSE_GENERIC: u16 = 5000;
    pub const PARSE_DATE_MISMATCH: u16 = 5001;
    pub const PARSE_UNKNOWN_FORMAT: u16 = 5002;

    // Precondition errors (7000-7999)
    pub const PRECONDITION_GENERIC: u16 = 7000;
    pub const PRECONDITION_MISSING_VALUE: u16 = 7001;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        ErrorCode::CONFIG_GENERIC => "General configuration error",
        ErrorCode::CONFIG_NOT_FOUND => "Configuration file not found",
        ErrorCode::CONFIG_INVALID_VALUE => "Invalid configuration value",
        ErrorCode::CONFIG_PARSE_ERROR => "Configuration file could not be parsed",

        ErrorCode::LOAD_GENERIC => "General job store error",
        ErrorCode::LOAD_IO_ERROR => "Job store I/O operation failed",
        ErrorCode::LOAD_NOT_FOUND => "Job store file not found",
        ErrorCode::LOAD_DECODE_ERROR => "Job records could not be decoded",
        ErrorCode::LOAD_REFRESH_FAILED => "Job store refresh failed",

        ErrorCode::PARSE_GENERIC => "General date parse error",
        ErrorCode::PARSE_DATE_MISMATCH => "Date string does not match the input format",
        ErrorCode::PARSE_UNKNOWN_FORMAT => "Date format could not be rendered",

        ErrorCode::PRECONDITION_GENERIC => "Precondition failed",
        ErrorCode::PRECONDITION_MISSING_VALUE => "Required value was absent",

        ErrorCode::OTHER_GENERIC => "Unknown error",
        _ => "Unrecognized error code",
    }
}

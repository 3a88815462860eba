//! Error types for devtools-kit

pub type Result<T> = std::result::Result<T, KitError>;

#[derive(Debug, thiserror::Error)]
pub enum KitError {
    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown regex flag '{flag}' (expected any of: {supported})")]
    UnknownFlag { flag: char, supported: &'static str },

    #[error("Invalid Base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Decoded data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

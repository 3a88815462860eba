//! Error types for devtools-highlight

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown language '{name}' (supported: {supported})")]
    UnknownLanguage { name: String, supported: String },
}

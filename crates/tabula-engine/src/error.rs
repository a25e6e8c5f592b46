use std::fmt;

/// Result type for tabula-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// A field name that the inferred schema does not contain
    UnknownField(String),

    /// A field exists but cannot be used for the requested operation
    UnsupportedField { field: String, reason: String },

    /// A date argument that could not be parsed
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownField(name) => write!(f, "Unknown field: {}", name),
            Error::UnsupportedField { field, reason } => {
                write!(f, "Field '{}' cannot be used here: {}", field, reason)
            }
            Error::InvalidDate(input) => write!(f, "Invalid date: {}", input),
        }
    }
}

impl std::error::Error for Error {}

use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Folio operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Folio operations
#[derive(Debug)]
pub enum FolioError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Metadata document exists but failed to parse
    Metadata(String),
    /// Template processing error
    Template(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Io(err) => write!(f, "IO error: {}", err),
            FolioError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FolioError::Metadata(msg) => write!(f, "Metadata error: {}", msg),
            FolioError::Template(msg) => write!(f, "Template error: {}", msg),
            FolioError::Server(msg) => write!(f, "Server error: {}", msg),
            FolioError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for FolioError {}

impl From<io::Error> for FolioError {
    fn from(err: io::Error) -> Self {
        FolioError::Io(err)
    }
}

impl From<String> for FolioError {
    fn from(msg: String) -> Self {
        FolioError::Generic(msg)
    }
}

impl From<&str> for FolioError {
    fn from(msg: &str) -> Self {
        FolioError::Generic(msg.to_string())
    }
}

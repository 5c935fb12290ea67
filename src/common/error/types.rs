use thiserror::Error;

/// Main error type for demodeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid invocation: unknown palette, unreadable content file,
    /// output path that cannot be written.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error was caused by the invocation rather than by
    /// the package serializer.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

/// Result type for demodeck operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! format-layer error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::XmlError(s),
            OoxmlError::Zip(s) => Error::ZipError(s),
            OoxmlError::InvalidFormat(s) | OoxmlError::Other(s) => Error::Other(s),
        }
    }
}

impl From<serde_saphyr::Error> for Error {
    fn from(err: serde_saphyr::Error) -> Self {
        Error::Configuration(format!("invalid content file: {}", err))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

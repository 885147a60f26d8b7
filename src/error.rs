//! Error types for parsing, writing and value conversion.
//!
//! Absence is never an error in this crate: a missing key or a path that
//! resolves to nothing is reported as `None`. The variants here cover the
//! exceptional cases only.
//!
//! ## Error Categories
//!
//! - **Read/write failures**: the byte source or sink failed
//! - **Conversion failures**: a registered converter rejected a text value
//! - **Missing converters**: a typed accessor was used for a type nobody registered
//!
//! ## Examples
//!
//! ```rust
//! use valtree::{Error, ValTree};
//!
//! let tree: ValTree = "health lots".parse().unwrap();
//! let err = tree.query_for_integer("health").unwrap_err();
//!
//! assert!(matches!(err, Error::UnableToConvertFromText { .. }));
//! assert_eq!(err.text(), Some("lots"));
//! ```

use std::io;
use std::sync::Arc;
use thiserror::Error;

/// The underlying reason a converter rejected its input.
pub type Cause = Arc<dyn std::error::Error + Send + Sync>;

/// Represents all possible errors raised by the tree, its parser and its converters.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input could not be read, or the output could not be written.
    #[error("A problem occurred trying to read or write the tree source: {0}")]
    SourceRead(#[source] Arc<io::Error>),

    /// A registered converter failed to turn `text` into `target_type`.
    #[error("Unable to convert text=[{text}] into type {target_type}: {cause}")]
    UnableToConvertFromText {
        text: String,
        target_type: &'static str,
        #[source]
        cause: Cause,
    },

    /// No converter is registered for the requested type.
    #[error("No registered ValueConverter found for type: {type_name}")]
    MissingConverter { type_name: &'static str },
}

impl Error {
    /// Wraps an I/O failure of the byte source or sink.
    pub fn source_read(err: io::Error) -> Self {
        Error::SourceRead(Arc::new(err))
    }

    /// Creates a conversion failure for `text` targeting `target_type`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use valtree::Error;
    ///
    /// let cause = "x".parse::<i32>().unwrap_err();
    /// let err = Error::unable_to_convert("x", "i32", Arc::new(cause));
    /// assert!(err.to_string().contains("text=[x]"));
    /// ```
    pub fn unable_to_convert(text: &str, target_type: &'static str, cause: Cause) -> Self {
        Error::UnableToConvertFromText {
            text: text.to_string(),
            target_type,
            cause,
        }
    }

    /// Creates a missing-converter error for the named type.
    pub fn missing_converter(type_name: &'static str) -> Self {
        Error::MissingConverter { type_name }
    }

    /// The offending text of a conversion failure.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Error::UnableToConvertFromText { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The type a conversion or lookup was aimed at.
    #[must_use]
    pub fn target_type(&self) -> Option<&'static str> {
        match self {
            Error::UnableToConvertFromText { target_type, .. } => Some(target_type),
            Error::MissingConverter { type_name } => Some(type_name),
            Error::SourceRead(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::source_read(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Text to typed-value conversion.
//!
//! Every value in a tree is stored as raw text. A [`ValueConverter`] turns that
//! text into a typed value and back, and a [`ConverterRegistry`] maps each
//! target type to the converter responsible for it.
//!
//! ## Standard converters
//!
//! [`ConverterRegistry::new`] comes with converters for:
//!
//! - `String`, `bool`, `i32`, `i64`, `u32`, `u64`
//! - `f32`, `f64` (always printed with a decimal point, e.g. `100.0`)
//! - [`Vector2`], [`Vector3`] (e.g. `(1.0, 2.0)`)
//! - `num_bigint::BigInt`, `chrono::DateTime<Utc>` (RFC 3339)
//!
//! Enumerations are opt-in through [`EnumConverter`].
//!
//! ## Writing a converter
//!
//! ```rust
//! use valtree::converter::{ConvertResult, ValueConverter};
//! use valtree::ValTree;
//!
//! #[derive(Debug, PartialEq)]
//! struct Percent(u8);
//!
//! struct PercentConverter;
//!
//! impl ValueConverter for PercentConverter {
//!     type Value = Percent;
//!
//!     fn from_text(&self, text: &str) -> ConvertResult<Percent> {
//!         let digits = text.trim_end_matches('%');
//!         Ok(Percent(digits.parse()?))
//!     }
//!
//!     fn to_text(&self, value: &Percent) -> String {
//!         format!("{}%", value.0)
//!     }
//! }
//!
//! let mut tree: ValTree = "armor 40%".parse().unwrap();
//! tree.register_converter(PercentConverter);
//!
//! assert_eq!(tree.query_for::<Percent>("armor").unwrap(), Some(Percent(40)));
//! ```

mod datetime;
mod enumeration;
mod primitive;
mod registry;
mod vector;

pub use datetime::DateTimeConverter;
pub use enumeration::EnumConverter;
pub use primitive::{FloatConverter, IntegerConverter, ParseConverter, StringConverter};
pub use registry::{ConverterRegistry, DynConverter};
pub use vector::{Vector2, Vector2Converter, Vector3, Vector3Converter};

use crate::error::{Error, Result};
use std::any::type_name;
use std::sync::Arc;

/// What a converter returns from [`ValueConverter::from_text`].
///
/// Any error type converts into the boxed cause with `?`, and so do plain
/// `String` / `&str` messages via `.into()`.
pub type ConvertResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// A bidirectional adapter between raw text and a typed value.
///
/// Implementors only provide [`from_text`](ValueConverter::from_text) and
/// [`to_text`](ValueConverter::to_text). The provided `convert_*` methods add
/// the null/blank handling and wrap failures into
/// [`Error::UnableToConvertFromText`].
pub trait ValueConverter: Send + Sync + 'static {
    /// The typed value this converter produces.
    type Value: 'static;

    /// Parses non-blank text into a value.
    fn from_text(&self, text: &str) -> ConvertResult<Self::Value>;

    /// Renders a value as text.
    fn to_text(&self, value: &Self::Value) -> String;

    /// Converts optional text, treating `None` and whitespace-only text as "no value".
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnableToConvertFromText`] carrying the original text
    /// when [`from_text`](ValueConverter::from_text) fails.
    fn convert_from_text(&self, text: Option<&str>) -> Result<Option<Self::Value>> {
        match text {
            None => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(None),
            Some(text) => self.from_text(text).map(Some).map_err(|cause| {
                Error::unable_to_convert(text, type_name::<Self::Value>(), Arc::from(cause))
            }),
        }
    }

    /// Converts an optional value, producing an empty string for `None`.
    fn convert_to_text(&self, value: Option<&Self::Value>) -> String {
        match value {
            Some(value) => self.to_text(value),
            None => String::new(),
        }
    }
}

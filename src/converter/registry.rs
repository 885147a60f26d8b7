use super::{
    DateTimeConverter, FloatConverter, IntegerConverter, ParseConverter, StringConverter,
    ValueConverter, Vector2Converter, Vector3Converter,
};
use crate::error::{Error, Result};
use num_bigint::BigInt;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A type-erased converter producing `T`.
pub type DynConverter<T> = dyn ValueConverter<Value = T>;

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    // Holds an `Arc<DynConverter<T>>` for the `T` this entry is keyed by.
    converter: Arc<dyn Any + Send + Sync>,
}

/// Maps a target type to the converter responsible for it.
///
/// Registries are plain values: every [`ValTree`](crate::ValTree) holds one
/// behind an `Arc`, so trees can share a registry or carry isolated ones.
/// Registering a converter for a type that already has one replaces it.
///
/// # Examples
///
/// ```rust
/// use valtree::converter::{ConverterRegistry, IntegerConverter};
///
/// let registry = ConverterRegistry::new();
/// assert_eq!(registry.convert_from_text::<i32>(Some("42")).unwrap(), Some(42));
///
/// let mut empty = ConverterRegistry::empty();
/// assert!(empty.convert_from_text::<i32>(Some("42")).is_err());
/// empty.register(IntegerConverter::default());
/// assert!(empty.contains::<i32>());
/// ```
#[derive(Clone)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Entry>,
}

impl ConverterRegistry {
    /// Creates a registry with the standard converters installed.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry
            .register(StringConverter)
            .register(IntegerConverter::default())
            .register(FloatConverter::<f32>::default())
            .register(ParseConverter::<i64>::default())
            .register(ParseConverter::<u32>::default())
            .register(ParseConverter::<u64>::default())
            .register(FloatConverter::<f64>::default())
            .register(ParseConverter::<bool>::default())
            .register(ParseConverter::<BigInt>::default())
            .register(Vector2Converter)
            .register(Vector3Converter)
            .register(DateTimeConverter);
        registry
    }

    /// Creates a registry with no converters at all.
    #[must_use]
    pub fn empty() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Registers `converter` for its value type, replacing any previous one.
    pub fn register<C: ValueConverter>(&mut self, converter: C) -> &mut Self {
        let name = type_name::<C::Value>();
        let converter: Arc<DynConverter<C::Value>> = Arc::new(converter);
        let previous = self.converters.insert(
            TypeId::of::<C::Value>(),
            Entry {
                type_name: name,
                converter: Arc::new(converter),
            },
        );
        trace!(
            type_name = name,
            replaced = previous.is_some(),
            "registered value converter"
        );
        self
    }

    /// Returns the converter registered for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConverter`] when nothing is registered for `T`.
    pub fn lookup<T: 'static>(&self) -> Result<&DynConverter<T>> {
        self.converters
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.converter.downcast_ref::<Arc<DynConverter<T>>>())
            .map(|converter| &**converter)
            .ok_or_else(|| Error::missing_converter(type_name::<T>()))
    }

    /// Returns `true` if a converter is registered for `T`.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Converts optional text into a `T` with the registered converter.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingConverter`] or [`Error::UnableToConvertFromText`].
    pub fn convert_from_text<T: 'static>(&self, text: Option<&str>) -> Result<Option<T>> {
        self.lookup::<T>()?.convert_from_text(text)
    }

    /// Converts an optional `T` into text with the registered converter.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MissingConverter`] when nothing is registered for `T`.
    pub fn convert_to_text<T: 'static>(&self, value: Option<&T>) -> Result<String> {
        Ok(self.lookup::<T>()?.convert_to_text(value))
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.converters.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("types", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::ConvertResult;

    struct Doubled;

    impl ValueConverter for Doubled {
        type Value = i32;

        fn from_text(&self, text: &str) -> ConvertResult<i32> {
            Ok(text.parse::<i32>()? * 2)
        }

        fn to_text(&self, value: &i32) -> String {
            (value / 2).to_string()
        }
    }

    #[test]
    fn test_standard_converters_installed() {
        let registry = ConverterRegistry::new();
        assert!(registry.contains::<String>());
        assert!(registry.contains::<i32>());
        assert!(registry.contains::<f32>());
        assert!(registry.contains::<BigInt>());
        assert_eq!(registry.len(), 12);
    }

    #[test]
    fn test_missing_converter() {
        let registry = ConverterRegistry::empty();
        assert!(registry.is_empty());

        let err = registry.convert_from_text::<i32>(Some("1")).unwrap_err();
        assert!(matches!(err, Error::MissingConverter { type_name: "i32" }));

        let err = registry.convert_to_text::<i32>(Some(&1)).unwrap_err();
        assert!(matches!(err, Error::MissingConverter { .. }));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = ConverterRegistry::new();
        assert_eq!(registry.convert_from_text::<i32>(Some("21")).unwrap(), Some(21));

        registry.register(Doubled);
        assert_eq!(registry.convert_from_text::<i32>(Some("21")).unwrap(), Some(42));
        assert_eq!(registry.convert_to_text(Some(&42)).unwrap(), "21");
    }

    #[test]
    fn test_clones_are_independent() {
        let original = ConverterRegistry::new();
        let mut copy = original.clone();
        copy.register(Doubled);

        assert_eq!(original.convert_from_text::<i32>(Some("2")).unwrap(), Some(2));
        assert_eq!(copy.convert_from_text::<i32>(Some("2")).unwrap(), Some(4));
    }

    #[test]
    fn test_debug_lists_types() {
        let mut registry = ConverterRegistry::empty();
        registry.register(Doubled);
        assert_eq!(format!("{:?}", registry), "ConverterRegistry { types: [\"i32\"] }");
    }
}

use super::{ConvertResult, ValueConverter};
use serde::de::value::Error as ValueError;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::ser::{self, Impossible, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::warn;

/// Converts unit-variant enums by their serde variant names.
///
/// Reading upper-cases the text and replaces spaces with `_` before looking
/// up the variant, so `reading minds` selects the variant named
/// `READING_MINDS`. Writing does the reverse and prints `READING MINDS`.
/// Pair it with `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]`.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use valtree::converter::{EnumConverter, ValueConverter};
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// enum Trait {
///     Hearing,
///     ReadingMinds,
/// }
///
/// let converter = EnumConverter::<Trait>::new();
/// assert_eq!(converter.from_text("reading minds").unwrap(), Trait::ReadingMinds);
/// assert_eq!(converter.to_text(&Trait::ReadingMinds), "READING MINDS");
/// ```
pub struct EnumConverter<E>(PhantomData<fn() -> E>);

impl<E> EnumConverter<E> {
    #[must_use]
    pub fn new() -> Self {
        EnumConverter(PhantomData)
    }
}

impl<E> Default for EnumConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EnumConverter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumConverter<{}>", std::any::type_name::<E>())
    }
}

impl<E> ValueConverter for EnumConverter<E>
where
    E: Serialize + DeserializeOwned + 'static,
{
    type Value = E;

    fn from_text(&self, text: &str) -> ConvertResult<E> {
        let symbol = text.to_uppercase().replace(' ', "_");
        let deserializer: serde::de::value::StrDeserializer<'_, ValueError> =
            symbol.as_str().into_deserializer();
        Ok(E::deserialize(deserializer)?)
    }

    fn to_text(&self, value: &E) -> String {
        match value.serialize(VariantName) {
            Ok(name) => name.replace('_', " "),
            Err(err) => {
                warn!(
                    target_type = std::any::type_name::<E>(),
                    error = %err,
                    "value does not serialize as a unit variant"
                );
                String::new()
            }
        }
    }
}

/// Captures the name of a unit variant (or a plain string) and rejects anything else.
struct VariantName;

fn unsupported(what: &str) -> ValueError {
    ser::Error::custom(format!("expected a unit enum variant, found {}", what))
}

impl ser::Serializer for VariantName {
    type Ok = String;
    type Error = ValueError;

    type SerializeSeq = Impossible<String, ValueError>;
    type SerializeTuple = Impossible<String, ValueError>;
    type SerializeTupleStruct = Impossible<String, ValueError>;
    type SerializeTupleVariant = Impossible<String, ValueError>;
    type SerializeMap = Impossible<String, ValueError>;
    type SerializeStruct = Impossible<String, ValueError>;
    type SerializeStructVariant = Impossible<String, ValueError>;

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, ValueError> {
        Ok(variant.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, ValueError> {
        Ok(v.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String, ValueError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String, ValueError> {
        Err(unsupported("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String, ValueError> {
        Err(unsupported("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String, ValueError> {
        Err(unsupported("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, ValueError> {
        Err(unsupported("float"))
    }

    fn serialize_char(self, _v: char) -> Result<String, ValueError> {
        Err(unsupported("char"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, ValueError> {
        Err(unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<String, ValueError> {
        Err(unsupported("none"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String, ValueError>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported("option"))
    }

    fn serialize_unit(self) -> Result<String, ValueError> {
        Err(unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String, ValueError> {
        Err(unsupported(name))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String, ValueError>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, ValueError> {
        Err(unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, ValueError> {
        Err(unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, ValueError> {
        Err(unsupported(name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, ValueError> {
        Err(unsupported(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, ValueError> {
        Err(unsupported("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, ValueError> {
        Err(unsupported(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, ValueError> {
        Err(unsupported(variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Trait {
        Hearing,
        ReadingMinds,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    enum Shape {
        Circle(f32),
    }

    #[test]
    fn test_from_text_ignores_case_and_spaces() {
        let converter = EnumConverter::<Trait>::new();
        assert_eq!(converter.from_text("HEARING").unwrap(), Trait::Hearing);
        assert_eq!(converter.from_text("hearing").unwrap(), Trait::Hearing);
        assert_eq!(converter.from_text("reading minds").unwrap(), Trait::ReadingMinds);
    }

    #[test]
    fn test_to_text_uses_spaces() {
        let converter = EnumConverter::<Trait>::new();
        assert_eq!(converter.to_text(&Trait::Hearing), "HEARING");
        assert_eq!(converter.to_text(&Trait::ReadingMinds), "READING MINDS");
    }

    #[test]
    fn test_unknown_variant_is_conversion_failure() {
        let err = EnumConverter::<Trait>::new()
            .convert_from_text(Some("does.not.exist"))
            .unwrap_err();
        assert!(matches!(err, Error::UnableToConvertFromText { .. }));
        assert_eq!(err.text(), Some("does.not.exist"));
    }

    #[test]
    fn test_non_unit_variant_writes_empty_text() {
        let converter = EnumConverter::<Shape>::new();
        assert_eq!(converter.to_text(&Shape::Circle(1.0)), "");
    }
}

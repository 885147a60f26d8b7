use super::{ConvertResult, ValueConverter};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Identity converter for `String` values.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringConverter;

impl ValueConverter for StringConverter {
    type Value = String;

    fn from_text(&self, text: &str) -> ConvertResult<String> {
        Ok(text.to_string())
    }

    fn to_text(&self, value: &String) -> String {
        value.clone()
    }
}

/// Converts any `T: FromStr + Display` through its standard text form.
///
/// # Examples
///
/// ```rust
/// use valtree::converter::{ParseConverter, ValueConverter};
///
/// let converter = ParseConverter::<u64>::default();
/// assert_eq!(converter.convert_from_text(Some("18")).unwrap(), Some(18));
/// assert!(converter.convert_from_text(Some("-1")).is_err());
/// ```
pub struct ParseConverter<T>(PhantomData<fn() -> T>);

/// The converter behind [`NodeRef::integer`](crate::NodeRef::integer).
pub type IntegerConverter = ParseConverter<i32>;

impl<T> Default for ParseConverter<T> {
    fn default() -> Self {
        ParseConverter(PhantomData)
    }
}

impl<T> fmt::Debug for ParseConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseConverter<{}>", std::any::type_name::<T>())
    }
}

impl<T> ValueConverter for ParseConverter<T>
where
    T: FromStr + fmt::Display + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Value = T;

    fn from_text(&self, text: &str) -> ConvertResult<T> {
        Ok(text.parse::<T>()?)
    }

    fn to_text(&self, value: &T) -> String {
        value.to_string()
    }
}

/// Converts floating point values, always printing a decimal point.
///
/// `100.0` is written as `100.0` rather than `100`, so a written float reads
/// back unambiguously as a float.
///
/// # Examples
///
/// ```rust
/// use valtree::converter::{FloatConverter, ValueConverter};
///
/// let converter = FloatConverter::<f32>::default();
/// assert_eq!(converter.to_text(&100.0), "100.0");
/// assert_eq!(converter.convert_from_text(Some("2.5")).unwrap(), Some(2.5));
/// ```
pub struct FloatConverter<T>(PhantomData<fn() -> T>);

impl<T> Default for FloatConverter<T> {
    fn default() -> Self {
        FloatConverter(PhantomData)
    }
}

impl<T> fmt::Debug for FloatConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatConverter<{}>", std::any::type_name::<T>())
    }
}

impl<T> ValueConverter for FloatConverter<T>
where
    T: FromStr + fmt::Debug + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Value = T;

    fn from_text(&self, text: &str) -> ConvertResult<T> {
        Ok(text.parse::<T>()?)
    }

    fn to_text(&self, value: &T) -> String {
        // Debug keeps the trailing `.0` that Display drops
        format!("{:?}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use num_bigint::BigInt;

    #[test]
    fn test_integer_round_trip() {
        let converter = IntegerConverter::default();
        assert_eq!(converter.convert_from_text(Some("111")).unwrap(), Some(111));
        assert_eq!(converter.convert_from_text(Some("-7")).unwrap(), Some(-7));
        assert_eq!(converter.to_text(&100), "100");
    }

    #[test]
    fn test_integer_rejects_garbage() {
        let err = IntegerConverter::default()
            .convert_from_text(Some("not-a-number"))
            .unwrap_err();
        assert!(matches!(err, Error::UnableToConvertFromText { .. }));
        assert_eq!(err.text(), Some("not-a-number"));
        assert_eq!(err.target_type(), Some("i32"));
    }

    #[test]
    fn test_integer_rejects_overflow() {
        assert!(IntegerConverter::default()
            .convert_from_text(Some("3000000000"))
            .is_err());
    }

    #[test]
    fn test_float_formatting() {
        let converter = FloatConverter::<f32>::default();
        assert_eq!(converter.to_text(&100.0), "100.0");
        assert_eq!(converter.to_text(&10.1), "10.1");
        assert_eq!(converter.convert_from_text(Some("2.33")).unwrap(), Some(2.33));
        assert!(converter.convert_from_text(Some("two")).is_err());

        let double = FloatConverter::<f64>::default();
        assert_eq!(double.to_text(&-0.5), "-0.5");
    }

    #[test]
    fn test_bool_and_bigint() {
        let bools = ParseConverter::<bool>::default();
        assert_eq!(bools.convert_from_text(Some("true")).unwrap(), Some(true));
        assert!(bools.convert_from_text(Some("yes")).is_err());

        let big = ParseConverter::<BigInt>::default();
        let value = big
            .convert_from_text(Some("123456789012345678901234567890"))
            .unwrap()
            .unwrap();
        assert_eq!(big.to_text(&value), "123456789012345678901234567890");
    }

    #[test]
    fn test_string_is_identity() {
        assert_eq!(
            StringConverter.convert_from_text(Some("a b c")).unwrap(),
            Some("a b c".to_string())
        );
        assert_eq!(StringConverter.convert_from_text(Some("  ")).unwrap(), None);
    }
}

use super::{ConvertResult, ValueConverter};
use regex::Regex;
use std::sync::OnceLock;

/// A two component float vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }
}

/// A three component float vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

fn vector2_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+(\.[0-9]+)?)\s*?,\s*?([0-9]+(\.[0-9]+)?)")
            // literal pattern
            .expect("vector2 pattern is valid")
    })
}

fn vector3_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]+(\.[0-9]*)?)\s*?,\s*?([0-9]+(\.[0-9]*)?)\s*?,\s*?([0-9]+(\.[0-9]*)?)")
            // literal pattern
            .expect("vector3 pattern is valid")
    })
}

/// Reads the numeric capture groups at `groups` from the first match in `text`.
fn components<const N: usize>(
    pattern: &Regex,
    groups: [usize; N],
    text: &str,
    kind: &str,
) -> ConvertResult<[f32; N]> {
    let captures = pattern
        .captures(text)
        .ok_or_else(|| format!("no {} found in {:?}", kind, text))?;

    let mut values = [0.0; N];
    for (slot, group) in values.iter_mut().zip(groups) {
        let digits = captures
            .get(group)
            .ok_or_else(|| format!("missing component in {:?}", text))?;
        *slot = digits.as_str().parse()?;
    }
    Ok(values)
}

/// Converts [`Vector2`] values written as `(x, y)`.
///
/// Reading picks the first `x, y` pair anywhere in the text, so the
/// parentheses and the spacing are optional. Components are unsigned.
///
/// # Examples
///
/// ```rust
/// use valtree::converter::{ValueConverter, Vector2, Vector2Converter};
///
/// assert_eq!(Vector2Converter.to_text(&Vector2::new(1.0, 2.0)), "(1.0, 2.0)");
/// assert_eq!(
///     Vector2Converter.convert_from_text(Some("( 1 , 2 )")).unwrap(),
///     Some(Vector2::new(1.0, 2.0))
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2Converter;

impl ValueConverter for Vector2Converter {
    type Value = Vector2;

    fn from_text(&self, text: &str) -> ConvertResult<Vector2> {
        let [x, y] = components(vector2_pattern(), [1, 3], text, "vector2")?;
        Ok(Vector2::new(x, y))
    }

    fn to_text(&self, value: &Vector2) -> String {
        format!("({:?}, {:?})", value.x, value.y)
    }
}

/// Converts [`Vector3`] values written as `(x, y, z)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3Converter;

impl ValueConverter for Vector3Converter {
    type Value = Vector3;

    fn from_text(&self, text: &str) -> ConvertResult<Vector3> {
        let [x, y, z] = components(vector3_pattern(), [1, 3, 5], text, "vector3")?;
        Ok(Vector3::new(x, y, z))
    }

    fn to_text(&self, value: &Vector3) -> String {
        format!("({:?}, {:?}, {:?})", value.x, value.y, value.z)
    }
}

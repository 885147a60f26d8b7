use super::{ConvertResult, ValueConverter};
use chrono::{DateTime, SecondsFormat, Utc};

/// Converts UTC timestamps written in RFC 3339 form.
///
/// Offsets other than `Z` are accepted on input and normalized to UTC.
///
/// # Examples
///
/// ```rust
/// use valtree::converter::{DateTimeConverter, ValueConverter};
///
/// let stamp = DateTimeConverter.from_text("2024-03-01T12:30:00+02:00").unwrap();
/// assert_eq!(DateTimeConverter.to_text(&stamp), "2024-03-01T10:30:00Z");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DateTimeConverter;

impl ValueConverter for DateTimeConverter {
    type Value = DateTime<Utc>;

    fn from_text(&self, text: &str) -> ConvertResult<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
    }

    fn to_text(&self, value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip() {
        let stamp = Utc.with_ymd_and_hms(2023, 11, 5, 8, 0, 0).unwrap();
        let text = DateTimeConverter.to_text(&stamp);
        assert_eq!(text, "2023-11-05T08:00:00Z");
        assert_eq!(DateTimeConverter.from_text(&text).unwrap(), stamp);
    }

    #[test]
    fn test_rejects_loose_dates() {
        assert!(DateTimeConverter
            .convert_from_text(Some("next tuesday"))
            .is_err());
    }
}

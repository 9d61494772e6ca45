//! Time related utils.

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Time format for the WSSE `Created` field: "2014-03-16T04:10:43Z".
///
/// ISO 8601 at second precision with a literal trailing `Z`, as required by
/// the Omniture API.
pub const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Create a new DateTime for the current time in UTC.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a DateTime into the WSSE `Created` representation.
pub fn format_created(t: DateTime) -> String {
    t.format(CREATED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    #[test]
    fn test_format_created() {
        let t = Utc.with_ymd_and_hms(2014, 3, 16, 4, 10, 43).unwrap();
        assert_eq!(format_created(t), "2014-03-16T04:10:43Z");
    }

    #[test]
    fn test_generated_created_roundtrips() {
        let s = format_created(now());
        assert_eq!(s.len(), 20);
        NaiveDateTime::parse_from_str(&s, CREATED_FORMAT)
            .expect("generated Created must match the fixed format");
    }
}

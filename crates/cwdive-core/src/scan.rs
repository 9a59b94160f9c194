//! Request-id and timestamp detection in rendered log rows.

use regex::Regex;

/// Lambda request ids: UUID shape, matched case-insensitively.
const REQUEST_ID_PATTERN: &str =
    "(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

/// Log timestamps with an explicit offset or `Z`, `T`- or space-separated.
const TIMESTAMP_PATTERN: &str =
    r"\d{4}-[01]\d-[0-3]\d[T ][0-2]\d:[0-5]\d:[0-5]\d(?:\.\d+)?(?:Z|[+-][0-2]\d:[0-5]\d)";

/// Compiled request-id matcher.
pub fn request_id_pattern() -> Regex {
    Regex::new(REQUEST_ID_PATTERN).expect("request id pattern is valid")
}

/// Compiled timestamp matcher.
pub fn timestamp_pattern() -> Regex {
    Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid")
}

/// All request ids in `text`, in order of appearance.
pub fn find_request_ids(text: &str) -> Vec<&str> {
    request_id_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// First timestamp in `text`, if any.
pub fn first_timestamp(text: &str) -> Option<&str> {
    timestamp_pattern().find(text).map(|m| m.as_str())
}

/// Whole-string request-id check; the gate in front of query generation.
pub fn is_request_id(text: &str) -> bool {
    request_id_pattern()
        .find(text)
        .is_some_and(|m| m.start() == 0 && m.end() == text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_ids_in_order() {
        let row = "END RequestId: 12345678-1234-1234-1234-123456789abc then \
                   DEADBEEF-0000-1111-2222-333344445555 trailing";
        assert_eq!(
            find_request_ids(row),
            vec![
                "12345678-1234-1234-1234-123456789abc",
                "DEADBEEF-0000-1111-2222-333344445555"
            ]
        );
    }

    #[test]
    fn no_ids_in_plain_text() {
        assert!(find_request_ids("INFO nothing to see 12345678-1234").is_empty());
    }

    #[test]
    fn first_timestamp_variants() {
        assert_eq!(
            first_timestamp("2021-11-26T05:03:27.101Z START"),
            Some("2021-11-26T05:03:27.101Z")
        );
        assert_eq!(
            first_timestamp("at 2021-11-26 05:03:27+02:00 something"),
            Some("2021-11-26 05:03:27+02:00")
        );
        assert_eq!(first_timestamp("no timestamp here"), None);
    }

    #[test]
    fn request_id_whole_string_only() {
        assert!(is_request_id("12345678-1234-1234-1234-123456789abc"));
        assert!(is_request_id("ABCDEF01-1234-1234-1234-123456789ABC"));
        assert!(!is_request_id("x12345678-1234-1234-1234-123456789abc"));
        assert!(!is_request_id("12345678-1234-1234-1234-123456789abc "));
        assert!(!is_request_id("not-an-id"));
    }
}

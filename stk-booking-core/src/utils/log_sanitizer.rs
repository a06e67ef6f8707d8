//! Log sanitization utilities
//!
//! Response bodies may echo personal data (names, phone numbers); only a
//! prefix is written to debug/error logs.

/// Maximum number of characters kept in log output.
const TRUNCATE_CHARS: usize = 200;

/// Truncates a string for logging, on a character boundary.
///
/// Strings within the limit are returned unchanged; longer ones keep the first
/// `TRUNCATE_CHARS` characters followed by the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_CHARS) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log(r#"{"message":"OK"}"#), r#"{"message":"OK"}"#);
    }

    #[test]
    fn exactly_at_limit_unchanged() {
        let s = "x".repeat(TRUNCATE_CHARS);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn long_body_truncated_on_char_boundary() {
        let s = "ă".repeat(TRUNCATE_CHARS + 10);
        let out = truncate_for_log(&s);
        assert!(out.starts_with(&"ă".repeat(TRUNCATE_CHARS)));
        assert!(out.ends_with(&format!("total {} bytes]", s.len())));
    }
}

//! Pure field checks shared by the rule interpreter. No I/O, no state.

use regex::Regex;

/// Whether a value counts as missing. Whitespace-only input is missing.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Basic email shape check: local part, `@`, domain with a dot, no
/// whitespace anywhere.
pub(crate) fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::{is_blank, valid_email};

    #[test]
    fn valid_email_accepts_basic_format() {
        assert!(valid_email("a@example.com"));
        assert!(valid_email("name.surname@example.co"));
        assert!(valid_email("user+tag@sub.example.com"));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("missing-at.example.com"));
        assert!(!valid_email("missing-domain@"));
        assert!(!valid_email("no-dot@example"));
        assert!(!valid_email("spaces in@example.com"));
    }

    #[test]
    fn is_blank_ignores_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("x"));
        assert!(!is_blank(" x "));
    }
}

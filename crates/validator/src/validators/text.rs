//! String content validators

use crate::foundation::ValidationError;

// ============================================================================
// NOT BLANK
// ============================================================================

/// Characters stripped before the blank check. Unicode spaces such as
/// U+00A0 are content.
const BLANK_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

crate::validator! {
    /// Validates that a string has content once ASCII blanks, NUL and VT are trimmed.
    pub NotBlank for str;
    rule(input) { !input.trim_matches(BLANK_CHARS).is_empty() }
    error(input) { ValidationError::new("not_blank", "String must not be blank") }
    fn not_blank();
}

// ============================================================================
// FULL MATCH
// ============================================================================

crate::validator! {
    /// Validates that the whole string matches a regular expression.
    ///
    /// The pattern is anchored on both ends, so `\d+` rejects `"12a"`.
    pub FullMatch { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern", "String must match the pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(&format!("^(?:{pattern})$"))?,
        })
    }
    fn full_match(pattern: &str) -> regex::Error;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("text", true)]
    #[case("  padded  ", true)]
    #[case("", false)]
    #[case(" \t\n", false)]
    #[case("\0\x0B\r", false)]
    #[case("\u{00A0}", true)]
    #[case("\u{2003}", true)]
    #[case("0", true)]
    fn test_not_blank(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(not_blank().validate(input).is_ok(), ok);
    }

    #[test]
    fn test_full_match_is_anchored() {
        let v = full_match(r"\d+").unwrap();
        assert!(v.validate("123").is_ok());
        assert!(v.validate("12a").is_err());
        assert!(v.validate("a12").is_err());
    }

    #[test]
    fn test_full_match_alternation_is_grouped() {
        let v = full_match("cat|dog").unwrap();
        assert!(v.validate("dog").is_ok());
        assert!(v.validate("catdog").is_err());
    }

    #[test]
    fn test_full_match_multibyte() {
        let v = full_match(r"\p{Cyrillic}{4}").unwrap();
        assert!(v.validate("тест").is_ok());
    }

    #[test]
    fn test_full_match_invalid_pattern() {
        assert!(full_match("(unclosed").is_err());
    }

    #[test]
    fn test_full_match_error_carries_pattern() {
        let err = full_match("a+").unwrap().validate("b").unwrap_err();
        assert_eq!(err.param("pattern"), Some("^(?:a+)$"));
    }
}

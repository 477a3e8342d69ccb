//! String helpers shared by the renderers and request validation

use once_cell::sync::Lazy;
use regex::Regex;

static JAVA_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// Uppercase the first character and leave the rest untouched.
///
/// A leading non-letter (digit, underscore) comes back unchanged, so
/// `"2fa"` stays `"2fa"` and `"firstName"` becomes `"FirstName"`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Check that `s` can be used as a Java class name
pub fn is_java_identifier(s: &str) -> bool {
    JAVA_IDENTIFIER.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("name"), "Name");
        assert_eq!(capitalize_first("firstName"), "FirstName");
        assert_eq!(capitalize_first("URL"), "URL");
        assert_eq!(capitalize_first("2fa"), "2fa");
        assert_eq!(capitalize_first("_hidden"), "_hidden");
        assert_eq!(capitalize_first("é"), "É");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_is_java_identifier() {
        assert!(is_java_identifier("User"));
        assert!(is_java_identifier("_Internal$1"));
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("1User"));
        assert!(!is_java_identifier("User Account"));
        assert!(!is_java_identifier("../User"));
    }
}

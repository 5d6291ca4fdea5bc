//! File naming helpers for generated output

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters, digits, `_` and `$` first; spaces, dots and dashes allowed after.
static FILE_STEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}_$][\p{L}\p{N}_$ .\-]*$").expect("valid regex"));

/// Whether `name` can be used as a file stem without leaving the output folder
pub fn is_safe_file_stem(name: &str) -> bool {
    FILE_STEM.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_type_names() {
        assert!(is_safe_file_stem("Order"));
        assert!(is_safe_file_stem("order_line"));
        assert!(is_safe_file_stem("Größe"));
        assert!(is_safe_file_stem("$Proxy1"));
        assert!(is_safe_file_stem("Order Line"));
        assert!(is_safe_file_stem("v1.2-draft"));
    }

    #[test]
    fn test_rejects_paths() {
        assert!(!is_safe_file_stem(""));
        assert!(!is_safe_file_stem("."));
        assert!(!is_safe_file_stem(".."));
        assert!(!is_safe_file_stem("../Order"));
        assert!(!is_safe_file_stem("a/b"));
        assert!(!is_safe_file_stem("a\\b"));
        assert!(!is_safe_file_stem(".hidden"));
        assert!(!is_safe_file_stem(" leading"));
    }
}

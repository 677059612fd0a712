//! Input normalizer for form codes.
//!
//! Raw keystroke text is reduced to the code alphabet (`A-Z`, `0-9`),
//! uppercased, and truncated to [`CODE_LENGTH`] characters.

/// Number of characters a complete code has.
pub const CODE_LENGTH: usize = 12;

/// Returns true if `c` belongs to the code alphabet (`A-Z`, `0-9`).
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

/// Normalize raw input into a code.
///
/// Lowercase ASCII letters are uppercased, everything outside `A-Z` / `0-9`
/// is dropped, and the result is truncated to [`CODE_LENGTH`] characters.
/// Never fails; the output always satisfies `^[A-Z0-9]{0,12}$`.
///
/// # Example
/// ```
/// assert_eq!(qr_form::code::normalize("a1!-2b"), "A12B");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| is_code_char(c))
        .take(CODE_LENGTH)
        .collect()
}

/// Returns true if `code` has exactly [`CODE_LENGTH`] characters.
pub fn is_complete(code: &str) -> bool {
    code.chars().count() == CODE_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_uppercases() {
        assert_eq!(normalize("a1!-2b"), "A12B");
    }

    #[test]
    fn test_normalize_truncates_to_code_length() {
        assert_eq!(normalize("ABCDEFGHIJKLMNOP"), "ABCDEFGHIJKL");
        assert_eq!(normalize("abc def ghi jkl mno"), "ABCDEFGHIJKL");
    }

    #[test]
    fn test_normalize_empty_and_garbage() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  -- !! ??"), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        // 'ß' and 'é' have uppercase forms but are not in the code alphabet
        assert_eq!(normalize("éaßb٣1"), "AB1");
    }

    #[test]
    fn test_normalize_keeps_valid_code() {
        assert_eq!(normalize("T2020000PPPP"), "T2020000PPPP");
    }

    #[test]
    fn test_is_code_char() {
        assert!(is_code_char('A'));
        assert!(is_code_char('Z'));
        assert!(is_code_char('0'));
        assert!(is_code_char('9'));
        assert!(!is_code_char('a'));
        assert!(!is_code_char('-'));
        assert!(!is_code_char(' '));
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete("A1B2C3D4E5F6"));
        assert!(!is_complete("A1B2C3D4E5F"));
        assert!(!is_complete(""));
    }
}

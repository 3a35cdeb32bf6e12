//! Character-level classification for Urdu text.

/// Urdu full stop `۔` (U+06D4).
pub const FULL_STOP: char = '\u{06D4}';
/// Arabic comma `،` (U+060C).
pub const COMMA: char = '\u{060C}';
/// Arabic question mark `؟` (U+061F).
pub const QUESTION_MARK: char = '\u{061F}';

/// Marks removed from a token before lookup. Everything else, including
/// other punctuation, passes through untouched.
pub const STRIPPED_PUNCTUATION: [char; 4] = [FULL_STOP, COMMA, QUESTION_MARK, '!'];

pub fn is_stripped_punctuation(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Whitespace as a Unicode-aware regex `\s` sees it: the `White_Space`
/// property plus the information separators U+001C..U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{001C}'..='\u{001F}').contains(&c)
}

/// Remove every stripped punctuation mark, wherever it sits in the token.
pub fn strip_punctuation(token: &str) -> String {
    token.chars().filter(|&c| !is_stripped_punctuation(c)).collect()
}

/// Check the Arabic block (U+0600..U+06FF), which carries every Urdu letter.
pub fn is_arabic_script(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation_anywhere() {
        assert_eq!(strip_punctuation("کیا؟"), "کیا");
        assert_eq!(strip_punctuation("گھر۔"), "گھر");
        assert_eq!(strip_punctuation("آپ،"), "آپ");
        assert_eq!(strip_punctuation("واہ!"), "واہ");
        assert_eq!(strip_punctuation("a!b"), "ab");
    }

    #[test]
    fn test_other_punctuation_kept() {
        assert_eq!(strip_punctuation("کیا?"), "کیا?");
        assert_eq!(strip_punctuation("(ب)"), "(ب)");
        assert_eq!(strip_punctuation("؛"), "؛");
    }

    #[test]
    fn test_only_punctuation_strips_to_empty() {
        assert_eq!(strip_punctuation("؟!۔،"), "");
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(' '));
        assert!(is_space('\t'));
        assert!(is_space('\n'));
        assert!(is_space('\u{00A0}'));
        assert!(is_space('\u{3000}'));
        assert!(is_space('\u{001F}'));
        assert!(!is_space('\u{200B}'));
        assert!(!is_space('ا'));
    }

    #[test]
    fn test_is_arabic_script() {
        assert!(is_arabic_script('ا'));
        assert!(is_arabic_script('ے'));
        assert!(is_arabic_script(FULL_STOP));
        assert!(!is_arabic_script('a'));
    }
}

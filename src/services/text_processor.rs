// Text Processing Helpers
// Character-safe string surgery shared by the detection and paraphrase engines

/// True when the token is non-empty and every char is alphanumeric.
pub fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

/// Join tokens with single spaces, punctuation included.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `char_idx`, or `text.len()` past the end.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

/// Split at a char position without ever cutting a code point.
pub fn split_at_char(text: &str, char_idx: usize) -> (&str, &str) {
    text.split_at(byte_offset(text, char_idx))
}

pub fn insert_at_char(text: &str, char_idx: usize, insert: &str) -> String {
    let (head, tail) = split_at_char(text, char_idx);
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(head);
    out.push_str(insert);
    out.push_str(tail);
    out
}

pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphanumeric_token() {
        assert!(is_alphanumeric_token("happy"));
        assert!(is_alphanumeric_token("42"));
        assert!(is_alphanumeric_token("café"));
        assert!(!is_alphanumeric_token("."));
        assert!(!is_alphanumeric_token("n't"));
        assert!(!is_alphanumeric_token("well-known"));
        assert!(!is_alphanumeric_token(""));
    }

    #[test]
    fn test_join_tokens_keeps_space_before_punctuation() {
        assert_eq!(join_tokens(&["He", "is", "happy", "."]), "He is happy .");
        assert_eq!(join_tokens::<&str>(&[]), "");
    }

    #[test]
    fn test_insert_at_char_is_utf8_safe() {
        let text = "naïve café";
        assert_eq!(insert_at_char(text, 3, "X"), "naïXve café");
        assert_eq!(insert_at_char(text, 100, "!"), "naïve café!");
        assert_eq!(split_at_char("中文字", 1), ("中", "文字"));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("a\nb", 10), "a b");
    }
}

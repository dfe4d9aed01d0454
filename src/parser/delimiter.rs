//! Quote-aware matching of nested delimiters.
//!
//! Literal text in bracket notation may contain delimiter characters. Inside
//! double quotes they are inert, so `{#text:"a{b"}` is a single balanced span
//! even though its content holds an unmatched `{`.

/// Returns the closing delimiter for a supported opening delimiter.
pub fn closing_delimiter(open: u8) -> Option<u8> {
    match open {
        b'{' => Some(b'}'),
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

/// Finds the delimiter closing the one at byte position `pos`.
///
/// Supported pairs are `{}`, `()`, `[]` and `<>`. Only the delimiter kind found
/// at `pos` is counted; other kinds are ignored. A double quote not directly
/// preceded by a backslash toggles literal mode, in which delimiters are
/// ignored as well.
///
/// # Arguments
/// * `s` - The string to scan
/// * `pos` - Byte position of the opening delimiter
///
/// # Returns
/// * `Some(index)` - Byte position of the matching closing delimiter
/// * `None` - If `pos` is out of range, does not hold a supported opening
///   delimiter, or the string ends before the delimiter is closed
///
/// # Examples
/// ```
/// # use bracktree::parser::delimiter::matching_bracket;
/// assert_eq!(matching_bracket("{A{B}}", 0), Some(5));
/// assert_eq!(matching_bracket("{A{B}}", 2), Some(4));
/// assert_eq!(matching_bracket("{#text:\"a{b\"}", 0), Some(12));
/// assert_eq!(matching_bracket("{A{B}", 0), None);
/// assert_eq!(matching_bracket("A{B}", 0), None);
/// assert_eq!(matching_bracket("{A}", 7), None);
/// ```
pub fn matching_bracket(s: &str, pos: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let open = *bytes.get(pos)?;
    let close = closing_delimiter(open)?;

    let mut in_quotes = false;
    let mut count = 1usize;
    for (i, &b) in bytes.iter().enumerate().skip(pos + 1) {
        if b == b'"' && bytes[i - 1] != b'\\' {
            in_quotes = !in_quotes;
        } else if !in_quotes && b == open {
            count += 1;
        } else if !in_quotes && b == close {
            count -= 1;
            if count == 0 {
                return Some(i);
            }
        }
    }

    None
}

// =#========================================================================#=
// TESTS
// =#========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_delimiter_kinds() {
        assert_eq!(matching_bracket("(a(b)c)", 0), Some(6));
        assert_eq!(matching_bracket("[a[b]c]", 0), Some(6));
        assert_eq!(matching_bracket("<a<b>c>", 0), Some(6));
        assert_eq!(matching_bracket("{a{b}c}", 0), Some(6));
    }

    #[test]
    fn test_other_kinds_are_not_counted() {
        // Only braces count when matching a brace
        assert_eq!(matching_bracket("{a(b}", 0), Some(4));
        assert_eq!(matching_bracket("(a{b)", 0), Some(4));
    }

    #[test]
    fn test_unsupported_opener() {
        assert_eq!(matching_bracket("}", 0), None);
        assert_eq!(matching_bracket("abc", 1), None);
        assert_eq!(matching_bracket("", 0), None);
    }

    #[test]
    fn test_quoted_delimiters_are_inert() {
        let s = r#"{A{#text:"a{b"}{C}}"#;
        assert_eq!(matching_bracket(s, 0), Some(s.len() - 1));
        assert_eq!(matching_bracket(s, 2), Some(14));

        let closing_in_quotes = r#"{#text:"}}"}"#;
        assert_eq!(matching_bracket(closing_in_quotes, 0), Some(closing_in_quotes.len() - 1));
    }

    #[test]
    fn test_escaped_quote_does_not_toggle() {
        // The escaped quote keeps the literal open, so the inner '{' stays inert
        let s = r#"{#text:"say \"{\" now"}"#;
        assert_eq!(matching_bracket(s, 0), Some(s.len() - 1));

        // An escaped quote outside a literal does not start one
        let s = r#"{a\"{b}}"#;
        assert_eq!(matching_bracket(s, 0), Some(7));
    }

    #[test]
    fn test_unterminated_quote_hides_closer() {
        assert_eq!(matching_bracket(r#"{#text:"abc}"#, 0), None);
    }

    #[test]
    fn test_multibyte_content() {
        let s = "{A{#text:grüße}}";
        assert_eq!(matching_bracket(s, 0), Some(s.len() - 1));
    }
}

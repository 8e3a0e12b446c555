//! Bracket auto-closing rule for the editing surface.
//!
//! On a keystroke of `(`, `{` or `[` the default insertion is intercepted:
//! the matching pair is inserted around the current selection (or at the
//! caret when the selection is empty) and the caret lands immediately
//! after the opening character. All positions are character indices.

/// Returns the matching close for an auto-closable open bracket.
#[must_use]
pub const fn closing_pair(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Result of applying the auto-close rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoClosed {
    /// The text after pair insertion.
    pub text: String,
    /// New caret position: one past the opening character, i.e. the
    /// original selection start + 1 regardless of what was wrapped.
    pub caret: usize,
}

/// Applies the auto-close rule for `key` to `text` with the selection
/// `[start, end)` (equal indices mean an empty selection at the caret).
///
/// Returns `None` for keys other than `(`, `{`, `[`; those pass through
/// to default text input handling. Out-of-range indices are clamped to
/// the text length.
#[must_use]
pub fn apply(text: &str, start: usize, end: usize, key: char) -> Option<AutoClosed> {
    let close = closing_pair(key)?;

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    let mut out = String::with_capacity(text.len() + 2);
    out.extend(&chars[..start]);
    out.push(key);
    out.extend(&chars[start..end]);
    out.push(close);
    out.extend(&chars[end..]);

    Some(AutoClosed {
        text: out,
        caret: start + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_pairs() {
        assert_eq!(closing_pair('('), Some(')'));
        assert_eq!(closing_pair('{'), Some('}'));
        assert_eq!(closing_pair('['), Some(']'));
        assert_eq!(closing_pair('a'), None);
        assert_eq!(closing_pair(')'), None);
    }

    #[test]
    fn test_empty_selection_inserts_pair_at_caret() {
        let result = apply("abcd", 2, 2, '{').unwrap();
        assert_eq!(result.text, "ab{}cd");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_caret_at_start_and_end() {
        let result = apply("xy", 0, 0, '(').unwrap();
        assert_eq!(result.text, "()xy");
        assert_eq!(result.caret, 1);

        let result = apply("xy", 2, 2, '[').unwrap();
        assert_eq!(result.text, "xy[]");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_selection_is_wrapped() {
        // [s, e) is wrapped: open at s, close at e, caret at s + 1
        let result = apply("x+y=z", 2, 3, '(').unwrap();
        assert_eq!(result.text, "x+(y)=z");
        assert_eq!(result.caret, 3);
    }

    #[test]
    fn test_full_text_selection_is_wrapped() {
        let result = apply("a+b", 0, 3, '{').unwrap();
        assert_eq!(result.text, "{a+b}");
        assert_eq!(result.caret, 1);
    }

    #[test]
    fn test_empty_text() {
        let result = apply("", 0, 0, '(').unwrap();
        assert_eq!(result.text, "()");
        assert_eq!(result.caret, 1);
    }

    #[test]
    fn test_non_bracket_keys_pass_through() {
        assert_eq!(apply("abc", 1, 1, 'x'), None);
        assert_eq!(apply("abc", 1, 2, '\\'), None);
        assert_eq!(apply("abc", 0, 3, '}'), None);
    }

    #[test]
    fn test_multibyte_text_uses_char_indices() {
        // "αβ" is 4 bytes but 2 chars; indices are chars
        let result = apply("αβ", 1, 1, '(').unwrap();
        assert_eq!(result.text, "α()β");
        assert_eq!(result.caret, 2);

        let result = apply("αβγ", 1, 2, '[').unwrap();
        assert_eq!(result.text, "α[β]γ");
        assert_eq!(result.caret, 2);
    }

    #[test]
    fn test_out_of_range_indices_are_clamped() {
        let result = apply("ab", 10, 20, '(').unwrap();
        assert_eq!(result.text, "ab()");
        assert_eq!(result.caret, 3);
    }
}

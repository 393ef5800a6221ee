//! Fixed-width justification.

use crate::types::Justification;

/// Place `text` in a field of exactly `width` characters.
///
/// Text longer than the field is truncated to `width` characters first.
/// Centred text splits the padding evenly, with any odd space on the
/// trailing side.
pub fn justify(text: &str, width: usize, justification: Justification) -> String {
    let text = truncate(text, width);
    let pad = width - text.chars().count();
    let (leading, trailing) = match justification {
        Justification::Left => (0, pad),
        Justification::Centre => (pad / 2, pad - pad / 2),
        Justification::Right => (pad, 0),
    };

    let mut out = String::with_capacity(text.len() + pad);
    out.extend(std::iter::repeat(' ').take(leading));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(trailing));
    out
}

/// Longest prefix of `text` holding at most `width` characters.
fn truncate(text: &str, width: usize) -> &str {
    text.char_indices().nth(width).map_or(text, |(end, _)| &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [Justification; 3] =
        [Justification::Left, Justification::Centre, Justification::Right];

    #[test]
    fn test_output_is_exact_width() {
        for text in ["", "a", "hello", "hello world", "ünïcödé"] {
            for width in 0..16 {
                for mode in MODES {
                    assert_eq!(justify(text, width, mode).chars().count(), width);
                }
            }
        }
    }

    #[test]
    fn test_left_and_right_keep_text_at_edges() {
        assert_eq!(justify("abc", 6, Justification::Left), "abc   ");
        assert_eq!(justify("abc", 6, Justification::Right), "   abc");
        assert!(justify("abc", 3, Justification::Left).starts_with("abc"));
        assert!(justify("abc", 3, Justification::Right).ends_with("abc"));
    }

    #[test]
    fn test_centre_puts_odd_space_trailing() {
        assert_eq!(justify("ab", 6, Justification::Centre), "  ab  ");
        assert_eq!(justify("ab", 5, Justification::Centre), " ab  ");
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(justify("hello world", 5, Justification::Right), "hello");
        assert_eq!(justify("hello", 0, Justification::Centre), "");
    }
}

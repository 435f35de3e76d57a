//! Text measurement and wrapping utilities.
//!
//! Dialogs lay out against terminal cells, not bytes: a CJK character
//! occupies two columns and a combining sequence occupies one. All
//! width math in this crate goes through [`display_width`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cell width of a string.
#[inline]
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Word-wrap `text` into lines no wider than `width` cells.
///
/// Breaks preferentially at spaces; a single word wider than the line
/// is hard-broken at a grapheme boundary. Existing newlines are
/// respected. `width == 0` yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw_line.split(' ') {
            let word_width = display_width(word);
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
            } else if word_width <= width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                // Oversized word: hard-break at grapheme boundaries.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                for g in word.graphemes(true) {
                    let gw = display_width(g);
                    if current_width + gw > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push_str(g);
                    current_width += gw;
                }
            }
        }
        lines.push(current);
    }
    lines
}

/// Truncate `s` to at most `width` cells, appending `…` when
/// `ellipsis` is set and truncation occurred.
pub fn truncate(s: &str, width: usize, ellipsis: bool) -> String {
    if display_width(s) <= width {
        return s.to_owned();
    }
    let budget = if ellipsis { width.saturating_sub(1) } else { width };
    let mut out = String::new();
    let mut used = 0usize;
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if used + gw > budget {
            break;
        }
        out.push_str(g);
        used += gw;
    }
    if ellipsis && width > 0 {
        out.push('…');
    }
    out
}

/// Natural (unwrapped) width of a text block: the widest line.
pub fn natural_width(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_basic() {
        let lines = wrap("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_preserves_newlines() {
        let lines = wrap("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        // Each CJK char is 2 cells wide.
        let lines = wrap("日本語", 4);
        assert_eq!(lines, vec!["日本", "語"]);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate("hello world", 6, true), "hello…");
        assert_eq!(truncate("hi", 6, true), "hi");
    }

    #[test]
    fn test_truncate_without_ellipsis() {
        assert_eq!(truncate("hello", 3, false), "hel");
    }

    #[test]
    fn test_natural_width() {
        assert_eq!(natural_width("ab\nabcd\nc"), 4);
    }
}

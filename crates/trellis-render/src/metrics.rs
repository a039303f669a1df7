#![forbid(unsafe_code)]

//! Text measurement, wrapping, and clipping in display cells.
//!
//! The fit resolver never inspects strings itself; it delegates to a
//! [`TextMetrics`] implementation. [`CellMetrics`] is the stock one:
//! display-width aware (CJK characters are 2 cells wide) and grapheme-safe
//! (never splits emoji or combining sequences).

use trellis_core::geometry::Size;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measurement and reshaping of text in cell space.
pub trait TextMetrics {
    /// Measure `text`: width is the widest line in display columns, height
    /// is the line count. The empty string measures 0x0.
    fn measure(&self, text: &str) -> Size;

    /// Wrap `text` to at most `width` columns per line, preserving existing
    /// line breaks. A non-positive width yields the empty string.
    fn wrap(&self, text: &str, width: i32) -> String;

    /// Clip `text` to at most `width` columns and `height` lines. A
    /// non-positive box yields the empty string.
    fn clip(&self, text: &str, width: i32, height: i32) -> String;
}

/// Stock metrics over plain (unstyled) text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn measure(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::new(0, 0);
        }
        let mut width = 0;
        let mut height = 0;
        for line in text.split('\n') {
            width = width.max(line.width() as i32);
            height += 1;
        }
        Size::new(width, height)
    }

    fn wrap(&self, text: &str, width: i32) -> String {
        if width <= 0 {
            return String::new();
        }
        let width = width as usize;
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            wrap_paragraph(paragraph, width, &mut lines);
        }
        lines.join("\n")
    }

    fn clip(&self, text: &str, width: i32, height: i32) -> String {
        if width <= 0 || height <= 0 {
            return String::new();
        }
        text.split('\n')
            .take(height as usize)
            .map(|line| truncate_columns(line, width as usize))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy word wrap of one paragraph, hard-breaking words wider than the box.
fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_word_bounds() {
        let word_width = word.width();
        if current_width + word_width <= width {
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            push_trimmed(lines, &mut current);
            current_width = 0;
        }

        let word = word.trim_start();
        let word_width = word.width();
        if word_width > width {
            for grapheme in word.graphemes(true) {
                let grapheme_width = grapheme.width();
                if current_width + grapheme_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += grapheme_width;
            }
        } else {
            current.push_str(word);
            current_width = word_width;
        }
    }

    push_trimmed(lines, &mut current);
}

fn push_trimmed(lines: &mut Vec<String>, current: &mut String) {
    let line = std::mem::take(current);
    lines.push(line.trim_end().to_string());
}

/// Keep the leading graphemes of `line` that fit in `width` columns.
pub(crate) fn truncate_columns(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in line.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > width {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_reports_widest_line_and_line_count() {
        let metrics = CellMetrics;
        assert_eq!(metrics.measure(""), Size::new(0, 0));
        assert_eq!(metrics.measure("abc"), Size::new(3, 1));
        assert_eq!(metrics.measure("ab\nabcd\nx"), Size::new(4, 3));
    }

    #[test]
    fn measure_counts_display_columns() {
        // CJK is two cells per character.
        assert_eq!(CellMetrics.measure("\u{65E5}\u{672C}"), Size::new(4, 1));
    }

    #[test]
    fn wrap_breaks_at_word_boundaries() {
        let wrapped = CellMetrics.wrap("the quick brown fox", 10);
        assert_eq!(wrapped, "the quick\nbrown fox");
    }

    #[test]
    fn wrap_preserves_existing_breaks() {
        let wrapped = CellMetrics.wrap("one\ntwo three four", 9);
        assert_eq!(wrapped, "one\ntwo three\nfour");
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        let wrapped = CellMetrics.wrap("abcdefgh", 3);
        assert_eq!(wrapped, "abc\ndef\ngh");
    }

    #[test]
    fn wrap_zero_width_is_empty() {
        assert_eq!(CellMetrics.wrap("anything", 0), "");
    }

    #[test]
    fn clip_truncates_both_axes() {
        let clipped = CellMetrics.clip("abcdef\nghijkl\nmnopqr", 4, 2);
        assert_eq!(clipped, "abcd\nghij");
    }

    #[test]
    fn clip_respects_wide_graphemes() {
        // Truncating "x日本" at 4 columns keeps "x日" (1 + 2 = 3 columns);
        // the next character would need 2 more.
        let clipped = CellMetrics.clip("x\u{65E5}\u{672C}", 4, 1);
        assert_eq!(clipped, "x\u{65E5}");
    }

    #[test]
    fn clip_empty_box_is_empty() {
        assert_eq!(CellMetrics.clip("abc", 0, 5), "");
        assert_eq!(CellMetrics.clip("abc", 5, 0), "");
    }
}

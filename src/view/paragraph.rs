//! Word-wrapped paragraph rendering and measurement.

use crate::window::{Height, ItemPlacement, ItemRenderer, RenderedItem};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` terminal columns.
///
/// Whitespace runs collapse to a single space. Words wider than a line are
/// split at character boundaries. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width > 0 && line_width + ch_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
            continue;
        }

        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Renders each item's paragraph as wrapped lines, one terminal row per line.
///
/// In measuring mode the line count is reported as the item's height, which
/// is how the dynamic list learns real heights. Otherwise lines are cut to the
/// placement's height and nothing is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphRenderer {
    width: usize,
    measure: bool,
}

impl ParagraphRenderer {
    /// Renderer that reports wrapped heights.
    pub fn measuring(width: usize) -> Self {
        Self {
            width,
            measure: true,
        }
    }

    /// Renderer that fits text into whatever height it is given.
    pub fn clipping(width: usize) -> Self {
        Self {
            width,
            measure: false,
        }
    }

    /// Current wrap width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Change the wrap width. Returns `true` if it differs from the old one.
    pub fn set_width(&mut self, width: usize) -> bool {
        let changed = self.width != width;
        self.width = width;
        changed
    }
}

impl ItemRenderer<[String]> for ParagraphRenderer {
    type Content = Vec<String>;

    fn render(&mut self, placement: &ItemPlacement, data: &[String]) -> RenderedItem<Vec<String>> {
        let text = data.get(placement.index.get()).map_or("", String::as_str);
        let mut lines = wrap(text, self.width);

        let measured = if self.measure {
            Height::new(lines.len() as f64).ok()
        } else {
            let rows = placement.height.ceil().max(1.0) as usize;
            lines.truncate(rows);
            None
        };

        RenderedItem {
            content: lines,
            measured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::ItemIndex;

    mod wrap {
        use super::*;

        #[test]
        fn fills_lines_greedily() {
            assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        }

        #[test]
        fn empty_text_is_one_empty_line() {
            assert_eq!(wrap("", 10), vec![""]);
            assert_eq!(wrap("   ", 10), vec![""]);
        }

        #[test]
        fn long_word_is_split() {
            assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
        }

        #[test]
        fn long_word_starts_on_fresh_line() {
            assert_eq!(wrap("x abcdef y", 3), vec!["x", "abc", "def", "y"]);
        }

        #[test]
        fn wide_characters_count_double() {
            assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
        }

        #[test]
        fn zero_width_is_treated_as_one_column() {
            assert_eq!(wrap("ab", 0), vec!["a", "b"]);
        }
    }

    mod renderer {
        use super::*;

        fn placement(index: usize, height: f64) -> ItemPlacement {
            ItemPlacement {
                index: ItemIndex::new(index),
                top: 0.0,
                height,
            }
        }

        fn data() -> Vec<String> {
            vec!["one two three four".to_string(), "short".to_string()]
        }

        #[test]
        fn measuring_reports_line_count() {
            let mut renderer = ParagraphRenderer::measuring(9);
            let rendered = renderer.render(&placement(0, 1.0), &data());

            assert_eq!(rendered.content, vec!["one two", "three", "four"]);
            assert_eq!(rendered.measured, Some(Height::new(3.0).unwrap()));
        }

        #[test]
        fn clipping_cuts_to_placement_height() {
            let mut renderer = ParagraphRenderer::clipping(9);
            let rendered = renderer.render(&placement(0, 2.0), &data());

            assert_eq!(rendered.content, vec!["one two", "three"]);
            assert_eq!(rendered.measured, None);
        }

        #[test]
        fn missing_data_renders_blank_row() {
            let mut renderer = ParagraphRenderer::measuring(9);
            let rendered = renderer.render(&placement(5, 1.0), &data());

            assert_eq!(rendered.content, vec![""]);
            assert_eq!(rendered.measured, Some(Height::new(1.0).unwrap()));
        }

        #[test]
        fn set_width_reports_change() {
            let mut renderer = ParagraphRenderer::measuring(10);
            assert!(!renderer.set_width(10));
            assert!(renderer.set_width(12));
            assert_eq!(renderer.width(), 12);
        }
    }
}

//! Widget that paints a settled frame of the virtual list.

use crate::window::Frame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

/// Paints the realized items of a [`Frame`] at their offsets relative to the
/// scroll position, clipped to the area, with a scrollbar in the last column.
///
/// Only the rows inside the area are written; the spacers the layout reports
/// are implicit in each item's `top`.
#[derive(Debug, Clone, Copy)]
pub struct VirtualListView<'a> {
    frame: &'a Frame<Vec<String>>,
    scroll_offset: f64,
    content_height: f64,
}

impl<'a> VirtualListView<'a> {
    /// Create a view of `frame` as seen from `scroll_offset`.
    pub fn new(frame: &'a Frame<Vec<String>>, scroll_offset: f64, content_height: f64) -> Self {
        Self {
            frame,
            scroll_offset,
            content_height,
        }
    }

    fn item_style(index: usize) -> Style {
        if index % 2 == 0 {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Widget for VirtualListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text_width = area.width.saturating_sub(1) as usize;
        let rows = i64::from(area.height);

        for (placement, lines) in self.frame.layout.items.iter().zip(&self.frame.items) {
            let first_row = (placement.top - self.scroll_offset).floor() as i64;
            let item_rows = placement.height.ceil() as usize;
            let style = Self::item_style(placement.index.get());

            for (line_index, line) in lines.iter().take(item_rows).enumerate() {
                let row = first_row + line_index as i64;
                if !(0..rows).contains(&row) {
                    continue;
                }
                buf.set_stringn(area.x, area.y + row as u16, line, text_width, style);
            }
        }

        let viewport = area.height as usize;
        let mut state = ScrollbarState::new(
            (self.content_height.ceil() as usize).saturating_sub(viewport),
        )
        .position(self.scroll_offset.max(0.0).round() as usize)
        .viewport_content_length(viewport);
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .render(area, buf, &mut state);
    }
}

//! Range resolution: which items must be realized for a scroll offset.
//!
//! Both resolvers find the strictly visible run of items ("unpadded"), then
//! widen it by the overscan on each side, clamped to the list bounds.

use super::offset_table::OffsetTable;
use super::types::{Height, ItemIndex, Overscan};
use super::visible_range::VisibleRange;

/// Result of resolving a scroll offset against the list geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Window {
    /// Items to realize, including overscan.
    pub range: VisibleRange,
    /// Items intersecting the viewport before overscan was applied.
    pub unpadded: VisibleRange,
    /// Distance from the content top to the first realized item.
    pub leading_space: f64,
}

impl Window {
    /// Window of an empty list.
    pub const EMPTY: Self = Self {
        range: VisibleRange::EMPTY,
        unpadded: VisibleRange::EMPTY,
        leading_space: 0.0,
    };

    fn padded(raw_start: usize, raw_end: usize, last: usize, overscan: Overscan) -> (usize, usize) {
        let start = raw_start.saturating_sub(overscan.get());
        let end = raw_end.saturating_add(overscan.get()).min(last);
        (start, end)
    }
}

/// Resolve the window for a list where every item is `item_height` tall.
///
/// O(1). An offset past the end of the content pins the unpadded start to the
/// last item instead of producing an empty window. With zero overscan the
/// window can end one item above the viewport bottom when the offset lands
/// inside an item; [`FixedSizeList`](super::FixedSizeList) keeps at least one.
///
/// # Examples
///
/// ```
/// # use vlist::window::resolve::resolve_fixed;
/// # use vlist::window::types::{Height, ItemIndex, Overscan};
/// let window = resolve_fixed(250.0, 500.0, Height::new(100.0).unwrap(), 1000, Overscan::DEFAULT);
/// assert_eq!(window.unpadded.first(), Some(ItemIndex::new(2)));
/// assert_eq!(window.unpadded.last(), Some(ItemIndex::new(7)));
/// assert_eq!(window.range.first(), Some(ItemIndex::new(0)));
/// assert_eq!(window.range.last(), Some(ItemIndex::new(9)));
/// ```
pub fn resolve_fixed(
    scroll_offset: f64,
    container_height: f64,
    item_height: Height,
    item_count: usize,
    overscan: Overscan,
) -> Window {
    if item_count == 0 {
        return Window::EMPTY;
    }
    let last = item_count - 1;
    let height = item_height.get();

    let raw_start = ((scroll_offset.max(0.0) / height).floor() as usize).min(last);
    let per_page = (container_height.max(0.0) / height).floor() as usize;
    let raw_end = raw_start.saturating_add(per_page).min(last);

    let (start, end) = Window::padded(raw_start, raw_end, last, overscan);
    Window {
        range: VisibleRange::inclusive(ItemIndex::new(start), ItemIndex::new(end)),
        unpadded: VisibleRange::inclusive(ItemIndex::new(raw_start), ItemIndex::new(raw_end)),
        leading_space: height * start as f64,
    }
}

/// Resolve the window for a list with per-item heights.
///
/// The unpadded start is the first item whose bottom edge is strictly below
/// `scroll_offset`; the unpadded end is the first item whose bottom edge is
/// strictly below `scroll_offset + container_height`, or the last item when
/// the remaining content is shorter than the viewport. O(log n).
pub fn resolve_variable(
    scroll_offset: f64,
    container_height: f64,
    table: &OffsetTable,
    overscan: Overscan,
) -> Window {
    if table.is_empty() {
        return Window::EMPTY;
    }
    let last = table.len() - 1;

    let raw_start = table
        .first_greater_than(scroll_offset)
        .map_or(last, |i| i.get());
    let raw_end = table
        .first_greater_than(scroll_offset + container_height.max(0.0))
        .map_or(last, |i| i.get())
        .max(raw_start);

    let (start, end) = Window::padded(raw_start, raw_end, last, overscan);
    Window {
        range: VisibleRange::inclusive(ItemIndex::new(start), ItemIndex::new(end)),
        unpadded: VisibleRange::inclusive(ItemIndex::new(raw_start), ItemIndex::new(raw_end)),
        leading_space: table.top(ItemIndex::new(start)),
    }
}

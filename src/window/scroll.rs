//! Semantic scroll position

use super::types::ItemIndex;

/// Where the host wants the viewport to be.
///
/// This belongs to the host's scroll mechanics, not to the windowing engine:
/// the engine accepts any offset it is given, while a `ScrollPosition` always
/// resolves into the valid range `[0, max(0, content_height - container_height)]`.
///
/// - `Top`: offset 0
/// - `Bottom`: last full page
/// - `AtOffset`: absolute offset
/// - `AtItem`: top of an item, plus an offset into it
/// - `Fraction`: proportional position (for scrollbar dragging)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScrollPosition {
    /// View from the very top.
    #[default]
    Top,

    /// View the last page.
    Bottom,

    /// Specific offset from the content top.
    AtOffset(f64),

    /// Keep an item's top at the top of the viewport.
    /// Resolves through the item's current top, so it survives corrections
    /// to heights above it.
    AtItem {
        /// Item to show.
        index: ItemIndex,
        /// Extra distance into the item.
        offset_in_item: f64,
    },

    /// Fractional position (0.0 = top, 1.0 = bottom), clamped to `[0, 1]`.
    Fraction(f64),
}

impl ScrollPosition {
    /// Resolve to an absolute offset.
    ///
    /// # Arguments
    /// - `content_height`: total scrollable height
    /// - `container_height`: viewport height
    /// - `item_top`: top edge of an item, `None` if the index is out of range
    ///
    /// An `AtItem` whose index is out of range resolves to 0.
    pub fn resolve<F>(&self, content_height: f64, container_height: f64, item_top: F) -> f64
    where
        F: Fn(ItemIndex) -> Option<f64>,
    {
        let max_offset = (content_height - container_height).max(0.0);
        let offset = match *self {
            Self::Top => 0.0,
            Self::Bottom => max_offset,
            Self::AtOffset(offset) => offset,
            Self::AtItem { index, offset_in_item } => {
                item_top(index).map_or(0.0, |top| top + offset_in_item)
            }
            Self::Fraction(fraction) => {
                let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
                fraction * max_offset
            }
        };
        offset.clamp(0.0, max_offset)
    }

    /// Create an AtItem position at the item's top edge.
    pub fn at_item(index: ItemIndex) -> Self {
        Self::AtItem {
            index,
            offset_in_item: 0.0,
        }
    }

    /// Move an absolute position by `delta`; relative positions are resolved
    /// first.
    pub fn scrolled_by<F>(&self, delta: f64, content_height: f64, container_height: f64, item_top: F) -> Self
    where
        F: Fn(ItemIndex) -> Option<f64>,
    {
        let current = self.resolve(content_height, container_height, item_top);
        Self::AtOffset(current + delta)
    }
}

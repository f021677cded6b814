//! Layout emission: resolved window → per-item position and size.

use super::offset_table::OffsetTable;
use super::resolve::Window;
use super::types::{Height, ItemIndex};

/// How the host should place realized items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Items follow each other in normal flow after one leading spacer.
    Flow,
    /// Each item sits at its own absolute `top`; siblings never push each other.
    Absolute,
}

/// Position and size of one realized item, relative to the content top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    /// Index of the item.
    pub index: ItemIndex,
    /// Distance from the content top to the item's top edge.
    pub top: f64,
    /// Item height.
    pub height: f64,
}

impl ItemPlacement {
    /// Bottom edge of the item.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Everything the host needs to paint one frame of the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Placement strategy for `items`.
    pub positioning: Positioning,
    /// Total scrollable height, for sizing the scroll track.
    pub content_height: f64,
    /// Size of the spacer before the first item (flow positioning).
    pub leading_spacer: f64,
    /// Realized items in index order.
    pub items: Vec<ItemPlacement>,
}

impl Layout {
    /// Layout of a list with no items.
    pub fn empty(positioning: Positioning) -> Self {
        Self {
            positioning,
            content_height: 0.0,
            leading_spacer: 0.0,
            items: Vec::new(),
        }
    }
}

/// Emit the flow layout of a fixed-height list.
pub fn emit_fixed(window: &Window, item_height: Height, item_count: usize) -> Layout {
    let height = item_height.get();
    Layout {
        positioning: Positioning::Flow,
        content_height: height * item_count as f64,
        leading_spacer: window.leading_space,
        items: window
            .range
            .indices()
            .map(|index| ItemPlacement {
                index,
                top: height * index.get() as f64,
                height,
            })
            .collect(),
    }
}

/// Emit the absolute layout of a variable-height list.
///
/// Every position comes from the offset table, so an item's placement never
/// depends on the order its siblings were rendered or measured in.
pub fn emit_variable(window: &Window, table: &OffsetTable) -> Layout {
    Layout {
        positioning: Positioning::Absolute,
        content_height: table.content_height(),
        leading_spacer: window.leading_space,
        items: window
            .range
            .indices()
            .map(|index| ItemPlacement {
                index,
                top: table.top(index),
                height: table.height(index),
            })
            .collect(),
    }
}

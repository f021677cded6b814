//! Rendering collaborator contract and the measure-then-settle frame pass.

use super::controller::VirtualList;
use super::layout::{ItemPlacement, Layout};
use super::types::Height;
use tracing::debug;

/// Upper bound on re-layout passes within one frame.
///
/// Each pass can only shrink the set of unmeasured items in view, so this is
/// reached only if a renderer keeps reporting different heights for the same
/// content.
pub const MAX_SETTLE_PASSES: usize = 8;

/// Content produced for one item, plus its measured height if known.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<C> {
    /// Rendered content.
    pub content: C,
    /// Height the content actually occupies, `None` if not measurable.
    pub measured: Option<Height>,
}

/// Produces the visual content for a row.
///
/// `data` is the caller's item data, passed through untouched.
pub trait ItemRenderer<D: ?Sized> {
    /// Rendered representation of one item.
    type Content;

    /// Render the item at `placement`.
    fn render(&mut self, placement: &ItemPlacement, data: &D) -> RenderedItem<Self::Content>;
}

/// One settled frame: the layout and the content for each placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<C> {
    /// Layout the content was rendered against.
    pub layout: Layout,
    /// Rendered content, parallel to `layout.items`.
    pub items: Vec<C>,
    /// Layout passes it took to settle (1 when nothing was corrected).
    pub passes: usize,
}

/// Render the list's current window and feed measured heights back.
///
/// If any measurement changes the geometry the window is re-resolved and
/// rendered again before returning, so the frame handed to the host never
/// mixes stale positions with fresh content.
pub fn render_frame<L, R, D>(list: &mut L, renderer: &mut R, data: &D) -> Frame<R::Content>
where
    L: VirtualList + ?Sized,
    R: ItemRenderer<D>,
    D: ?Sized,
{
    let mut passes = 0;
    loop {
        passes += 1;
        let layout = list.layout();
        let mut items = Vec::with_capacity(layout.items.len());
        let mut corrected = false;

        for placement in &layout.items {
            let rendered = renderer.render(placement, data);
            if let Some(height) = rendered.measured {
                corrected |= list.on_height_measured(placement.index, height);
            }
            items.push(rendered.content);
        }

        if !corrected {
            return Frame { layout, items, passes };
        }
        if passes >= MAX_SETTLE_PASSES {
            debug!(passes, "frame did not settle; painting without further measurement");
            let layout = list.layout();
            let items = layout
                .items
                .iter()
                .map(|placement| renderer.render(placement, data).content)
                .collect();
            return Frame { layout, items, passes };
        }
    }
}

//! Scroll / height update controllers.
//!
//! A controller owns the list geometry, the current scroll offset and the last
//! resolved [`Window`]. Its two inputs are scroll changes and height
//! corrections; both recompute the window synchronously inside the call, so
//! whatever the host paints next already reflects them.

use super::layout::{Layout, emit_fixed, emit_variable};
use super::offset_table::OffsetTable;
use super::resolve::{Window, resolve_fixed, resolve_variable};
use super::size_oracle::{MeasuredSizes, SizeOracle};
use super::types::{Height, ItemIndex, ListConfig, Overscan};
use tracing::{debug, trace, warn};

/// Operations shared by the fixed and variable-size lists.
pub trait VirtualList {
    /// Geometry the list was built with (container height may change).
    fn config(&self) -> &ListConfig;

    /// Offset last passed to [`on_scroll`](Self::on_scroll).
    fn scroll_offset(&self) -> f64;

    /// Store a new scroll offset and recompute the window before returning.
    ///
    /// The offset is not clamped. Returns `true` if the window changed.
    fn on_scroll(&mut self, offset: f64) -> bool;

    /// Viewport was resized. Returns `true` if the window changed.
    fn set_container_height(&mut self, height: f64) -> bool;

    /// Report the measured height of a rendered item.
    ///
    /// Returns `true` only if the measurement changed the geometry.
    fn on_height_measured(&mut self, index: ItemIndex, height: Height) -> bool;

    /// Recompute all cached geometry from the current height source.
    fn reset_heights(&mut self);

    /// Last resolved window.
    fn window(&self) -> &Window;

    /// Layout for the last resolved window.
    fn layout(&self) -> Layout;

    /// Total scrollable height.
    fn content_height(&self) -> f64;

    /// Top edge of `index`, `None` if out of range.
    fn item_top(&self, index: ItemIndex) -> Option<f64>;

    /// Item whose span contains `offset`.
    fn item_at(&self, offset: f64) -> Option<ItemIndex>;
}

/// Fixed lists size their unpadded run from the container alone, which can
/// stop one item short when the offset lands inside an item.
const MIN_FIXED_OVERSCAN: usize = 1;

/// List where every item has the same height.
///
/// Overscan is raised to at least one item so the viewport bottom is always
/// covered.
#[derive(Debug, Clone)]
pub struct FixedSizeList {
    config: ListConfig,
    item_height: Height,
    scroll_offset: f64,
    window: Window,
}

impl FixedSizeList {
    /// Create a list scrolled to the top.
    pub fn new(mut config: ListConfig, item_height: Height) -> Self {
        if config.overscan.get() < MIN_FIXED_OVERSCAN {
            debug!(
                requested = config.overscan.get(),
                "fixed list raises overscan to {MIN_FIXED_OVERSCAN}"
            );
            config.overscan = Overscan::new(MIN_FIXED_OVERSCAN);
        }
        let mut list = Self {
            config,
            item_height,
            scroll_offset: 0.0,
            window: Window::EMPTY,
        };
        list.refresh_window();
        list
    }

    /// The shared item height.
    pub fn item_height(&self) -> Height {
        self.item_height
    }

    fn refresh_window(&mut self) -> bool {
        let window = resolve_fixed(
            self.scroll_offset,
            self.config.container_height,
            self.item_height,
            self.config.item_count,
            self.config.overscan,
        );
        let changed = window != self.window;
        self.window = window;
        changed
    }
}

impl VirtualList for FixedSizeList {
    fn config(&self) -> &ListConfig {
        &self.config
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn on_scroll(&mut self, offset: f64) -> bool {
        trace!(offset, "scroll");
        self.scroll_offset = offset;
        self.refresh_window()
    }

    fn set_container_height(&mut self, height: f64) -> bool {
        self.config.container_height = height;
        self.refresh_window()
    }

    fn on_height_measured(&mut self, index: ItemIndex, height: Height) -> bool {
        trace!(index = index.get(), height = height.get(), "fixed list ignores measurement");
        false
    }

    fn reset_heights(&mut self) {
        self.refresh_window();
    }

    fn window(&self) -> &Window {
        &self.window
    }

    fn layout(&self) -> Layout {
        emit_fixed(&self.window, self.item_height, self.config.item_count)
    }

    fn content_height(&self) -> f64 {
        self.item_height.get() * self.config.item_count as f64
    }

    fn item_top(&self, index: ItemIndex) -> Option<f64> {
        (index.get() < self.config.item_count).then(|| self.item_height.get() * index.get() as f64)
    }

    fn item_at(&self, offset: f64) -> Option<ItemIndex> {
        if offset < 0.0 {
            return None;
        }
        let index = (offset / self.item_height.get()).floor() as usize;
        (index < self.config.item_count).then(|| ItemIndex::new(index))
    }
}

/// List whose item heights come from a [`SizeOracle`] and are corrected after
/// rendering.
///
/// # Offset table lifecycle
/// The table is built once in [`new`](Self::new) and replaced by a freshly
/// built table on every height correction that actually changes a value, and
/// on [`reset_heights`](VirtualList::reset_heights). Scrolling never rebuilds it.
#[derive(Debug)]
pub struct DynamicSizeList<S = MeasuredSizes> {
    config: ListConfig,
    sizes: S,
    table: OffsetTable,
    scroll_offset: f64,
    window: Window,
    table_builds: u64,
}

impl<S: SizeOracle> DynamicSizeList<S> {
    /// Create a list scrolled to the top, building the offset table from the
    /// oracle's current (possibly estimated) heights.
    pub fn new(config: ListConfig, sizes: S) -> Self {
        if let Some(tracked) = sizes.tracked_len().filter(|&n| n != config.item_count) {
            warn!(
                tracked,
                item_count = config.item_count,
                "size oracle length differs from item count"
            );
        }
        let table = OffsetTable::build(|i| sizes.current_height(i), config.item_count);
        let mut list = Self {
            config,
            sizes,
            table,
            scroll_offset: 0.0,
            window: Window::EMPTY,
            table_builds: 1,
        };
        list.refresh_window();
        list
    }

    /// Current offset table.
    pub fn offsets(&self) -> &OffsetTable {
        &self.table
    }

    /// Height source.
    pub fn sizes(&self) -> &S {
        &self.sizes
    }

    /// Mutable height source.
    ///
    /// Changes made here are not seen until [`reset_heights`](VirtualList::reset_heights).
    pub fn sizes_mut(&mut self) -> &mut S {
        &mut self.sizes
    }

    /// How many times the offset table has been built, including the initial build.
    pub fn table_builds(&self) -> u64 {
        self.table_builds
    }

    fn refresh_window(&mut self) -> bool {
        let window = resolve_variable(
            self.scroll_offset,
            self.config.container_height,
            &self.table,
            self.config.overscan,
        );
        let changed = window != self.window;
        if changed {
            debug!(
                first = ?window.range.first().map(|i| i.get()),
                last = ?window.range.last().map(|i| i.get()),
                "window moved"
            );
        }
        self.window = window;
        changed
    }
}

impl<S: SizeOracle> VirtualList for DynamicSizeList<S> {
    fn config(&self) -> &ListConfig {
        &self.config
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn on_scroll(&mut self, offset: f64) -> bool {
        trace!(offset, "scroll");
        self.scroll_offset = offset;
        self.refresh_window()
    }

    fn set_container_height(&mut self, height: f64) -> bool {
        self.config.container_height = height;
        self.refresh_window()
    }

    fn on_height_measured(&mut self, index: ItemIndex, height: Height) -> bool {
        if index.get() >= self.config.item_count {
            warn!(
                index = index.get(),
                item_count = self.config.item_count,
                "ignoring height for out-of-range item"
            );
            return false;
        }
        if self.sizes.tracked_len().is_some_and(|n| index.get() >= n) {
            warn!(index = index.get(), "size oracle does not track item, measurement dropped");
            return false;
        }
        if !self.sizes.record_measured(index, height) {
            return false;
        }

        let table = self.table.rebuilt_from(index, |i| self.sizes.current_height(i));
        self.table = table;
        self.table_builds += 1;
        debug!(
            index = index.get(),
            height = height.get(),
            content_height = self.table.content_height(),
            "offset table rebuilt"
        );
        self.refresh_window();
        true
    }

    fn reset_heights(&mut self) {
        self.table = OffsetTable::build(|i| self.sizes.current_height(i), self.config.item_count);
        self.table_builds += 1;
        debug!(content_height = self.table.content_height(), "offset table reset");
        self.refresh_window();
    }

    fn window(&self) -> &Window {
        &self.window
    }

    fn layout(&self) -> Layout {
        emit_variable(&self.window, &self.table)
    }

    fn content_height(&self) -> f64 {
        self.table.content_height()
    }

    fn item_top(&self, index: ItemIndex) -> Option<f64> {
        (index.get() < self.table.len()).then(|| self.table.top(index))
    }

    fn item_at(&self, offset: f64) -> Option<ItemIndex> {
        self.table.item_at(offset)
    }
}

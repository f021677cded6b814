//! Windowing engine - which items to realize, and where
//!
//! Given a scroll offset, a container height and item heights, this layer
//! computes the total content height and the contiguous run of items that
//! must be realized, plus each realized item's position. The host owns
//! rendering and input; it calls into a controller on every scroll event and
//! every height measurement.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (Height, ItemIndex, Overscan, ListConfig)
//! - `size_oracle`: SizeOracle - where item heights come from (uniform or measured)
//! - `offset_table`: OffsetTable - prefix sums over item heights
//! - `visible_range`: VisibleRange - contiguous run of item indices
//! - `resolve`: fixed and variable-size range resolvers
//! - `layout`: Layout emitter - per-item placement and content height
//! - `controller`: FixedSizeList / DynamicSizeList - scroll and height update handling
//! - `render`: ItemRenderer contract and the measure-then-settle frame pass
//! - `scroll`: ScrollPosition - host-side semantic scroll position

pub mod controller;
pub mod layout;
pub mod offset_table;
pub mod render;
pub mod resolve;
pub mod scroll;
pub mod size_oracle;
pub mod types;
pub mod visible_range;

pub use controller::{DynamicSizeList, FixedSizeList, VirtualList};
pub use layout::{ItemPlacement, Layout, Positioning};
pub use offset_table::OffsetTable;
pub use render::{Frame, ItemRenderer, RenderedItem, render_frame};
pub use resolve::{Window, resolve_fixed, resolve_variable};
pub use scroll::ScrollPosition;
pub use size_oracle::{MeasuredSizes, SizeOracle, UniformSize};
pub use types::{Height, InvalidHeight, ItemIndex, ListConfig, Overscan};
pub use visible_range::VisibleRange;

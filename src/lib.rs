//! Virtual list windowing (vlist)
//!
//! Renders only the items of a long list that intersect the viewport, plus a
//! small overscan margin, for both uniform and measured item heights.
//!
//! The [`window`] module is the pure core: offset tables, range resolution,
//! layout emission and the scroll/height controllers. [`view`] is a terminal
//! host built on it; [`config`] and [`logging`] are the ambient shell around
//! the binary.

pub mod config;
pub mod error;
pub mod logging;
pub mod view;
pub mod window;

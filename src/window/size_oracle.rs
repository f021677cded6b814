//! Size oracles: where item heights come from.
//!
//! A [`SizeOracle`] answers "how tall is item `i` right now?" and accepts
//! measured corrections. The answer may be an estimate until the item has been
//! rendered and measured at least once.

use super::types::{Height, ItemIndex};

/// Source of per-item heights for the variable-size engine.
///
/// Implementations own their storage explicitly; the controller never relies
/// on hidden state captured inside a closure.
pub trait SizeOracle {
    /// Current height for `index`: the measured value if one was recorded,
    /// otherwise an estimate.
    fn current_height(&self, index: ItemIndex) -> Height;

    /// Record a measured height for `index`.
    ///
    /// Returns `true` only when the stored value actually changed.
    fn record_measured(&mut self, index: ItemIndex, height: Height) -> bool;

    /// Number of items this oracle stores heights for, `None` if unbounded.
    fn tracked_len(&self) -> Option<usize> {
        None
    }
}

/// Every item shares one height. Corrections are never accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSize(Height);

impl UniformSize {
    /// Create a uniform oracle.
    pub fn new(height: Height) -> Self {
        Self(height)
    }

    /// The shared height.
    pub fn height(&self) -> Height {
        self.0
    }
}

impl SizeOracle for UniformSize {
    fn current_height(&self, _index: ItemIndex) -> Height {
        self.0
    }

    fn record_measured(&mut self, _index: ItemIndex, _height: Height) -> bool {
        false
    }
}

/// Owned table of measured heights with an estimate for unmeasured items.
///
/// The estimate is either one constant or a per-index function, so callers
/// that know roughly how tall an item will be (e.g. from its text length) can
/// give a better first guess.
pub struct MeasuredSizes {
    measured: Vec<Option<Height>>,
    estimate: Estimate,
}

enum Estimate {
    Constant(Height),
    PerIndex(Box<dyn Fn(ItemIndex) -> Height>),
}

impl MeasuredSizes {
    /// All `item_count` items start out at `estimated`.
    pub fn new(item_count: usize, estimated: Height) -> Self {
        Self {
            measured: vec![None; item_count],
            estimate: Estimate::Constant(estimated),
        }
    }

    /// Unmeasured items take their height from `estimator`.
    pub fn with_estimator<F>(item_count: usize, estimator: F) -> Self
    where
        F: Fn(ItemIndex) -> Height + 'static,
    {
        Self {
            measured: vec![None; item_count],
            estimate: Estimate::PerIndex(Box::new(estimator)),
        }
    }

    /// Start from already-known heights (every item counts as measured).
    pub fn from_heights(heights: impl IntoIterator<Item = Height>, estimated: Height) -> Self {
        Self {
            measured: heights.into_iter().map(Some).collect(),
            estimate: Estimate::Constant(estimated),
        }
    }

    /// Number of items tracked.
    pub fn len(&self) -> usize {
        self.measured.len()
    }

    /// True if no items are tracked.
    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    /// Measured height for `index`, if any was recorded.
    pub fn measured(&self, index: ItemIndex) -> Option<Height> {
        self.measured.get(index.get()).copied().flatten()
    }

    /// How many items have a recorded measurement.
    pub fn measured_count(&self) -> usize {
        self.measured.iter().filter(|h| h.is_some()).count()
    }

    /// Forget every measurement, falling back to estimates.
    pub fn clear_measurements(&mut self) {
        self.measured.iter_mut().for_each(|h| *h = None);
    }

    fn estimated(&self, index: ItemIndex) -> Height {
        match &self.estimate {
            Estimate::Constant(height) => *height,
            Estimate::PerIndex(estimator) => estimator(index),
        }
    }
}

impl std::fmt::Debug for MeasuredSizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let estimate = match &self.estimate {
            Estimate::Constant(height) => format!("Constant({})", height.get()),
            Estimate::PerIndex(_) => "PerIndex(..)".to_string(),
        };
        f.debug_struct("MeasuredSizes")
            .field("len", &self.measured.len())
            .field("measured", &self.measured_count())
            .field("estimate", &estimate)
            .finish()
    }
}

impl SizeOracle for MeasuredSizes {
    fn current_height(&self, index: ItemIndex) -> Height {
        self.measured(index).unwrap_or_else(|| self.estimated(index))
    }

    fn record_measured(&mut self, index: ItemIndex, height: Height) -> bool {
        let current = self.current_height(index);
        let Some(slot) = self.measured.get_mut(index.get()) else {
            return false;
        };
        // An equal measurement still pins the estimate so later estimator
        // changes can't move it, but it is not a change.
        *slot = Some(height);
        current != height
    }

    fn tracked_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

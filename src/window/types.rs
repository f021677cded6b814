//! Core windowing newtypes

/// Height of a single item in the caller's linear unit (pixels, rows, ...).
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Height(f64);

/// Error returned when a height is zero, negative, or not finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Height must be finite and > 0 (got {0})")]
pub struct InvalidHeight(pub f64);

impl Height {
    /// Smart constructor that validates the height is finite and > 0.
    pub fn new(value: f64) -> Result<Self, InvalidHeight> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(InvalidHeight(value))
        }
    }

    /// Get the raw value.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Height {
    type Error = InvalidHeight;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Logical row index within the list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// Create a new ItemIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for ItemIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Number of extra items realized on each side of the strictly visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overscan(usize);

impl Overscan {
    /// Padding used when nothing else is configured.
    pub const DEFAULT: Self = Self(2);

    /// No padding at all.
    pub const NONE: Self = Self(0);

    /// Create an overscan of `items` on each side.
    pub fn new(items: usize) -> Self {
        Self(items)
    }

    /// Get the raw item count.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Overscan {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Geometry shared by both list variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Height of the visible viewport.
    pub container_height: f64,
    /// Total logical row count.
    pub item_count: usize,
    /// Padding applied on both sides of the resolved range.
    pub overscan: Overscan,
}

impl ListConfig {
    /// Create a config with the default overscan.
    pub fn new(container_height: f64, item_count: usize) -> Self {
        Self {
            container_height,
            item_count,
            overscan: Overscan::DEFAULT,
        }
    }

    /// Replace the overscan.
    pub fn with_overscan(mut self, overscan: Overscan) -> Self {
        self.overscan = overscan;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_accepts_positive_values() {
        assert_eq!(Height::new(40.0).map(|h| h.get()), Ok(40.0));
        assert_eq!(Height::new(0.5).map(|h| h.get()), Ok(0.5));
    }

    #[test]
    fn height_rejects_zero_negative_and_non_finite() {
        assert_eq!(Height::new(0.0), Err(InvalidHeight(0.0)));
        assert_eq!(Height::new(-3.0), Err(InvalidHeight(-3.0)));
        assert!(Height::new(f64::NAN).is_err());
        assert!(Height::new(f64::INFINITY).is_err());
    }

    #[test]
    fn invalid_height_message_includes_value() {
        let err = Height::new(-1.0).unwrap_err();
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn overscan_defaults_to_two_items() {
        assert_eq!(Overscan::default().get(), 2);
        assert_eq!(ListConfig::new(500.0, 10).overscan, Overscan::new(2));
    }

    #[test]
    fn with_overscan_replaces_padding() {
        let config = ListConfig::new(500.0, 10).with_overscan(Overscan::NONE);
        assert_eq!(config.overscan.get(), 0);
    }
}

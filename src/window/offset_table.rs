//! OffsetTable - prefix sums over item heights with O(log n) offset lookup
//!
//! `offsets[i]` is the bottom edge of item `i`: the summed height of items
//! `0..=i`. The table is immutable once built; a height change produces a
//! whole new table.
//!
//! Offsets never decrease. They strictly increase only while every height is
//! at least one ulp of the running sum; a height smaller than that (e.g. `1.0`
//! after `1e17`) is absorbed and the item ends up with zero extent. Whole-number
//! heights stay exact while the content height is below 2^53.
//!
//! # Complexity
//!
//! - `build`: O(n)
//! - `rebuilt_from`: O(n) copy + O(n - i) recomputation
//! - `first_greater_than`: O(log n)
//! - `top` / `height` / `bottom`: O(1)

use super::types::{Height, ItemIndex};

/// Cumulative bottom offsets for every item in the list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OffsetTable {
    offsets: Vec<f64>,
}

impl OffsetTable {
    /// Builds the table from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vlist::window::offset_table::OffsetTable;
    /// # use vlist::window::types::Height;
    /// let heights = [10.0, 20.0, 40.0, 100.0];
    /// let table = OffsetTable::build(|i| Height::new(heights[i.get()]).unwrap(), 4);
    /// assert_eq!(table.as_slice(), &[10.0, 30.0, 70.0, 170.0]);
    /// assert_eq!(table.content_height(), 170.0);
    /// ```
    pub fn build<F>(height_of: F, item_count: usize) -> Self
    where
        F: Fn(ItemIndex) -> Height,
    {
        let mut offsets = Vec::with_capacity(item_count);
        let mut running = 0.0;
        for i in 0..item_count {
            running += height_of(ItemIndex::new(i)).get();
            offsets.push(running);
        }
        Self { offsets }
    }

    /// Returns a new table where entries before `from` are copied and entries
    /// from `from` onward are recomputed.
    ///
    /// The result is identical to `build` with the same height function,
    /// because every entry is summed in the same order.
    pub fn rebuilt_from<F>(&self, from: ItemIndex, height_of: F) -> Self
    where
        F: Fn(ItemIndex) -> Height,
    {
        let from = from.get().min(self.offsets.len());
        let mut offsets = Vec::with_capacity(self.offsets.len());
        offsets.extend_from_slice(&self.offsets[..from]);

        let mut running = if from == 0 { 0.0 } else { self.offsets[from - 1] };
        for i in from..self.offsets.len() {
            running += height_of(ItemIndex::new(i)).get();
            offsets.push(running);
        }
        Self { offsets }
    }

    /// Number of items covered.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True if the table covers no items.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Raw cumulative offsets.
    pub fn as_slice(&self) -> &[f64] {
        &self.offsets
    }

    /// Total scrollable height; 0 for an empty table.
    pub fn content_height(&self) -> f64 {
        self.offsets.last().copied().unwrap_or(0.0)
    }

    /// Top edge of `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn top(&self, index: ItemIndex) -> f64 {
        let i = index.get();
        assert!(i < self.offsets.len(), "index {} out of bounds (len: {})", i, self.len());
        if i == 0 {
            0.0
        } else {
            self.offsets[i - 1]
        }
    }

    /// Bottom edge of `index` (its cumulative offset).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn bottom(&self, index: ItemIndex) -> f64 {
        self.offsets[index.get()]
    }

    /// Height of `index` as recorded in the table.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height(&self, index: ItemIndex) -> f64 {
        self.bottom(index) - self.top(index)
    }

    /// First index whose bottom edge is strictly greater than `threshold`.
    ///
    /// An item whose bottom equals `threshold` exactly is skipped.
    ///
    /// # Returns
    ///
    /// - `Some(index)` if such an item exists
    /// - `None` if `threshold >= content_height()` or the table is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use vlist::window::offset_table::OffsetTable;
    /// # use vlist::window::types::{Height, ItemIndex};
    /// let heights = [10.0, 20.0, 15.0];
    /// let table = OffsetTable::build(|i| Height::new(heights[i.get()]).unwrap(), 3);
    ///
    /// assert_eq!(table.first_greater_than(0.0), Some(ItemIndex::new(0)));
    /// assert_eq!(table.first_greater_than(10.0), Some(ItemIndex::new(1)));
    /// assert_eq!(table.first_greater_than(29.0), Some(ItemIndex::new(1)));
    /// assert_eq!(table.first_greater_than(30.0), Some(ItemIndex::new(2)));
    /// assert_eq!(table.first_greater_than(45.0), None);
    /// ```
    pub fn first_greater_than(&self, threshold: f64) -> Option<ItemIndex> {
        let i = self.offsets.partition_point(|&bottom| bottom <= threshold);
        (i < self.offsets.len()).then(|| ItemIndex::new(i))
    }

    /// Item whose span `[top, bottom)` contains `offset`.
    pub fn item_at(&self, offset: f64) -> Option<ItemIndex> {
        if offset < 0.0 {
            return None;
        }
        self.first_greater_than(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table_of(heights: &[f64]) -> OffsetTable {
        OffsetTable::build(|i| Height::new(heights[i.get()]).unwrap(), heights.len())
    }

    #[test]
    fn heights_below_precision_are_absorbed() {
        let table = table_of(&[1e17, 1.0, 1.0]);
        assert_eq!(table.as_slice(), &[1e17, 1e17, 1e17]);
        assert_eq!(table.height(ItemIndex::new(1)), 0.0);
        // Zero-extent items are never the first greater than an offset.
        assert_eq!(table.first_greater_than(0.0), Some(ItemIndex::new(0)));
        assert_eq!(table.first_greater_than(1e17), None);
    }

    #[test]
    fn empty_table() {
        let table = table_of(&[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.content_height(), 0.0);
        assert_eq!(table.first_greater_than(0.0), None);
    }

    #[test]
    fn single_entry() {
        let table = table_of(&[5.0]);
        assert_eq!(table.as_slice(), &[5.0]);
        assert_eq!(table.top(ItemIndex::new(0)), 0.0);
        assert_eq!(table.height(ItemIndex::new(0)), 5.0);
        assert_eq!(table.content_height(), 5.0);
    }

    #[test]
    fn prefix_sums_match_worked_example() {
        let table = table_of(&[10.0, 20.0, 40.0, 100.0]);
        assert_eq!(table.as_slice(), &[10.0, 30.0, 70.0, 170.0]);
        assert_eq!(table.top(ItemIndex::new(2)), 30.0);
        assert_eq!(table.height(ItemIndex::new(3)), 100.0);
    }

    #[test]
    fn first_greater_than_is_strict() {
        let table = table_of(&[10.0, 20.0, 40.0, 100.0]);
        // item 0 ends exactly at 10, so it's fully scrolled past
        assert_eq!(table.first_greater_than(10.0), Some(ItemIndex::new(1)));
        assert_eq!(table.first_greater_than(9.999), Some(ItemIndex::new(0)));
        assert_eq!(table.first_greater_than(35.0), Some(ItemIndex::new(2)));
        assert_eq!(table.first_greater_than(85.0), Some(ItemIndex::new(3)));
        assert_eq!(table.first_greater_than(170.0), None);
    }

    #[test]
    fn item_at_rejects_negative_offsets() {
        let table = table_of(&[10.0, 20.0]);
        assert_eq!(table.item_at(-1.0), None);
        assert_eq!(table.item_at(0.0), Some(ItemIndex::new(0)));
        assert_eq!(table.item_at(29.0), Some(ItemIndex::new(1)));
        assert_eq!(table.item_at(30.0), None);
    }

    #[test]
    fn rebuilt_from_recomputes_suffix_only() {
        let table = table_of(&[10.0, 20.0, 40.0, 100.0]);
        let corrected = [10.0, 20.0, 60.0, 100.0];
        let rebuilt = table.rebuilt_from(ItemIndex::new(2), |i| {
            Height::new(corrected[i.get()]).unwrap()
        });
        assert_eq!(rebuilt.as_slice(), &[10.0, 30.0, 90.0, 190.0]);
        // original is untouched
        assert_eq!(table.as_slice(), &[10.0, 30.0, 70.0, 170.0]);
    }

    #[test]
    fn rebuilt_from_past_end_copies_table() {
        let table = table_of(&[1.0, 2.0]);
        let rebuilt = table.rebuilt_from(ItemIndex::new(9), |_| Height::new(50.0).unwrap());
        assert_eq!(rebuilt, table);
    }

    proptest! {
        /// offsets[i] - offsets[i-1] == height(i), offsets[0] == height(0)
        #[test]
        fn prop_differences_equal_heights(heights in prop::collection::vec(0.5f64..500.0, 1..100)) {
            let table = table_of(&heights);
            prop_assert_eq!(table.len(), heights.len());
            prop_assert_eq!(table.as_slice()[0], heights[0]);
            let mut running = 0.0;
            for (i, &h) in heights.iter().enumerate() {
                running += h;
                prop_assert_eq!(table.as_slice()[i], running);
                prop_assert!((table.height(ItemIndex::new(i)) - h).abs() < 1e-9);
            }
        }

        /// Strictly increasing while heights stay well above the sum's precision.
        #[test]
        fn prop_strictly_increasing(heights in prop::collection::vec(0.5f64..500.0, 1..100)) {
            let table = table_of(&heights);
            for pair in table.as_slice().windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }

        /// All-equal heights degenerate to fixed-size offsets.
        #[test]
        fn prop_uniform_heights_match_fixed_math(count in 1usize..200, height in 1u32..100) {
            let height = height as f64;
            let table = OffsetTable::build(|_| Height::new(height).unwrap(), count);
            for i in 0..count {
                prop_assert_eq!(table.top(ItemIndex::new(i)), height * i as f64);
            }
            prop_assert_eq!(table.content_height(), height * count as f64);
        }

        /// Suffix rebuild is bit-for-bit equal to a full rebuild.
        #[test]
        fn prop_suffix_rebuild_matches_full_build(
            heights in prop::collection::vec(0.5f64..500.0, 1..100),
            index in 0usize..100,
            new_height in 0.5f64..500.0,
        ) {
            let table = table_of(&heights);
            let mut corrected = heights.clone();
            let index = index % heights.len();
            corrected[index] = new_height;

            let suffix = table.rebuilt_from(ItemIndex::new(index), |i| Height::new(corrected[i.get()]).unwrap());
            let full = table_of(&corrected);
            prop_assert_eq!(suffix, full);
        }

        /// first_greater_than agrees with a linear first-match scan.
        #[test]
        fn prop_binary_search_matches_linear_scan(
            heights in prop::collection::vec(1u32..50, 0..60),
            threshold in 0u32..3000,
        ) {
            let heights: Vec<f64> = heights.into_iter().map(f64::from).collect();
            let table = table_of(&heights);
            let threshold = f64::from(threshold);
            let linear = table.as_slice().iter().position(|&b| b > threshold).map(ItemIndex::new);
            prop_assert_eq!(table.first_greater_than(threshold), linear);
        }
    }
}

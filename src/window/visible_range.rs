//! Visible range calculation result

use super::types::ItemIndex;

/// Contiguous run of item indices to realize.
///
/// Stored half-open (`start..end`) so an empty list has a representable
/// empty range. [`first`](Self::first) and [`last`](Self::last) expose the
/// inclusive endpoints.
///
/// # Invariants
/// - `start <= end`
/// - `end <= item_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    start: usize,
    end: usize,
}

impl VisibleRange {
    /// Range containing nothing.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Inclusive range `first..=last`.
    ///
    /// # Panics
    /// In debug builds, panics if `first > last`.
    pub fn inclusive(first: ItemIndex, last: ItemIndex) -> Self {
        debug_assert!(
            first <= last,
            "first ({}) must not exceed last ({})",
            first.get(),
            last.get()
        );
        Self {
            start: first.get(),
            end: last.get() + 1,
        }
    }

    /// First index in the range (inclusive), `None` when empty.
    pub fn first(&self) -> Option<ItemIndex> {
        (!self.is_empty()).then(|| ItemIndex::new(self.start))
    }

    /// Last index in the range (inclusive), `None` when empty.
    pub fn last(&self) -> Option<ItemIndex> {
        (!self.is_empty()).then(|| ItemIndex::new(self.end - 1))
    }

    /// Number of items in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterate over the indices in the range.
    pub fn indices(&self) -> impl Iterator<Item = ItemIndex> {
        (self.start..self.end).map(ItemIndex::new)
    }

    /// Check if a specific index is in the range.
    pub fn contains(&self, index: ItemIndex) -> bool {
        (self.start..self.end).contains(&index.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(first: usize, last: usize) -> VisibleRange {
        VisibleRange::inclusive(ItemIndex::new(first), ItemIndex::new(last))
    }

    mod construction {
        use super::*;

        #[test]
        fn inclusive_keeps_both_endpoints() {
            let r = range(5, 10);
            assert_eq!(r.first(), Some(ItemIndex::new(5)));
            assert_eq!(r.last(), Some(ItemIndex::new(10)));
        }

        #[test]
        fn inclusive_accepts_single_item() {
            let r = range(5, 5);
            assert_eq!(r.first(), r.last());
            assert_eq!(r.len(), 1);
        }

        #[test]
        #[should_panic]
        #[cfg(debug_assertions)]
        fn inclusive_panics_when_first_greater_than_last() {
            range(10, 5);
        }

        #[test]
        fn default_is_empty() {
            assert_eq!(VisibleRange::default(), VisibleRange::EMPTY);
            assert!(VisibleRange::default().is_empty());
        }
    }

    mod length_and_empty {
        use super::*;

        #[test]
        fn len_counts_both_endpoints() {
            assert_eq!(range(5, 10).len(), 6);
        }

        #[test]
        fn empty_range_has_no_endpoints() {
            assert_eq!(VisibleRange::EMPTY.len(), 0);
            assert_eq!(VisibleRange::EMPTY.first(), None);
            assert_eq!(VisibleRange::EMPTY.last(), None);
        }
    }

    mod indices_iterator {
        use super::*;

        #[test]
        fn indices_iterates_first_to_last() {
            let indices: Vec<_> = range(5, 7).indices().collect();
            assert_eq!(
                indices,
                vec![ItemIndex::new(5), ItemIndex::new(6), ItemIndex::new(7)]
            );
        }

        #[test]
        fn indices_returns_empty_iterator_when_range_empty() {
            assert_eq!(VisibleRange::EMPTY.indices().count(), 0);
        }

        #[test]
        fn indices_iterator_count_matches_len() {
            let r = range(10, 20);
            assert_eq!(r.indices().count(), r.len());
        }
    }

    mod contains {
        use super::*;

        #[test]
        fn contains_both_endpoints() {
            let r = range(5, 10);
            assert!(r.contains(ItemIndex::new(5)));
            assert!(r.contains(ItemIndex::new(10)));
        }

        #[test]
        fn excludes_neighbours() {
            let r = range(5, 10);
            assert!(!r.contains(ItemIndex::new(4)));
            assert!(!r.contains(ItemIndex::new(11)));
        }

        #[test]
        fn contains_false_for_empty_range() {
            assert!(!VisibleRange::EMPTY.contains(ItemIndex::new(0)));
        }
    }
}

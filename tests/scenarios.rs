//! End-to-end windowing scenarios through the public API.

use vlist::window::{
    DynamicSizeList, FixedSizeList, Height, ItemIndex, ListConfig, MeasuredSizes, Positioning,
    VirtualList,
};

fn h(value: f64) -> Height {
    Height::new(value).unwrap()
}

fn realized(list: &impl VirtualList) -> Option<(usize, usize)> {
    let range = list.window().range;
    Some((range.first()?.get(), range.last()?.get()))
}

fn four_items() -> DynamicSizeList {
    let sizes = MeasuredSizes::from_heights([h(10.0), h(20.0), h(40.0), h(100.0)], h(40.0));
    DynamicSizeList::new(ListConfig::new(50.0, 4), sizes)
}

#[test]
fn thousand_fixed_rows_scrolled_a_quarter_page() {
    let mut list = FixedSizeList::new(ListConfig::new(500.0, 1000), h(100.0));
    list.on_scroll(250.0);

    assert_eq!(list.content_height(), 100_000.0);
    assert_eq!(realized(&list), Some((0, 9)));

    let layout = list.layout();
    assert_eq!(layout.positioning, Positioning::Flow);
    assert_eq!(layout.leading_spacer, 0.0);
    assert_eq!(layout.items.len(), 10);
    assert_eq!(layout.items[9].top, 900.0);
}

#[test]
fn variable_rows_resolve_against_prefix_sums() {
    let mut list = four_items();
    assert_eq!(list.offsets().as_slice(), &[10.0, 30.0, 70.0, 170.0]);

    list.on_scroll(35.0);

    assert_eq!(realized(&list), Some((0, 3)));
    let window = list.window();
    assert_eq!(window.unpadded.first(), Some(ItemIndex::new(2)));
    assert_eq!(window.unpadded.last(), Some(ItemIndex::new(3)));

    let layout = list.layout();
    assert_eq!(layout.positioning, Positioning::Absolute);
    let tops: Vec<f64> = layout.items.iter().map(|p| p.top).collect();
    assert_eq!(tops, vec![0.0, 10.0, 30.0, 70.0]);
}

#[test]
fn height_correction_is_used_by_next_resolve() {
    let mut list = four_items();
    list.on_scroll(35.0);

    assert!(list.on_height_measured(ItemIndex::new(2), h(60.0)));
    assert_eq!(list.offsets().as_slice(), &[10.0, 30.0, 90.0, 190.0]);
    assert_eq!(list.content_height(), 190.0);

    // Item 2 now spans [30, 90), so it is still the first visible item at 85.
    list.on_scroll(85.0);
    let window = list.window();
    assert_eq!(window.unpadded.first(), Some(ItemIndex::new(2)));
    assert_eq!(window.unpadded.last(), Some(ItemIndex::new(3)));
    assert_eq!(list.item_top(ItemIndex::new(3)), Some(90.0));
}

#[test]
fn empty_lists_render_nothing_without_panicking() {
    let mut fixed = FixedSizeList::new(ListConfig::new(500.0, 0), h(100.0));
    let mut dynamic = DynamicSizeList::new(ListConfig::new(500.0, 0), MeasuredSizes::new(0, h(10.0)));

    let lists: [&mut dyn VirtualList; 2] = [&mut fixed, &mut dynamic];
    for list in lists {
        list.on_scroll(1_000.0);
        assert!(list.window().range.is_empty());
        assert_eq!(list.content_height(), 0.0);
        assert!(list.layout().items.is_empty());
        assert!(!list.on_height_measured(ItemIndex::new(0), h(5.0)));
    }
}

#[test]
fn scrolling_past_the_end_keeps_the_tail_realized() {
    let mut list = four_items();
    list.on_scroll(500.0);
    // Unpadded start pins to the last item; overscan pads upward.
    assert_eq!(list.window().unpadded.first(), Some(ItemIndex::new(3)));
    assert_eq!(realized(&list), Some((1, 3)));

    let mut fixed = FixedSizeList::new(ListConfig::new(500.0, 1000), h(100.0));
    fixed.on_scroll(1_000_000.0);
    assert_eq!(realized(&fixed), Some((997, 999)));
}

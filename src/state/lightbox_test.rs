use super::*;

fn viewer(len: usize) -> Lightbox {
    Lightbox::new(
        (0..len)
            .map(|i| LightboxImage { src: format!("img-{i}.jpg"), alt: format!("image {i}") })
            .collect(),
    )
}

// =============================================================
// Opening and closing
// =============================================================

#[test]
fn starts_closed() {
    let lb = viewer(3);
    assert_eq!(lb.selection(), Selection::Closed);
    assert!(!lb.is_open());
    assert!(lb.current().is_none());
}

#[test]
fn open_selects_a_valid_index() {
    let mut lb = viewer(3);
    lb.open(1);
    assert_eq!(lb.selection(), Selection::Open(1));
    assert_eq!(lb.current().map(|img| img.src.as_str()), Some("img-1.jpg"));
}

#[test]
fn open_out_of_range_is_a_no_op() {
    let mut lb = viewer(3);
    lb.open(3);
    assert_eq!(lb.selection(), Selection::Closed);

    lb.open(0);
    lb.open(99);
    assert_eq!(lb.selection(), Selection::Open(0));
}

#[test]
fn close_drops_the_selection() {
    let mut lb = viewer(3);
    lb.open(2);
    lb.close();
    assert_eq!(lb.selection(), Selection::Closed);
    assert!(lb.current().is_none());
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_wraps_from_the_last_index_to_zero() {
    let mut lb = viewer(3);
    lb.open(2);
    lb.next();
    assert_eq!(lb.selection(), Selection::Open(0));
}

#[test]
fn previous_wraps_from_zero_to_the_last_index() {
    let mut lb = viewer(3);
    lb.open(0);
    lb.previous();
    assert_eq!(lb.selection(), Selection::Open(2));
}

#[test]
fn next_applied_len_times_returns_to_the_start() {
    let mut lb = viewer(4);
    lb.open(1);
    for _ in 0..lb.len() {
        lb.next();
    }
    assert_eq!(lb.selection(), Selection::Open(1));
}

#[test]
fn navigation_while_closed_is_a_no_op() {
    let mut lb = viewer(3);
    lb.next();
    lb.previous();
    assert_eq!(lb.selection(), Selection::Closed);
}

#[test]
fn empty_catalog_never_opens_or_navigates() {
    let mut lb = viewer(0);
    assert!(lb.is_empty());
    lb.open(0);
    lb.next();
    lb.previous();
    assert_eq!(lb.selection(), Selection::Closed);
}

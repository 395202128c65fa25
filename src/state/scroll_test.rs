use super::*;

#[test]
fn visible_at_exactly_the_threshold() {
    assert!(back_to_top_visible(200.0));
}

#[test]
fn hidden_below_the_threshold() {
    assert!(!back_to_top_visible(199.9));
    assert!(!back_to_top_visible(0.0));
}

#[test]
fn visible_beyond_the_threshold() {
    assert!(back_to_top_visible(200.1));
    assert!(back_to_top_visible(5_000.0));
}

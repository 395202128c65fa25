use super::*;

#[test]
fn initial_mode_sets_no_inline_style() {
    assert_eq!(card_style(AnimationMode::Initial, 0), None);
    assert_eq!(card_style(AnimationMode::Initial, 7), None);
}

#[test]
fn running_mode_staggers_by_one_indexed_position() {
    assert_eq!(
        card_style(AnimationMode::Running, 0).as_deref(),
        Some("animation: product-entrance 0.8s ease-out; animation-delay: 0.1s")
    );
    assert_eq!(
        card_style(AnimationMode::Running, 2).as_deref(),
        Some("animation: product-entrance 0.8s ease-out; animation-delay: 0.3s")
    );
}

#[test]
fn halted_mode_removes_the_animation() {
    assert_eq!(card_style(AnimationMode::Halted, 5).as_deref(), Some("animation: none"));
}

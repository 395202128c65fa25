use super::*;

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn stored_preference_wins_over_system_signal() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn system_dark_applies_without_stored_preference() {
    assert_eq!(resolve(None, true), Theme::Dark);
}

#[test]
fn falls_back_to_light() {
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_back_to_system_signal() {
    assert_eq!(resolve(Some("sepia"), true), Theme::Dark);
    assert_eq!(resolve(Some(""), false), Theme::Light);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_flips_between_the_two_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_after_n_toggles_matches_toggle_parity() {
    // Dark exactly when (N + [initial is dark]) is odd.
    for initial in [Theme::Light, Theme::Dark] {
        let mut theme = initial;
        for n in 1..=8_usize {
            theme = theme.toggled();
            let expected_dark = (n + usize::from(initial.is_dark())) % 2 == 1;
            assert_eq!(theme.is_dark(), expected_dark, "initial {initial:?}, {n} toggles");
        }
    }
}

// =============================================================
// Control presentation
// =============================================================

#[test]
fn toggle_label_advertises_the_other_mode() {
    assert_eq!(Theme::Dark.toggle_label(), "\u{2600}\u{fe0f} Light Mode");
    assert_eq!(Theme::Light.toggle_label(), "\u{1f319} Dark Mode");
}

#[test]
fn aria_pressed_reflects_dark_state() {
    assert_eq!(Theme::Dark.aria_pressed(), "true");
    assert_eq!(Theme::Light.aria_pressed(), "false");
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

//! Back-to-top visibility as a pure function of scroll offset.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll offset (CSS pixels) at or past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 200.0;

/// True when the back-to-top control should be visible.
pub fn back_to_top_visible(offset: f64) -> bool {
    offset >= BACK_TO_TOP_THRESHOLD
}

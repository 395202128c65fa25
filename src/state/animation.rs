//! Entrance animation for the product cards.
//!
//! No state survives between runs: start re-applies the same declaration and
//! stop removes it from every card.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Animation declaration applied to each card while running.
pub const ENTRANCE_ANIMATION: &str = "product-entrance 0.8s ease-out";

/// Per-card stagger between animation starts, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.1;

/// What the product cards are currently doing, animation-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationMode {
    /// Page as loaded; cards carry no inline animation style.
    #[default]
    Initial,
    /// Entrance animation running, staggered by card position.
    Running,
    /// Animation removed from every card.
    Halted,
}

/// Inline style for the card at `index` (0-based page order). The stagger is
/// 1-indexed: the first card starts one step after zero.
pub fn card_style(mode: AnimationMode, index: usize) -> Option<String> {
    match mode {
        AnimationMode::Initial => None,
        AnimationMode::Running => {
            let delay = (index as f64 + 1.0) * STAGGER_STEP_SECS;
            Some(format!("animation: {ENTRANCE_ANIMATION}; animation-delay: {delay:.1}s"))
        }
        AnimationMode::Halted => Some("animation: none".to_owned()),
    }
}

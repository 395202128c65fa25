//! Page header: brand, greeting line, and the theme toggle.

use leptos::prelude::*;

use crate::app::StartupHour;
use crate::state::greeting;
use crate::state::theme::{self, Theme};

/// Header with the brand title, the personalized greeting, and the theme
/// toggle control.
#[component]
pub fn Header() -> impl IntoView {
    let theme_sig = expect_context::<RwSignal<Theme>>();
    let name = expect_context::<RwSignal<Option<String>>>();
    let hour = expect_context::<StartupHour>();

    let on_toggle = move |_| {
        let next = theme_sig.get().toggled();
        theme::apply(next);
        theme_sig.set(next);
    };

    // Empty until the name dialog has resolved a name.
    let greeting_line = move || name.get().map(|n| greeting::message(hour.0, &n));

    view! {
        <header class="site-header">
            <h1 class="site-header__brand">"OMORO's Jewelry"</h1>
            <p class="site-header__greeting">{greeting_line}</p>
            <button
                id="theme-toggle"
                class="site-header__theme-toggle btn"
                aria-pressed=move || theme_sig.get().aria_pressed()
                on:click=on_toggle
            >
                {move || theme_sig.get().toggle_label()}
            </button>
        </header>
    }
}

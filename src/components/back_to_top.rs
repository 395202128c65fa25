//! Floating back-to-top control.

use leptos::prelude::*;

use crate::state::scroll;
use crate::util::browser;

/// Button that appears once the page is scrolled past the threshold and
/// smooth-scrolls back to the top. Visibility is recomputed on every scroll
/// event, with no debouncing.
#[component]
pub fn BackToTop() -> impl IntoView {
    let offset = RwSignal::new(browser::scroll_offset());

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        offset.set(browser::scroll_offset());
    });
    on_cleanup(move || handle.remove());

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || scroll::back_to_top_visible(offset.get())
            aria-label="Back to top"
            on:click=move |_| browser::scroll_to_top()
        >"\u{2191}"</button>
    }
}

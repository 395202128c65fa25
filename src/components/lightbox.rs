//! Modal image viewer over the catalog images.
//!
//! The modal element is always rendered; visibility is carried by a class
//! toggle and `aria-hidden`, and the image source is cleared while closed.
//! A window-level key handler drives Escape (close) and ArrowRight/ArrowLeft
//! (wrap-around navigation) while the viewer is open.

use leptos::prelude::*;

use crate::state::lightbox::Lightbox;

/// Lightbox modal: backdrop, the current image, and the close control.
#[component]
pub fn LightboxViewer() -> impl IntoView {
    let lightbox = expect_context::<RwSignal<Lightbox>>();

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if !lightbox.get_untracked().is_open() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => lightbox.update(Lightbox::close),
            "ArrowRight" => lightbox.update(Lightbox::next),
            "ArrowLeft" => lightbox.update(Lightbox::previous),
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    // Opening moves focus to the close control.
    let close_ref = NodeRef::<leptos::html::Button>::new();
    Effect::new(move || {
        if lightbox.get().is_open() {
            if let Some(button) = close_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let src = move || lightbox.get().current().map(|img| img.src.clone()).unwrap_or_default();
    let alt = move || lightbox.get().current().map(|img| img.alt.clone()).unwrap_or_default();

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:lightbox--open=move || lightbox.get().is_open()
            aria-hidden=move || if lightbox.get().is_open() { "false" } else { "true" }
            on:click=move |_| lightbox.update(Lightbox::close)
        >
            <img
                id="lightbox-image"
                class="lightbox__image"
                src=src
                alt=alt
                on:click=|ev| ev.stop_propagation()
            />
            <button
                id="lightbox-close"
                class="lightbox__close"
                aria-label="Close"
                node_ref=close_ref
                on:click=move |ev| {
                    ev.stop_propagation();
                    lightbox.update(Lightbox::close);
                }
            >"\u{00d7}"</button>
        </div>
    }
}

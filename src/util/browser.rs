//! Window glue: color-scheme query, body class, scrolling, wall clock, and
//! detached timers.
//!
//! Everything here needs a browser environment; non-wasm builds get inert
//! fallbacks so the state modules stay testable natively.

use std::time::Duration;

use leptos::prelude::*;

/// True when the system color scheme prefers dark.
pub fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Add or remove the `dark-mode` class on `<body>`.
pub fn set_body_dark(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Local wall-clock hour, 0-23.
pub fn local_hour() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Clear a boolean flag after `delay` via a detached timer.
///
/// Fire-and-forget: no handle is retained and the timer is never cancelled.
/// Overlapping calls are harmless; each one re-clears the flag.
pub fn clear_flag_after(flag: RwSignal<bool>, delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            flag.set(false);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (flag, delay);
    }
}

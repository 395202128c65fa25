//! Thin wrappers around `window.localStorage`.
//!
//! All reads and writes are best-effort: a missing window, disabled storage,
//! or a failed write degrades to `None` or a no-op. Values survive page
//! reloads within the same browsing context. Requires a browser environment;
//! non-wasm builds (native unit tests) see an empty store.

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a string value from localStorage.
pub fn get(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to localStorage.
pub fn set(key: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = storage() {
            let _ = store.set_item(key, value);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (key, value);
    }
}

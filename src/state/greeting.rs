//! One-time name greeting.
//!
//! The name is collected once (via the name dialog) and persisted; it is
//! never mutated again during a session. The salutation uses the local
//! wall-clock hour captured at startup.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use crate::util::storage;

/// localStorage key for the visitor's display name.
const STORAGE_KEY: &str = "userName";

/// Name used when the visitor declines to give one.
pub const DEFAULT_NAME: &str = "Guest";

/// Load the stored display name, if any.
pub fn load_name() -> Option<String> {
    storage::get(STORAGE_KEY)
}

/// Persist a display name.
pub fn store_name(name: &str) {
    storage::set(STORAGE_KEY, name);
}

/// Normalize a dialog answer: a whitespace-only answer collapses to
/// [`DEFAULT_NAME`].
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Time-of-day salutation for a local wall-clock hour.
pub fn salutation(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// The greeting line rendered under the page header.
pub fn message(hour: u32, name: &str) -> String {
    format!("{}, {}! Welcome to our jewelry showcase.", salutation(hour), name)
}

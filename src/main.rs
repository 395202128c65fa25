//! CSR entry point: logging setup and mounting the root component.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(omoro_showcase::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The UI only runs in a browser; native builds exist for unit tests.
}

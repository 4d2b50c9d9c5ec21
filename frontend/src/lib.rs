//! WASM entry point of the portfolio site.
//!
//! Hydrates the server-rendered page so the header's menu toggle, outside
//! click detection and contact modal become interactive, and routes `log`
//! output to the browser console.

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::component;
    // The header and modal log listener attach/release at debug level.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}

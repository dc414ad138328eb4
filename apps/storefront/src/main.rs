//! WASM entry point.

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = storefront::start() {
        web_sys::console::error_1(&format!("storefront failed to start: {}", e).into());
    }
}

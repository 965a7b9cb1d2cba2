// lib.rs - Root module for the product_manager library
//
// The library holds the whole client: the toolkit-independent core under
// `web_app` and, behind the `ssr`/`hydrate` features, its Leptos surface.

pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::config::ClientConfig;
    use crate::web_app::App;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    // No tracing subscriber in the browser: events reach the console as log records
    _ = console_log::init_with_level(::log::Level::Debug);

    let config = ClientConfig::from_document().unwrap_or_default();
    leptos::mount::hydrate_body(move || view! { <App config=config.clone() /> });
}

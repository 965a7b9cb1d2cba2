// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, the client configuration context and the meta tags.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::{ClientConfig, API_URL_META};
use crate::web_app::pages::ProductsPage;

pub const APP_TITLE: &str = "Product Manager";

/// Root application component
///
/// Sets up:
/// - Meta tags, including the API URL handed to the hydrated client
/// - The `ClientConfig` context read by pages
/// - Router with routes
#[component]
pub fn App(
    /// Backend location, resolved by the server or read back from the page
    config: ClientConfig,
) -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();
    let api_url = config.api_url.clone();
    provide_context(config);

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Create, edit and delete products through the product API" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Meta name=API_URL_META content=api_url />

        <Stylesheet id="leptos" href="/pkg/product_manager.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}

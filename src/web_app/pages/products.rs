// web_app/pages/products.rs - Product catalogue page
//
// Composes the form, the error banner and the product list, and routes
// every user action to the ProductClient. The client itself is
// toolkit-independent; this page only owns the signals and the
// `EditState` value it threads through the handlers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::HttpProductApi;
use crate::web_app::client::ProductClient;
use crate::web_app::components::*;
use crate::web_app::config::ClientConfig;
use crate::web_app::model::EditState;
use crate::web_app::view::{BrowserConfirm, LeptosView};

type PageClient = ProductClient<HttpProductApi, LeptosView, BrowserConfirm>;

/// Product management page
///
/// Reads the API location from the `ClientConfig` context provided by
/// the root component.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let view = LeptosView::new();

    let client: StoredValue<Rc<PageClient>, LocalStorage> = StoredValue::new_local(Rc::new(
        ProductClient::new(HttpProductApi::new(&config), view, BrowserConfirm),
    ));
    let edit_state = RwSignal::new(EditState::Creating);

    let load = move || {
        let client = client.get_value();
        spawn_local(async move {
            client.load_products().await;
        });
    };

    // Initial load; effects only run in the browser
    Effect::new(move || load());

    let on_refresh = Callback::new(move |()| load());

    let on_submit = Callback::new(move |()| {
        let client = client.get_value();
        let state = edit_state.get_untracked();
        spawn_local(async move {
            let next = client.submit_form(state).await;
            edit_state.set(next);
        });
    });

    let on_cancel = Callback::new(move |()| {
        edit_state.set(client.get_value().reset_form());
    });

    let on_edit = Callback::new(move |id: i64| {
        let client = client.get_value();
        let state = edit_state.get_untracked();
        spawn_local(async move {
            let next = client.start_edit(state, id).await;
            edit_state.set(next);
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        let client = client.get_value();
        spawn_local(async move {
            client.delete_product(id).await;
        });
    });

    let on_close_error = Callback::new(move |()| view.error.set(None));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"📦"</span>
                        <h1 class="text-xl font-bold text-gray-900">"Product Manager"</h1>
                    </div>
                    <SecondaryButton on_click=on_refresh>"↻ Refresh"</SecondaryButton>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <ErrorBanner error=view.error on_close=on_close_error />

                <div class="flex flex-col lg:flex-row gap-8 items-start">
                    <div class="w-full lg:w-96 flex-shrink-0">
                        <ProductFormPanel
                            form=view.form
                            mode=view.mode
                            form_ref=view.form_ref
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    </div>

                    <section class="flex-1 w-full min-w-0">
                        <ProductList
                            products=view.products
                            loading=view.loading
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    </section>
                </div>
            </main>

            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>{format!("Backend: {}", config.api_url)}</p>
                </div>
            </footer>
        </div>
    }
}

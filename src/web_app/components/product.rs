// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: one product with its edit/delete actions
// - ProductList: count header, empty state and the grid of cards
//
// Names and descriptions are inserted as text nodes, never as inner HTML,
// so stored markup is shown literally.

use leptos::prelude::*;

use super::common::{Loading, PriceDisplay, StockBadge};
use crate::web_app::model::Product;
use crate::web_app::render::{product_count_label, EMPTY_STATE_HINT, EMPTY_STATE_TITLE};

/// Product card
///
/// Displays a product summary with edit and delete buttons.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
    /// Called with the product id when "Edit" is clicked
    on_edit: Callback<i64>,
    /// Called with the product id when "Delete" is clicked
    on_delete: Callback<i64>,
) -> impl IntoView {
    let product_id = product.id;

    view! {
        <div
            class="product-card bg-white rounded-xl shadow-sm hover:shadow-xl transition-all \
                   duration-300 border border-gray-100 flex flex-col h-full p-5"
            data-product-id=product_id.to_string()
        >
            <h3 class="font-bold text-gray-900 mb-2 text-lg">{product.name}</h3>
            <p class="text-gray-600 text-sm mb-4 flex-1">{product.description}</p>

            <div class="product-info flex justify-between items-center mb-3 pt-3 border-t border-gray-100">
                <PriceDisplay price=product.price />
                <StockBadge stock=product.stock />
            </div>

            <div class="product-actions flex gap-2">
                <button
                    type="button"
                    class="btn btn-edit flex-1 px-3 py-2 bg-amber-100 text-amber-800 rounded-lg hover:bg-amber-200"
                    on:click=move |_| on_edit.run(product_id)
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="btn btn-delete flex-1 px-3 py-2 bg-red-100 text-red-700 rounded-lg hover:bg-red-200"
                    on:click=move |_| on_delete.run(product_id)
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

/// Empty state shown when the backend has no products
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"📦"</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">{EMPTY_STATE_TITLE}</h3>
            <p class="text-gray-500 max-w-md mx-auto">{EMPTY_STATE_HINT}</p>
        </div>
    }
}

/// Product list
///
/// Hidden behind a spinner while loading. Before the first successful load
/// nothing is shown; afterwards the last rendered collection stays visible
/// until a newer one replaces it.
#[component]
pub fn ProductList(
    /// Collection from the last successful load
    #[prop(into)]
    products: Signal<Option<Vec<Product>>>,
    /// Whether a load is in flight
    #[prop(into)]
    loading: Signal<bool>,
    on_edit: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Loading message="Loading products..." /> }
        >
            {move || match products.get() {
                None => view! { <div class="products-container"></div> }.into_any(),
                Some(list) if list.is_empty() => view! { <EmptyState /> }.into_any(),
                Some(list) => view! {
                    <div class="w-full">
                        <div class="flex justify-between items-center mb-6">
                            <span class="text-gray-500 font-medium">
                                {product_count_label(list.len())}
                            </span>
                        </div>
                        <div class="products-container grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {list.into_iter().map(|product| view! {
                                <ProductCard
                                    product=product
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any(),
            }}
        </Show>
    }
}

// web_app/components/form.rs - Create/edit product form
//
// The form is stateless: its fields are the signals of `ProductFormSignals`
// and its chrome follows the `FormMode` signal, both written by the
// ProductClient through the view.

use leptos::html;
use leptos::prelude::*;

use super::common::{Button, SecondaryButton, TextArea, TextInput};
use crate::web_app::model::FormMode;
use crate::web_app::view::ProductFormSignals;

/// Product form panel
#[component]
pub fn ProductFormPanel(
    /// Field values
    form: ProductFormSignals,
    /// Create or edit chrome
    #[prop(into)]
    mode: Signal<FormMode>,
    /// Handle used to scroll the form into view when editing starts
    form_ref: NodeRef<html::Form>,
    /// Called on submit (default browser submission is prevented)
    on_submit: Callback<()>,
    /// Called by the cancel button, shown only in edit mode
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <section class="form-section bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
            <h2 class="text-xl font-bold text-gray-800 mb-4">{move || mode.get().title()}</h2>

            // Values go to the backend as typed; it is the only validator
            <form
                id="product-form"
                node_ref=form_ref
                novalidate=true
                on:submit=handle_submit
                class="space-y-4"
            >
                <input type="hidden" id="product-id" name="id" prop:value=move || form.id.get() />

                <label class="block">
                    <span class="text-sm font-medium text-gray-700">"Name"</span>
                    <TextInput value=form.name name="name" placeholder="Mechanical keyboard" />
                </label>

                <label class="block">
                    <span class="text-sm font-medium text-gray-700">"Description"</span>
                    <TextArea value=form.description name="description" />
                </label>

                <div class="grid grid-cols-2 gap-4">
                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Price (€)"</span>
                        <TextInput value=form.price name="price" input_type="number" step="0.01" />
                    </label>
                    <label class="block">
                        <span class="text-sm font-medium text-gray-700">"Stock"</span>
                        <TextInput value=form.stock name="stock" input_type="number" step="1" />
                    </label>
                </div>

                <div class="flex gap-3">
                    <Button button_type="submit">
                        <span id="submit-btn">{move || mode.get().submit_label()}</span>
                    </Button>
                    <Show when=move || mode.get().shows_cancel()>
                        <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                    </Show>
                </div>
            </form>
        </section>
    }
}

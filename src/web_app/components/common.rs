// web_app/components/common.rs - Reusable UI components
//
// These are small, composable components used throughout the application.
// Philosophy: Pure, stateless components that receive all data via props.

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::web_app::render::{format_price, stock_class, stock_label};

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error banner
///
/// Hidden while `error` is `None`. The close button only hides the
/// banner; it does not cancel a pending auto-dismiss.
#[component]
pub fn ErrorBanner(
    /// Message to display, if any
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called when the user closes the banner
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
                <div class="bg-red-100 p-2 rounded-full text-red-600">
                    <span class="text-xl font-bold">"⚠"</span>
                </div>
                <p class="flex-1 text-red-700 text-sm">{move || error.get().unwrap_or_default()}</p>
                <button
                    type="button"
                    class="text-red-400 hover:text-red-600"
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// Primary button component
///
/// A styled button with hover effects.
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "btn px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=disabled
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
///
/// A lighter styled button for secondary actions.
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(default = false)]
    disabled: bool,
) -> impl IntoView {
    let class = "btn btn-secondary px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=disabled
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                           focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                           outline-none transition-shadow shadow-sm";

/// Text input component
///
/// A styled input bound to a string signal.
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Form field name
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Step attribute for number inputs
    #[prop(optional)]
    step: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=format!("product-{}", name)
            name=name
            placeholder=placeholder
            step=step
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Multi-line text input bound to a string signal
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    name: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <textarea
            id=format!("product-{}", name)
            name=name
            placeholder=placeholder
            rows=rows.to_string()
            class=INPUT_CLASS
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        ></textarea>
    }
}

/// Price display component
///
/// Formats a price with two decimals and the currency suffix.
#[component]
pub fn PriceDisplay(
    /// The price value
    price: Decimal,
) -> impl IntoView {
    view! {
        <span class="product-price text-lg font-bold text-blue-600 bg-blue-50 px-2 py-1 rounded-lg">
            {format_price(price)}
        </span>
    }
}

/// Stock quantity, flagged when below the low-stock threshold
#[component]
pub fn StockBadge(stock: i64) -> impl IntoView {
    view! {
        <span class=stock_class(stock)>{stock_label(stock)}</span>
    }
}

// web_app/view.rs - Leptos implementation of the client's ViewPort
//
// All page state lives in signals; the components read them and the
// ProductClient writes them through this type. Every handle is Copy, so
// the view can be moved freely into event handlers.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::web_app::client::{Confirm, ViewPort};
use crate::web_app::model::{FormMode, Product, ProductForm};

/// One signal per form field
#[derive(Clone, Copy)]
pub struct ProductFormSignals {
    pub id: RwSignal<String>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
}

impl ProductFormSignals {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
        }
    }

    pub fn read(&self) -> ProductForm {
        ProductForm {
            id: self.id.get_untracked(),
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
        }
    }

    pub fn write(&self, form: &ProductForm) {
        self.id.set(form.id.clone());
        self.name.set(form.name.clone());
        self.description.set(form.description.clone());
        self.price.set(form.price.clone());
        self.stock.set(form.stock.clone());
    }
}

impl Default for ProductFormSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct LeptosView {
    /// `None` until the first successful load
    pub products: RwSignal<Option<Vec<Product>>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub mode: RwSignal<FormMode>,
    pub form: ProductFormSignals,
    pub form_ref: NodeRef<html::Form>,
}

impl LeptosView {
    /// Must be called inside a reactive owner (i.e. from a component)
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            mode: RwSignal::new(FormMode::Create),
            form: ProductFormSignals::new(),
            form_ref: NodeRef::new(),
        }
    }
}

impl Default for LeptosView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for LeptosView {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn render_list(&self, products: &[Product]) {
        self.products.set(Some(products.to_vec()));
    }

    fn render_error(&self, message: Option<&str>) {
        self.error.set(message.map(str::to_string));
    }

    fn dismiss_error_after(&self, delay: Duration) {
        // Not cancelled when the banner is cleared or replaced in between
        let error = self.error;
        set_timeout(
            move || {
                let _ = error.try_set(None);
            },
            delay,
        );
    }

    fn set_form_chrome(&self, mode: FormMode) {
        self.mode.set(mode);
    }

    fn read_form_values(&self) -> ProductForm {
        self.form.read()
    }

    fn write_form_values(&self, form: &ProductForm) {
        self.form.write(form);
    }

    fn reveal_form(&self) {
        if let Some(form) = self.form_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            form.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// `window.confirm`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }
}

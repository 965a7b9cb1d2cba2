// web_app/render.rs - Toolkit-independent rendering
//
// Formatting rules shared by every view, plus `MarkupView`, a ViewPort
// that renders the page state into HTML strings. Stored text is untrusted:
// names and descriptions always go through `escape_html` before they are
// placed into markup.

use std::cell::RefCell;
use std::time::Duration;

use rust_decimal::Decimal;

use crate::web_app::client::ViewPort;
use crate::web_app::model::{FormMode, Product, ProductForm, CURRENCY_SUFFIX, LOW_STOCK_THRESHOLD};

pub const EMPTY_STATE_TITLE: &str = "No products";
pub const EMPTY_STATE_HINT: &str = "Start by adding your first product!";

/// Escape the characters that could open markup or break an attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Two decimals followed by the currency suffix, e.g. `9.50 €`
pub fn format_price(price: Decimal) -> String {
    format!("{:.2} {}", price, CURRENCY_SUFFIX)
}

pub fn stock_label(stock: i64) -> String {
    format!("Stock: {}", stock)
}

pub fn is_low_stock(stock: i64) -> bool {
    stock < LOW_STOCK_THRESHOLD
}

pub fn stock_class(stock: i64) -> &'static str {
    if is_low_stock(stock) {
        "product-stock low-stock"
    } else {
        "product-stock"
    }
}

/// "1 product" / "N products"
pub fn product_count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    }
}

pub fn product_card_markup(product: &Product) -> String {
    format!(
        concat!(
            "<div class=\"product-card\" data-product-id=\"{id}\">",
            "<h3>{name}</h3>",
            "<p>{description}</p>",
            "<div class=\"product-info\">",
            "<span class=\"product-price\">{price}</span>",
            "<span class=\"{stock_class}\">{stock}</span>",
            "</div>",
            "<div class=\"product-actions\">",
            "<button class=\"btn btn-edit\" data-action=\"edit\">Edit</button>",
            "<button class=\"btn btn-delete\" data-action=\"delete\">Delete</button>",
            "</div>",
            "</div>"
        ),
        id = product.id,
        name = escape_html(&product.name),
        description = escape_html(&product.description),
        price = format_price(product.price),
        stock_class = stock_class(product.stock),
        stock = stock_label(product.stock),
    )
}

pub fn empty_state_markup() -> String {
    format!(
        "<div class=\"empty-state\"><h3>{}</h3><p>{}</p></div>",
        EMPTY_STATE_TITLE, EMPTY_STATE_HINT
    )
}

/// Markup for the whole collection, or the empty state
pub fn product_list_markup(products: &[Product]) -> String {
    if products.is_empty() {
        return empty_state_markup();
    }
    products.iter().map(product_card_markup).collect()
}

#[derive(Clone, Debug, Default)]
struct MarkupState {
    list_html: String,
    list_renders: usize,
    loading: bool,
    loading_history: Vec<bool>,
    error: Option<String>,
    dismiss_delays: Vec<Duration>,
    mode: FormMode,
    form: ProductForm,
    reveals: usize,
}

/// ViewPort that keeps the rendered page as strings
///
/// Form values are set with [`MarkupView::fill_form`], standing in for a
/// user typing into the fields.
#[derive(Debug, Default)]
pub struct MarkupView {
    state: RefCell<MarkupState>,
}

impl MarkupView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_form(&self, form: ProductForm) {
        self.state.borrow_mut().form = form;
    }

    pub fn list_html(&self) -> String {
        self.state.borrow().list_html.clone()
    }

    /// Number of product cards currently rendered
    pub fn card_count(&self) -> usize {
        self.state
            .borrow()
            .list_html
            .matches("class=\"product-card\"")
            .count()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.state.borrow().list_html.contains("class=\"empty-state\"")
    }

    /// How many times the list has been re-rendered
    pub fn list_renders(&self) -> usize {
        self.state.borrow().list_renders
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn loading_history(&self) -> Vec<bool> {
        self.state.borrow().loading_history.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn dismiss_delays(&self) -> Vec<Duration> {
        self.state.borrow().dismiss_delays.clone()
    }

    pub fn mode(&self) -> FormMode {
        self.state.borrow().mode
    }

    pub fn form(&self) -> ProductForm {
        self.state.borrow().form.clone()
    }

    pub fn reveals(&self) -> usize {
        self.state.borrow().reveals
    }
}

impl ViewPort for MarkupView {
    fn set_loading(&self, loading: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = loading;
        state.loading_history.push(loading);
    }

    fn render_list(&self, products: &[Product]) {
        let mut state = self.state.borrow_mut();
        state.list_html = product_list_markup(products);
        state.list_renders += 1;
    }

    fn render_error(&self, message: Option<&str>) {
        self.state.borrow_mut().error = message.map(str::to_string);
    }

    fn dismiss_error_after(&self, delay: Duration) {
        self.state.borrow_mut().dismiss_delays.push(delay);
    }

    fn set_form_chrome(&self, mode: FormMode) {
        self.state.borrow_mut().mode = mode;
    }

    fn read_form_values(&self) -> ProductForm {
        self.state.borrow().form.clone()
    }

    fn write_form_values(&self, form: &ProductForm) {
        self.state.borrow_mut().form = form.clone();
    }

    fn reveal_form(&self) {
        self.state.borrow_mut().reveals += 1;
    }
}

// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are the wire types of the product API plus the small
// pieces of form state the client keeps between renders.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock strictly below this value is flagged as low on product cards
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// How long an error banner stays visible before it is hidden again
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Suffix appended to every displayed price
pub const CURRENCY_SUFFIX: &str = "€";

/// Product as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i64,
}

/// Body of a create or update request
///
/// Numeric fields that could not be parsed are sent as `null` and left to
/// the backend to reject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

/// Raw values of the product form, exactly as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    /// Hidden field holding the id of the product being edited
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    /// Fill every field from a fetched product
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.normalize().to_string(),
            stock: product.stock.to_string(),
        }
    }

    /// Coerce the raw values into a request body
    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price.trim().parse().ok(),
            stock: parse_leading_integer(&self.stock),
        }
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        [&self.id, &self.name, &self.description, &self.price, &self.stock]
            .iter()
            .all(|field| field.is_empty())
    }
}

/// Integer prefix of `raw` after trimming, e.g. `"3.0"` gives 3
///
/// A number input with `step=1` still accepts `3.0`; the fraction is
/// dropped rather than turning the whole value into `null`.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |end| sign_len + end);
    if digits_end == sign_len {
        return None;
    }
    trimmed[..digits_end].parse().ok()
}

/// Which product, if any, the form is currently editing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Creating,
    Editing(i64),
}

impl EditState {
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            EditState::Creating => None,
            EditState::Editing(id) => Some(*id),
        }
    }

    pub fn mode(&self) -> FormMode {
        match self {
            EditState::Creating => FormMode::Create,
            EditState::Editing(_) => FormMode::Edit,
        }
    }
}

/// Form chrome: title, submit label and cancel visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add a product",
            FormMode::Edit => "Edit product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add product",
            FormMode::Edit => "Save changes",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        matches!(self, FormMode::Edit)
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormMode::Create => write!(f, "create"),
            FormMode::Edit => write!(f, "edit"),
        }
    }
}

/// Answer of the backend health endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ApiHealth {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

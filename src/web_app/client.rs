// web_app/client.rs - ProductClient: the request/response core of the page
//
// Every user action is one backend round trip followed by a re-render.
// The client never touches a UI toolkit directly: it drives a `ViewPort`
// and asks a `Confirm` capability before deleting. The "currently editing"
// pointer is an `EditState` value passed into and returned from each
// handler instead of living inside the client.

use std::cell::Cell;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::web_app::api::{ApiError, ProductApi};
use crate::web_app::model::{
    EditState, FormMode, Product, ProductForm, ProductPayload, ERROR_DISMISS_DELAY,
};

/// Question asked before a product is deleted
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// Presentation surface the client reads from and writes to
///
/// Implementations own layout and styling; methods take `&self` because UI
/// handles (signals, cells) are shared and mutate internally.
pub trait ViewPort {
    /// Show or hide the loading indicator
    fn set_loading(&self, loading: bool);

    /// Replace the displayed collection; an empty slice shows the empty state
    fn render_list(&self, products: &[Product]);

    /// Show a banner with `message`, or hide it with `None`
    fn render_error(&self, message: Option<&str>);

    /// Hide the banner once `delay` has elapsed
    fn dismiss_error_after(&self, delay: Duration);

    /// Title, submit label and cancel visibility of the form
    fn set_form_chrome(&self, mode: FormMode);

    fn read_form_values(&self) -> ProductForm;

    fn write_form_values(&self, form: &ProductForm);

    /// Bring the form into the user's view
    fn reveal_form(&self);
}

/// Yes/no prompt shown before destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Operation-level failure
///
/// `Display` is the fixed message shown to the user; the backend error is
/// kept as the source and only ever logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Unable to load products. Check that the API is running.")]
    Load(#[source] ApiError),

    #[error("Failed to create the product.")]
    Create(#[source] ApiError),

    #[error("Failed to update the product.")]
    Update(#[source] ApiError),

    #[error("Product not found.")]
    FetchForEdit(#[source] ApiError),

    #[error("Failed to delete the product.")]
    Delete(#[source] ApiError),
}

impl ClientError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            ClientError::Load(e)
            | ClientError::Create(e)
            | ClientError::Update(e)
            | ClientError::FetchForEdit(e)
            | ClientError::Delete(e) => e,
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            ClientError::Load(_) => "load",
            ClientError::Create(_) => "create",
            ClientError::Update(_) => "update",
            ClientError::FetchForEdit(_) => "fetch_for_edit",
            ClientError::Delete(_) => "delete",
        }
    }
}

/// Result of a delete request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no; nothing was sent
    Declined,
    Deleted,
    Failed,
}

/// Shows the loading indicator for as long as it is alive
struct LoadingGuard<'a, V: ViewPort> {
    view: &'a V,
}

impl<'a, V: ViewPort> LoadingGuard<'a, V> {
    fn acquire(view: &'a V) -> Self {
        view.set_loading(true);
        Self { view }
    }
}

impl<V: ViewPort> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
    }
}

pub struct ProductClient<A, V, C> {
    api: A,
    view: V,
    confirm: C,
    /// Generation of the most recent list load; older responses are dropped
    load_generation: Cell<u64>,
}

impl<A, V, C> ProductClient<A, V, C>
where
    A: ProductApi,
    V: ViewPort,
    C: Confirm,
{
    pub fn new(api: A, view: V, confirm: C) -> Self {
        Self {
            api,
            view,
            confirm,
            load_generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch the whole collection and render it
    ///
    /// Returns `true` when the response was rendered. A response that
    /// arrives after a newer load has started is discarded.
    #[instrument(skip(self))]
    pub async fn load_products(&self) -> bool {
        let generation = self.load_generation.get() + 1;
        self.load_generation.set(generation);

        let _loading = LoadingGuard::acquire(&self.view);
        self.view.render_error(None);

        let result = self.api.list_products().await;

        if generation != self.load_generation.get() {
            debug!(
                generation,
                current = self.load_generation.get(),
                "Discarding stale product list response"
            );
            return false;
        }

        match result {
            Ok(products) => {
                debug!("Rendering {} products", products.len());
                self.view.render_list(&products);
                true
            }
            Err(e) => {
                self.report(ClientError::Load(e));
                false
            }
        }
    }

    /// Create or update from the current form values
    ///
    /// On success the form is reset and the list reloaded; on failure the
    /// form is left as typed and `state` is returned unchanged.
    #[instrument(skip(self))]
    pub async fn submit_form(&self, state: EditState) -> EditState {
        let payload = self.view.read_form_values().to_payload();

        let result = match state {
            EditState::Creating => self.create_product(&payload).await,
            EditState::Editing(id) => self.update_product(id, &payload).await,
        };

        match result {
            Ok(product) => {
                info!(id = product.id, mode = %state.mode(), "Product saved");
                let next = self.reset_form();
                self.load_products().await;
                next
            }
            Err(e) => {
                self.report(e);
                state
            }
        }
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ClientError> {
        self.api
            .create_product(payload)
            .await
            .map_err(ClientError::Create)
    }

    pub async fn update_product(
        &self,
        id: i64,
        payload: &ProductPayload,
    ) -> Result<Product, ClientError> {
        self.api
            .update_product(id, payload)
            .await
            .map_err(ClientError::Update)
    }

    /// Load one product into the form and switch to edit mode
    #[instrument(skip(self))]
    pub async fn start_edit(&self, state: EditState, id: i64) -> EditState {
        match self.api.get_product(id).await {
            Ok(product) => {
                self.view.write_form_values(&ProductForm::from_product(&product));
                self.view.set_form_chrome(FormMode::Edit);
                self.view.reveal_form();
                EditState::Editing(id)
            }
            Err(e) => {
                self.report(ClientError::FetchForEdit(e));
                state
            }
        }
    }

    /// Delete after an explicit confirmation, then reload
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> DeleteOutcome {
        if !self.confirm.confirm(DELETE_CONFIRMATION) {
            debug!(id, "Delete declined");
            return DeleteOutcome::Declined;
        }

        match self.api.delete_product(id).await {
            Ok(()) => {
                info!(id, "Product deleted");
                self.load_products().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.report(ClientError::Delete(e));
                DeleteOutcome::Failed
            }
        }
    }

    /// Clear the form and go back to create mode
    pub fn reset_form(&self) -> EditState {
        self.view.write_form_values(&ProductForm::default());
        self.view.set_form_chrome(FormMode::Create);
        EditState::Creating
    }

    fn report(&self, err: ClientError) {
        error!(
            operation = err.operation(),
            error = %err.api_error(),
            "{}", err
        );
        self.view.render_error(Some(&err.to_string()));
        self.view.dismiss_error_after(ERROR_DISMISS_DELAY);
    }
}

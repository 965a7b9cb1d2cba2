// tests/client_tests.rs - ProductClient behaviour against an in-memory backend
//
// Drives the client through MarkupView and FakeApi and checks what reached
// the backend and what ended up on screen.

mod common;

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::oneshot;

use common::{catalogue, typed_form, widget, Call, FakeApi, Op};
use product_manager::web_app::api::{ApiError, ProductApi};
use product_manager::web_app::client::{
    DeleteOutcome, ProductClient, ViewPort, DELETE_CONFIRMATION,
};
use product_manager::web_app::model::{
    ApiHealth, EditState, FormMode, Product, ProductForm, ProductPayload, ERROR_DISMISS_DELAY,
};
use product_manager::web_app::render::MarkupView;

fn always(answer: bool) -> impl Fn(&str) -> bool {
    move |_: &str| answer
}

fn client_with(
    products: Vec<Product>,
) -> ProductClient<FakeApi, MarkupView, impl Fn(&str) -> bool> {
    ProductClient::new(FakeApi::with_products(products), MarkupView::new(), always(true))
}

// ===== loadProducts =====

#[tokio::test]
async fn test_load_renders_one_card_per_product() {
    let client = client_with(catalogue());

    assert!(client.load_products().await);

    assert_eq!(client.view().card_count(), 3);
    assert!(!client.view().shows_empty_state());
    assert_eq!(client.api().calls(), vec![Call::List]);
}

#[tokio::test]
async fn test_load_empty_collection_shows_empty_state() {
    let client = client_with(vec![]);

    assert!(client.load_products().await);

    assert_eq!(client.view().card_count(), 0);
    assert!(client.view().shows_empty_state());
}

#[tokio::test]
async fn test_load_clears_loading_indicator_on_success_and_failure() {
    let client = client_with(catalogue());
    client.load_products().await;
    assert_eq!(client.view().loading_history(), vec![true, false]);
    assert!(!client.view().is_loading());

    client.api().fail(Op::List, 500);
    client.load_products().await;
    assert_eq!(client.view().loading_history(), vec![true, false, true, false]);
    assert!(!client.view().is_loading());
}

#[tokio::test]
async fn test_load_failure_keeps_last_good_list() {
    let client = client_with(catalogue());
    client.load_products().await;

    client.api().fail(Op::List, 503);
    assert!(!client.load_products().await);

    assert_eq!(client.view().card_count(), 3);
    assert_eq!(client.view().list_renders(), 1);
    assert_eq!(
        client.view().error().as_deref(),
        Some("Unable to load products. Check that the API is running.")
    );
    assert_eq!(client.view().dismiss_delays(), vec![ERROR_DISMISS_DELAY]);
}

#[tokio::test]
async fn test_load_hides_previous_banner() {
    let client = client_with(catalogue());
    client.api().fail(Op::List, 500);
    client.load_products().await;
    assert!(client.view().error().is_some());

    client.api().recover(Op::List);
    client.load_products().await;
    assert_eq!(client.view().error(), None);
}

#[tokio::test]
async fn test_banner_never_shows_technical_detail() {
    let client = client_with(catalogue());
    client.api().fail(Op::List, 502);
    client.load_products().await;

    let message = client.view().error().unwrap();
    assert!(!message.contains("502"));
    assert!(!message.contains("http://"));
}

// ===== submitForm =====

#[tokio::test]
async fn test_submit_in_create_mode_issues_create_only() {
    let client = client_with(vec![]);
    client
        .view()
        .fill_form(typed_form("  Lamp ", " Desk lamp ", "19.90", "4"));

    let state = client.submit_form(EditState::Creating).await;

    assert_eq!(state, EditState::Creating);
    let calls = client.api().calls();
    assert_eq!(
        calls[0],
        Call::Create(ProductPayload {
            name: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: Some(Decimal::new(1990, 2)),
            stock: Some(4),
        })
    );
    assert_eq!(client.api().count(|c| matches!(c, Call::Update(..))), 0);
    // Success resets the form and reloads
    assert_eq!(calls[1], Call::List);
    assert!(client.view().form().is_blank());
    assert_eq!(client.view().card_count(), 1);
}

#[tokio::test]
async fn test_submit_in_edit_mode_issues_update_for_that_id() {
    let client = client_with(catalogue());
    client
        .view()
        .fill_form(typed_form("Gaming mouse", "Wireless", "39.00", "40"));

    let state = client.submit_form(EditState::Editing(1)).await;

    assert_eq!(state, EditState::Creating);
    assert_eq!(client.api().count(|c| matches!(c, Call::Create(_))), 0);
    assert_eq!(client.api().count(|c| matches!(c, Call::Update(1, _))), 1);
    assert_eq!(client.view().mode(), FormMode::Create);
    assert!(client.api().products().iter().any(|p| p.name == "Gaming mouse"));
}

#[tokio::test]
async fn test_submit_edit_of_product_zero_is_an_update() {
    let client = client_with(catalogue());
    client.view().fill_form(typed_form("Keyboard", "", "99", "1"));

    client.submit_form(EditState::Editing(0)).await;

    assert_eq!(client.api().count(|c| matches!(c, Call::Update(0, _))), 1);
    assert_eq!(client.api().count(|c| matches!(c, Call::Create(_))), 0);
}

#[tokio::test]
async fn test_submit_forwards_unparsed_numbers_as_missing() {
    let client = client_with(vec![]);
    client.view().fill_form(typed_form("Lamp", "", "cheap", "a few"));

    client.submit_form(EditState::Creating).await;

    match &client.api().calls()[0] {
        Call::Create(payload) => {
            assert_eq!(payload.price, None);
            assert_eq!(payload.stock, None);
        }
        other => panic!("expected a create, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_failure_keeps_form_and_state() {
    let client = client_with(vec![]);
    client.api().fail(Op::Create, 500);
    let typed = typed_form("Lamp", "Desk lamp", "19.90", "4");
    client.view().fill_form(typed.clone());

    let state = client.submit_form(EditState::Creating).await;

    assert_eq!(state, EditState::Creating);
    assert_eq!(
        client.view().error().as_deref(),
        Some("Failed to create the product.")
    );
    assert_eq!(client.view().form(), typed);
    // No reload after a failed submit
    assert_eq!(client.api().count(|c| matches!(c, Call::List)), 0);
}

#[tokio::test]
async fn test_update_failure_keeps_edit_state() {
    let client = client_with(catalogue());
    client.api().fail(Op::Update, 422);
    client.view().fill_form(typed_form("Mouse", "", "x", "1"));

    let state = client.submit_form(EditState::Editing(1)).await;

    assert_eq!(state, EditState::Editing(1));
    assert_eq!(
        client.view().error().as_deref(),
        Some("Failed to update the product.")
    );
    assert_eq!(client.view().form().name, "Mouse");
}

#[tokio::test]
async fn test_create_and_update_return_backend_representation() {
    let client = client_with(vec![]);
    let payload = typed_form("Lamp", "Desk lamp", "19.90", "4").to_payload();

    let created = client.create_product(&payload).await.unwrap();
    assert_eq!(created.id, 0);
    assert_eq!(created.name, "Lamp");

    let updated = client
        .update_product(created.id, &ProductPayload { stock: Some(9), ..payload })
        .await
        .unwrap();
    assert_eq!(updated.stock, 9);

    let err = client.update_product(77, &updated_payload()).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to update the product.");
    assert_eq!(err.api_error().status(), Some(404));
}

fn updated_payload() -> ProductPayload {
    ProductPayload {
        name: "Ghost".to_string(),
        description: String::new(),
        price: Some(Decimal::ONE),
        stock: Some(1),
    }
}

// ===== startEdit / resetForm =====

#[tokio::test]
async fn test_start_edit_populates_form_and_chrome() {
    let client = client_with(vec![widget()]);

    let state = client.start_edit(EditState::Creating, 1).await;

    assert_eq!(state, EditState::Editing(1));
    assert_eq!(state.editing_id(), Some(1));
    assert_eq!(
        client.view().form(),
        ProductForm {
            id: "1".to_string(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: "9.5".to_string(),
            stock: "3".to_string(),
        }
    );
    assert_eq!(client.view().mode(), FormMode::Edit);
    assert!(client.view().mode().shows_cancel());
    assert_eq!(client.view().reveals(), 1);
    assert_eq!(client.api().calls(), vec![Call::Get(1)]);
}

#[tokio::test]
async fn test_start_edit_unknown_product_leaves_state_unchanged() {
    let client = client_with(vec![widget()]);

    let state = client.start_edit(EditState::Creating, 99).await;

    assert_eq!(state, EditState::Creating);
    assert_eq!(client.view().error().as_deref(), Some("Product not found."));
    assert_eq!(client.view().mode(), FormMode::Create);
    assert!(client.view().form().is_blank());
    assert_eq!(client.view().reveals(), 0);
}

#[tokio::test]
async fn test_start_edit_transport_failure_keeps_current_edit() {
    let client = client_with(catalogue());
    client.api().fail(Op::Get, 500);

    let state = client.start_edit(EditState::Editing(2), 0).await;

    assert_eq!(state, EditState::Editing(2));
    assert_eq!(client.view().error().as_deref(), Some("Product not found."));
}

#[tokio::test]
async fn test_reset_after_edit_clears_everything() {
    let client = client_with(vec![widget()]);
    let state = client.start_edit(EditState::Creating, 1).await;
    assert_eq!(state.mode(), FormMode::Edit);

    let state = client.reset_form();

    assert_eq!(state, EditState::Creating);
    assert_eq!(state.editing_id(), None);
    assert!(client.view().form().is_blank());
    assert_eq!(client.view().mode(), FormMode::Create);
    assert!(!client.view().mode().shows_cancel());
}

// ===== deleteProduct =====

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let asked = Rc::new(RefCell::new(Vec::<String>::new()));
    let prompt = {
        let asked = Rc::clone(&asked);
        move |message: &str| {
            asked.borrow_mut().push(message.to_string());
            false
        }
    };
    let client = ProductClient::new(FakeApi::with_products(catalogue()), MarkupView::new(), prompt);
    client.load_products().await;
    client.api().clear_calls();
    let before = client.view().list_html();

    let outcome = client.delete_product(1).await;

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(client.api().calls().is_empty());
    assert_eq!(client.view().list_html(), before);
    assert_eq!(*asked.borrow(), vec![DELETE_CONFIRMATION.to_string()]);
}

#[tokio::test]
async fn test_confirmed_delete_reloads_exactly_once() {
    let client = client_with(catalogue());

    let outcome = client.delete_product(1).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(client.api().calls(), vec![Call::Delete(1), Call::List]);
    assert_eq!(client.view().card_count(), 2);
}

#[tokio::test]
async fn test_failed_delete_shows_banner_without_reload() {
    let client = client_with(catalogue());
    client.load_products().await;
    client.api().fail(Op::Delete, 500);
    client.api().clear_calls();

    let outcome = client.delete_product(1).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(client.api().calls(), vec![Call::Delete(1)]);
    assert_eq!(
        client.view().error().as_deref(),
        Some("Failed to delete the product.")
    );
    assert_eq!(client.view().card_count(), 3);
}

#[tokio::test]
async fn test_confirm_is_asked_once_per_delete() {
    let asked = Rc::new(Cell::new(0));
    let prompt = {
        let asked = Rc::clone(&asked);
        move |_: &str| {
            asked.set(asked.get() + 1);
            true
        }
    };
    let client = ProductClient::new(FakeApi::with_products(catalogue()), MarkupView::new(), prompt);

    client.delete_product(0).await;
    client.delete_product(2).await;

    assert_eq!(asked.get(), 2);
    assert_eq!(client.view().card_count(), 1);
}

// ===== Overlapping loads =====

/// Backend whose list responses are released by the test
struct GatedApi {
    pending: RefCell<VecDeque<oneshot::Receiver<Vec<Product>>>>,
}

#[async_trait(?Send)]
impl ProductApi for GatedApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let receiver = self.pending.borrow_mut().pop_front();
        match receiver {
            Some(rx) => rx.await.map_err(|e| ApiError::Transport {
                method: "GET",
                url: "http://gated/products".to_string(),
                message: e.to_string(),
            }),
            None => Ok(vec![]),
        }
    }

    async fn get_product(&self, _id: i64) -> Result<Product, ApiError> {
        unreachable!()
    }

    async fn create_product(&self, _payload: &ProductPayload) -> Result<Product, ApiError> {
        unreachable!()
    }

    async fn update_product(&self, _id: i64, _payload: &ProductPayload) -> Result<Product, ApiError> {
        unreachable!()
    }

    async fn delete_product(&self, _id: i64) -> Result<(), ApiError> {
        unreachable!()
    }

    async fn health(&self) -> Result<ApiHealth, ApiError> {
        unreachable!()
    }
}

#[tokio::test]
async fn test_stale_list_response_is_discarded() {
    let (older_tx, older_rx) = oneshot::channel();
    let (newer_tx, newer_rx) = oneshot::channel();
    let api = GatedApi {
        pending: RefCell::new(VecDeque::from([older_rx, newer_rx])),
    };
    let client = ProductClient::new(api, MarkupView::new(), always(true));

    let (first, second, ()) = tokio::join!(client.load_products(), client.load_products(), async {
        // The newer load resolves first, the older one afterwards
        newer_tx.send(catalogue()).unwrap();
        tokio::task::yield_now().await;
        older_tx.send(vec![widget()]).unwrap();
    });

    assert!(!first);
    assert!(second);
    assert_eq!(client.view().list_renders(), 1);
    assert_eq!(client.view().card_count(), 3);
    assert!(!client.view().list_html().contains("Widget"));
    assert!(!client.view().is_loading());
}

#[tokio::test]
async fn test_view_port_is_usable_directly() {
    // The markup view can be driven without a client
    let view = MarkupView::new();
    view.render_list(&[widget()]);
    view.render_error(Some("boom"));
    assert_eq!(view.card_count(), 1);
    assert_eq!(view.error().as_deref(), Some("boom"));
    view.render_error(None);
    assert_eq!(view.error(), None);
}

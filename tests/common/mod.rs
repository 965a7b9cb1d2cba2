// common/mod.rs - Shared test utilities
//
// An in-memory ProductApi that records every call, plus product fixtures.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use product_manager::web_app::api::{ApiError, ProductApi};
use product_manager::web_app::model::{ApiHealth, Product, ProductForm, ProductPayload};

/// One recorded backend call
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Get(i64),
    Create(ProductPayload),
    Update(i64, ProductPayload),
    Delete(i64),
    Health,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Backend double holding products in memory
#[derive(Default)]
pub struct FakeApi {
    products: RefCell<Vec<Product>>,
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Op, u16>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let api = Self::default();
        *api.products.borrow_mut() = products;
        api
    }

    /// Make every call of `op` answer with HTTP `status`
    pub fn fail(&self, op: Op, status: u16) {
        self.failures.borrow_mut().insert(op, status);
    }

    pub fn recover(&self, op: Op) {
        self.failures.borrow_mut().remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| call(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, op: Op, method: &'static str, path: String) -> Result<(), ApiError> {
        match self.failures.borrow().get(&op) {
            Some(status) => Err(ApiError::Status {
                method,
                url: format!("http://fake{}", path),
                status: *status,
            }),
            None => Ok(()),
        }
    }

    fn not_found(method: &'static str, id: i64) -> ApiError {
        ApiError::Status {
            method,
            url: format!("http://fake/products/{}", id),
            status: 404,
        }
    }

    fn materialize(id: i64, payload: &ProductPayload) -> Product {
        Product {
            id,
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price.unwrap_or_default(),
            stock: payload.stock.unwrap_or_default(),
        }
    }
}

#[async_trait(?Send)]
impl ProductApi for FakeApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(Call::List);
        self.check(Op::List, "GET", "/products".to_string())?;
        Ok(self.products())
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.record(Call::Get(id));
        self.check(Op::Get, "GET", format!("/products/{}", id))?;
        self.products
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("GET", id))
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.record(Call::Create(payload.clone()));
        self.check(Op::Create, "POST", "/products".to_string())?;
        let mut products = self.products.borrow_mut();
        let id = products.iter().map(|p| p.id + 1).max().unwrap_or(0);
        let product = Self::materialize(id, payload);
        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Product, ApiError> {
        self.record(Call::Update(id, payload.clone()));
        self.check(Op::Update, "PUT", format!("/products/{}", id))?;
        let mut products = self.products.borrow_mut();
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found("PUT", id))?;
        *slot = Self::materialize(id, payload);
        Ok(slot.clone())
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::Delete(id));
        self.check(Op::Delete, "DELETE", format!("/products/{}", id))?;
        let mut products = self.products.borrow_mut();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(Self::not_found("DELETE", id));
        }
        Ok(())
    }

    async fn health(&self) -> Result<ApiHealth, ApiError> {
        self.record(Call::Health);
        Ok(ApiHealth {
            status: "ok".to_string(),
            message: "fake".to_string(),
        })
    }
}

pub fn product(id: i64, name: &str, price_cents: i64, stock: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::new(price_cents, 2),
        stock,
    }
}

pub fn widget() -> Product {
    Product {
        id: 1,
        name: "Widget".to_string(),
        description: "A widget".to_string(),
        price: Decimal::new(95, 1),
        stock: 3,
    }
}

pub fn catalogue() -> Vec<Product> {
    vec![
        product(0, "Mechanical keyboard", 14999, 8),
        product(1, "Mouse", 2990, 42),
        product(2, "Monitor", 21900, 12),
    ]
}

pub fn typed_form(name: &str, description: &str, price: &str, stock: &str) -> ProductForm {
    ProductForm {
        id: String::new(),
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
    }
}

// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Loading, ErrorBanner, inputs)
// - product.rs: Product display components (ProductCard, ProductList)
// - form.rs: The create/edit product form

pub mod common;
pub mod form;
pub mod product;

// Re-export commonly used components for convenience
pub use common::*;
pub use form::*;
pub use product::*;

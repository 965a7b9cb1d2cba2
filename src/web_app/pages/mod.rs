// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - ProductsPage: Product catalogue with create/edit form

pub mod products;

// Re-export page components
pub use products::ProductsPage;

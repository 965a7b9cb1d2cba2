// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types (product, form values, edit state)
// - config.rs: Backend location
// - api/: ProductApi trait and its reqwest implementation
// - client.rs: ProductClient, the toolkit-independent request/response core
// - render.rs: Escaping, formatting and the markup ViewPort
// - view.rs: Signal-backed ViewPort (both SSR and hydrate)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod client;
pub mod config;
pub mod model;
pub mod render;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod view;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;

// web_app/mod.rs - Root module for the HoloHut catalog
//
// Architecture:
// - error.rs: Typed errors for loading the dataset
// - model/: Products, tag dimensions, sort options, the bundled catalog
// - query/: Filter -> sort -> paginate pipeline (pure, no Leptos)
// - state/: View state, query-string codec and the controller
// - routing.rs: Address bar backed by the Leptos router (SSR and hydrate)
// - components/, pages/, app.rs: Leptos UI (SSR and hydrate)
// - server.rs: Logging and startup helpers for the binary (SSR only)

pub mod error;
pub mod model;
pub mod query;
pub mod state;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod routing;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(feature = "ssr")]
pub mod server;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;

pub use error::CatalogError;

// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: the product catalog with filters, search, sort and pagination

pub mod catalog;

pub use catalog::CatalogPage;

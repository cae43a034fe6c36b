// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Badges, dropdown backdrop, round buttons, error box
// - search.rs: Search bar, filter and sort dropdowns, summary, pagination
// - product.rs: Product cards and the results grid

pub mod common;
pub mod search;
pub mod product;

pub use common::*;
pub use search::*;
pub use product::*;

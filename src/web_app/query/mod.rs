// web_app/query/mod.rs - The filter -> sort -> paginate pipeline
//
// Pure functions of (dataset, view state). Each stage lives in its own
// module and can be exercised on its own; `run` composes them in order.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::filter_products;
pub use paginate::{page_slots, paginate, total_pages, PageSlot, PAGE_SIZE};
pub use sort::{compare_names, sort_products};

use crate::web_app::model::{Product, SortOption};
use crate::web_app::state::ViewState;

/// Derived view of one page of results
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    /// Products on the requested page, in display order
    pub items: Vec<Product>,
    /// Number of products after filtering
    pub total_count: usize,
    /// `max(1, ceil(total_count / PAGE_SIZE))`
    pub total_pages: u32,
    /// The page these items belong to
    pub page: u32,
    /// Pagination bar entries for `page`
    pub slots: Vec<PageSlot>,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Line shown above the grid, e.g. "Showing 12 of 40 results • Sorted by Name: A → Z"
    pub fn summary(&self, state: &ViewState) -> String {
        let noun = if self.total_count == 1 { "result" } else { "results" };
        let mut line = format!("Showing {} of {} {}", self.items.len(), self.total_count, noun);
        if state.active_filter_count() > 0 {
            line.push_str(" with applied filters");
        }
        if state.sort() != SortOption::Default {
            line.push_str(&format!(" • Sorted by {}", state.sort()));
        }
        line
    }
}

/// Runs the pipeline for the state's current page.
///
/// A page beyond the last one yields no items; bringing the page back in
/// range is the caller's job (see `ViewState::correct_page`).
pub fn run(products: &[Product], state: &ViewState) -> CatalogView {
    let mut matched = filter_products(products, state);
    sort_products(&mut matched, state.sort());

    let total_count = matched.len();
    let total_pages = total_pages(total_count);
    let page = state.page();

    CatalogView {
        items: paginate(&matched, page).iter().map(|&p| p.clone()).collect(),
        total_count,
        total_pages,
        page,
        slots: page_slots(page.min(total_pages), total_pages),
    }
}

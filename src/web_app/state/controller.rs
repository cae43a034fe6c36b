// web_app/state/controller.rs - Single entry point for state changes
//
// The controller owns the dataset, the view state and the address-bar sink.
// Every mutation goes through `refresh`, which re-runs the pipeline, clamps
// the page when the result set shrank, and publishes the canonical query.

use crate::web_app::model::Catalog;
use crate::web_app::query::{self, CatalogView};
use super::{ViewState, ViewUpdate};

/// Receives the canonical query string whenever it changes
///
/// Implementations replace the current history entry; they must not push a
/// new one.
pub trait AddressBar {
    /// `query` has no leading `?` and is empty for the default state
    fn replace_query(&mut self, query: &str);
}

pub struct CatalogController<A> {
    catalog: Catalog,
    state: ViewState,
    view: CatalogView,
    address_bar: A,
    published: Option<String>,
}

impl<A: AddressBar> CatalogController<A> {
    /// Derives the initial view without touching the address bar
    pub fn new(catalog: Catalog, state: ViewState, address_bar: A) -> Self {
        let mut controller = CatalogController {
            catalog,
            state,
            view: CatalogView::default(),
            address_bar,
            published: None,
        };
        controller.recompute();
        controller
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn address_bar(&self) -> &A {
        &self.address_bar
    }

    pub fn dispatch(&mut self, update: ViewUpdate) -> &CatalogView {
        self.state.apply(update);
        self.refresh();
        &self.view
    }

    /// Swaps the dataset; the page is corrected against the new result count
    pub fn replace_catalog(&mut self, catalog: Catalog) -> &CatalogView {
        tracing::debug!("Replacing catalog: {} -> {} products", self.catalog.len(), catalog.len());
        self.catalog = catalog;
        self.refresh();
        &self.view
    }

    pub fn refresh(&mut self) {
        self.recompute();
        self.publish();
    }

    /// Writes the canonical query to the address bar if it changed since the last write
    pub fn publish(&mut self) {
        let query = self.state.to_query_string();
        if self.published.as_deref() == Some(query.as_str()) {
            return;
        }
        tracing::debug!("Publishing query '{}'", query);
        self.address_bar.replace_query(&query);
        self.published = Some(query);
    }

    /// Records the query the address bar already shows, so a matching
    /// `publish` writes nothing
    pub fn assume_published(&mut self, query: &str) {
        self.published = Some(query.to_string());
    }

    fn recompute(&mut self) {
        self.view = query::run(self.catalog.products(), &self.state);
        if self.state.correct_page(self.view.total_pages) {
            self.view = query::run(self.catalog.products(), &self.state);
        }
    }
}

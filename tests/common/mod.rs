// common/mod.rs - Shared helpers for the integration tests
//
// Builders for view states and controllers on top of the crate's fixtures,
// plus exhaustive enumeration of filter selections for property checks.

#![allow(dead_code)]

use holohut::fixtures::{CatalogFixture, MemoryAddressBar};
use holohut::web_app::model::{Catalog, Product, TagKind};
use holohut::web_app::state::{CatalogController, TagSelection, ViewState, ViewUpdate};

/// Applies `updates` in order to the default state
pub fn state_with(updates: impl IntoIterator<Item = ViewUpdate>) -> ViewState {
    let mut state = ViewState::default();
    for update in updates {
        state.apply(update);
    }
    state
}

/// Controller over fixture `F` that records address-bar writes
pub fn controller_for<F: CatalogFixture>(state: ViewState) -> CatalogController<MemoryAddressBar> {
    CatalogController::new(F::catalog(), state, MemoryAddressBar::default())
}

/// Controller initialised the way the page does it: from a raw query string
pub fn controller_from_url<F: CatalogFixture>(query: &str) -> CatalogController<MemoryAddressBar> {
    let catalog = F::catalog();
    let state = ViewState::from_query(query, catalog.options());
    CatalogController::new(catalog, state, MemoryAddressBar::default())
}

/// Every subset of `values`, the empty one first
pub fn subsets(values: &[String]) -> Vec<TagSelection> {
    (0..1u32 << values.len())
        .map(|mask| {
            TagSelection::from_values(
                values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, v)| v.clone()),
            )
        })
        .collect()
}

/// Every combination of selections across the three dimensions of `catalog`
pub fn all_filter_states(catalog: &Catalog) -> Vec<ViewState> {
    let options = catalog.options();
    let mut states = Vec::new();
    for languages in subsets(options.values(TagKind::Language)) {
        for types in subsets(options.values(TagKind::Type)) {
            for sellers in subsets(options.values(TagKind::Seller)) {
                states.push(state_with([
                    ViewUpdate::SetSelection(TagKind::Language, languages.clone()),
                    ViewUpdate::SetSelection(TagKind::Type, types.clone()),
                    ViewUpdate::SetSelection(TagKind::Seller, sellers),
                ]));
            }
        }
    }
    states
}

pub fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

pub fn ref_ids(products: &[&Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

// web_app/pages/catalog.rs - Catalog page component
//
// Owns the CatalogController for the lifetime of the page. Components get
// read-only signals of the state and the derived view, and send every
// interaction back through a single dispatch callback.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_query_map};

use crate::web_app::components::*;
use crate::web_app::model::{Catalog, TagKind};
use crate::web_app::routing::use_router_address_bar;
use crate::web_app::state::{CatalogController, ViewState, ViewUpdate};

/// Main catalog page
///
/// - Hero and header with the search bar
/// - Filter bar and result summary
/// - Product grid with empty state
/// - Pagination
#[component]
pub fn CatalogPage() -> impl IntoView {
    let (catalog, load_error) = match Catalog::bundled() {
        Ok(catalog) => (catalog, None),
        Err(e) => (Catalog::default(), Some(e.to_string())),
    };
    let options = catalog.options().clone();

    // The URL is read once; afterwards the controller is the source of truth
    let query = use_query_map();
    let initial = query.with_untracked(|params| ViewState::from_lookup(|key| params.get(key), &options));

    let mut controller = CatalogController::new(catalog, initial, use_router_address_bar());
    let shown = use_location().search.with_untracked(|search| search.trim_start_matches('?').to_string());
    controller.assume_published(&shown);
    let controller = StoredValue::new_local(controller);
    let state = RwSignal::new(controller.with_value(|c| c.state().clone()));
    let catalog_view = RwSignal::new(controller.with_value(|c| c.view().clone()));

    let dispatch = Callback::new(move |update: ViewUpdate| {
        let next = controller.try_update_value(|c| {
            c.dispatch(update);
            (c.state().clone(), c.view().clone())
        });
        if let Some((next_state, next_view)) = next {
            state.set(next_state);
            catalog_view.set(next_view);
        }
    });

    // Rewrite a hand-edited or stale URL into canonical form once mounted;
    // an already canonical URL is left alone
    Effect::new(move |_| {
        controller.update_value(|c| c.publish());
    });

    let on_search = Callback::new(move |text: String| dispatch.run(ViewUpdate::SetSearch(text)));
    let on_clear = Callback::new(move |()| dispatch.run(ViewUpdate::ClearAll));
    let sellers = options.values(TagKind::Seller).to_vec();

    view! {
        <div class="min-h-screen bg-[#fafafa] text-stone-800">
            // Hero
            <div class="relative w-full h-[240px] bg-gradient-to-b from-orange-200 to-[#fafafa]">
                <div class="absolute left-1/2 -translate-x-1/2 -bottom-12">
                    <div class="w-24 h-24 bg-white rounded-full shadow-md flex items-center justify-center">
                        <span class="text-4xl">"🛖"</span>
                    </div>
                </div>
            </div>

            // Header
            <header class="flex flex-col items-center pt-20 pb-8 px-4 md:px-6">
                <h1 class="text-4xl font-light tracking-tight mb-2">"HoloHut"</h1>
                <p class="text-stone-600 text-lg mb-8 text-center max-w-md">
                    "Track Pokémon TCG packs in stock across India"
                </p>

                <div class="w-full max-w-md mb-8">
                    <p class="text-center text-stone-500 mb-4 text-sm">"Sellers Showcased"</p>
                    <div class="flex flex-wrap justify-center gap-3">
                        {sellers.into_iter().map(|seller| view! {
                            <TagBadge kind=TagKind::Seller value=seller size="text-sm px-4 py-1" />
                        }).collect_view()}
                    </div>
                </div>

                <SearchBar
                    search=Signal::derive(move || state.with(|s| s.search().to_string()))
                    on_change=on_search
                />
                <FilterBar options=options state=state dispatch=dispatch />
                <ResultSummary state=state catalog_view=catalog_view />
            </header>

            {load_error.map(|error| view! {
                <div class="px-4 mb-8">
                    <ErrorDisplay error=error />
                </div>
            })}

            <ProductGrid catalog_view=catalog_view on_clear=on_clear />
            <Pagination catalog_view=catalog_view dispatch=dispatch />

            // Footer
            <footer class="text-center p-8 text-stone-400">
                <p class="text-sm">
                    "HoloHut does not sell any products. It only tracks stock from verified Indian Pokémon TCG retailers."
                </p>
            </footer>
        </div>
    }
}

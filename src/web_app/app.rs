// web_app/app.rs - Root application component
//
// Sets up meta tags, the stylesheet and routing. The whole app is a single
// catalog page; its view state lives in the query string.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="HoloHut — Pokémon TCG Stock Tracker" />
        <Meta
            name="description"
            content="Track in-stock Pokémon TCG booster packs from Indian retailers. Updated hourly."
        />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/holohut.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#fafafa] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-light text-stone-300 mb-4">"404"</h1>
                <p class="text-xl text-stone-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-orange-500 text-white rounded-full hover:bg-orange-600 transition-colors"
                >
                    "Back to the catalog"
                </a>
            </div>
        </div>
    }
}

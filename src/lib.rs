// lib.rs - Root module for the holohut library
//
// The catalog core (model, query pipeline, view state) compiles without any
// feature. The Leptos UI is built for the server with `ssr` and for the
// browser with `hydrate`.

/// Sample catalogs and helpers shared by unit and integration tests
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            use crate::web_app::App;

            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(App);
        }
    }
}

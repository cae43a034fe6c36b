// web_app/routing.rs - Address bar backed by the Leptos router
//
// Query updates replace the current history entry and keep the scroll
// position, so filtering never floods the back button.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::web_app::state::AddressBar;

pub struct RouterAddressBar<F> {
    navigate: F,
    pathname: Memo<String>,
}

impl<F> AddressBar for RouterAddressBar<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn replace_query(&mut self, query: &str) {
        let target = self.pathname.with_untracked(|path| location_target(path, query));
        (self.navigate)(
            &target,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    }
}

/// Must be called inside a `<Router>`
pub fn use_router_address_bar() -> RouterAddressBar<impl Fn(&str, NavigateOptions) + Clone> {
    RouterAddressBar {
        navigate: use_navigate(),
        pathname: use_location().pathname,
    }
}

/// `path` alone for an empty query, `path?query` otherwise
pub fn location_target(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

// web_app/components/common.rs - Reusable UI components
//
// Small, stateless pieces shared by the catalog page. They receive all data
// via props.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::{TagKind, TagStyle};

/// Error display component
///
/// Shown above the catalog when the bundled dataset could not be read.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4 max-w-3xl mx-auto">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">"Catalog unavailable"</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Badge component
///
/// A small rounded label; colours come from the caller.
#[component]
pub fn Badge(
    children: Children,
    /// Colour and spacing classes
    #[prop(into, default = String::from("bg-stone-100 text-stone-700"))]
    class: String,
) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center rounded-full px-2.5 py-0.5 font-medium border-none {}", class)>
            {children()}
        </span>
    }
}

/// Badge coloured by tag dimension and value
#[component]
pub fn TagBadge(
    kind: TagKind,
    #[prop(into)]
    value: String,
    /// Extra size classes
    #[prop(default = "text-xs")]
    size: &'static str,
) -> impl IntoView {
    let style = TagStyle::for_tag(kind, &value);
    view! {
        <Badge class=format!("{} {}", style.class(), size)>
            {value}
        </Badge>
    }
}

/// Transparent layer behind an open dropdown; clicking it closes the menu
#[component]
pub fn DropdownBackdrop(
    /// Whether the dropdown is open
    open: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40" on:click=move |_| open.set(false)></div>
        </Show>
    }
}

/// Keydown handler closing a dropdown on Escape
pub fn close_on_escape(open: RwSignal<bool>) -> impl Fn(KeyboardEvent) + Clone + 'static {
    move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    }
}

/// Round outline button used by the pagination bar
#[component]
pub fn RoundButton(
    children: Children,
    on_click: Callback<()>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(into, default = Signal::stored(false))]
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if active.get() {
                    "rounded-full w-10 h-10 flex items-center justify-center bg-orange-500 hover:bg-orange-600 text-white shadow-sm"
                } else {
                    "rounded-full w-10 h-10 flex items-center justify-center border border-stone-200 bg-white \
                     text-stone-600 hover:bg-stone-100 disabled:opacity-50 disabled:cursor-not-allowed"
                }
            }
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

// web_app/components/search.rs - Search, filter, sort and pagination controls
//
// These components never own view state. They render from signals handed
// down by the catalog page and report interactions as ViewUpdates.

use leptos::prelude::*;

use crate::web_app::model::{FilterOptions, SortOption, TagKind};
use crate::web_app::query::{CatalogView, PageSlot};
use crate::web_app::state::{TagSelection, ViewState, ViewUpdate};
use super::common::{close_on_escape, Badge, DropdownBackdrop, RoundButton};

/// Search input with a clear button
///
/// Every keystroke is reported; the page resets to 1 on each change.
#[component]
pub fn SearchBar(
    /// Current search text
    #[prop(into)]
    search: Signal<String>,
    /// Called with the new text
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative w-full max-w-2xl mb-10">
            <span class="absolute left-4 top-1/2 -translate-y-1/2 text-stone-400 pointer-events-none">"🔍"</span>
            <input
                type="text"
                placeholder="Search for packs, boxes, or shops..."
                class="w-full pl-12 pr-10 py-4 rounded-full border border-stone-200 bg-white shadow-lg \
                       outline-none focus:ring-2 focus:ring-orange-400"
                prop:value=move || search.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || search.with(|s| !s.is_empty())>
                <button
                    type="button"
                    title="Clear search"
                    class="absolute right-4 top-1/2 -translate-y-1/2 text-stone-400 hover:text-stone-600"
                    on:click=move |_| on_change.run(String::new())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}

/// Background of the i-th selected option: the orange fades down the list
fn option_shade(index: usize, count: usize) -> String {
    let alpha = 0.9 - (index as f64 / count.max(1) as f64) * 0.4;
    format!("background-color: rgba(249,115,22,{alpha:.3})")
}

/// Multi-select dropdown for one tag dimension
#[component]
pub fn FilterDropdown(
    kind: TagKind,
    /// Values offered, already sorted
    options: Vec<String>,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<TagSelection>,
    /// Called with the clicked value
    on_toggle: Callback<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let count = move || selected.with(TagSelection::len);
    let option_count = options.len();

    view! {
        <div class="relative" on:keydown=close_on_escape(open)>
            <DropdownBackdrop open=open />
            <button
                type="button"
                class="relative z-50 inline-flex items-center rounded-full bg-white px-4 py-2 text-sm \
                       shadow-sm hover:shadow-md border border-stone-200"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="mr-1">{kind.label()}</span>
                <Show when=move || { count() > 0 }>
                    <Badge class="ml-1 bg-orange-100 text-orange-700 text-xs">{count}</Badge>
                </Show>
                <span class="ml-1 text-stone-400">"▾"</span>
            </button>

            <Show when=move || open.get()>
                <div class="absolute z-50 mt-2 w-56 rounded-md bg-white shadow-lg ring-1 ring-black/10">
                    <div class="p-2">
                        <p class="px-2 py-1.5 text-sm font-semibold">"Select " {kind.label()} "s"</p>
                        <div class="h-px bg-stone-200 my-1"></div>
                        <div class="max-h-60 overflow-auto py-1">
                            {options.iter().enumerate().map(|(index, option)| {
                                let value = option.clone();
                                let is_active = {
                                    let option = option.clone();
                                    move || selected.with(|s| s.contains(&option))
                                };
                                let shade_active = is_active.clone();
                                view! {
                                    <div
                                        class=move || {
                                            if is_active() {
                                                "px-4 py-2 text-sm rounded-md cursor-pointer text-white"
                                            } else {
                                                "px-4 py-2 text-sm rounded-md cursor-pointer text-stone-700 hover:bg-stone-100"
                                            }
                                        }
                                        style=move || shade_active().then(|| option_shade(index, option_count))
                                        on:click=move |_| on_toggle.run(value.clone())
                                    >
                                        {option.clone()}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Sort selector
#[component]
pub fn SortDropdown(
    /// Current sort option
    #[prop(into)]
    sort: Signal<SortOption>,
    /// Called with the chosen option
    on_change: Callback<SortOption>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="relative" on:keydown=close_on_escape(open)>
            <DropdownBackdrop open=open />
            <button
                type="button"
                class="relative z-50 inline-flex items-center rounded-full bg-white px-4 py-2 text-sm \
                       text-stone-600 shadow-sm hover:shadow-md border border-stone-200"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="mr-2 text-stone-400">"⇅"</span>
                "Sort: " {move || sort.get().to_string()}
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 z-50 mt-2 w-56 rounded-md bg-white shadow-lg ring-1 ring-black/10">
                    <div class="p-2">
                        <p class="px-2 py-1.5 text-sm font-semibold">"Sort By"</p>
                        <div class="h-px bg-stone-200 my-1"></div>
                        {SortOption::ALL.into_iter().map(|option| {
                            let is_active = move || sort.get() == option;
                            view! {
                                <div
                                    class=move || {
                                        if is_active() {
                                            "px-4 py-2 text-sm rounded-md cursor-pointer text-white"
                                        } else {
                                            "px-4 py-2 text-sm rounded-md cursor-pointer text-stone-700 hover:bg-stone-100"
                                        }
                                    }
                                    style=move || is_active().then_some("background-color: rgba(249,115,22,0.9)")
                                    on:click=move |_| {
                                        on_change.run(option);
                                        open.set(false);
                                    }
                                >
                                    {option.to_string()}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Row of filter dropdowns, the clear button and the sort selector
#[component]
pub fn FilterBar(
    /// Values offered per dimension
    options: FilterOptions,
    #[prop(into)]
    state: Signal<ViewState>,
    dispatch: Callback<ViewUpdate>,
) -> impl IntoView {
    let active = move || state.with(ViewState::active_filter_count);

    view! {
        <div class="w-full max-w-7xl mb-8">
            <div class="flex flex-wrap justify-between items-center gap-4">
                <div class="flex flex-wrap gap-3 items-center">
                    <div class="flex items-center gap-2 mr-1 text-stone-500">
                        <span>"⚲"</span>
                        <span class="text-sm hidden sm:inline">"Filters:"</span>
                    </div>

                    {TagKind::ALL.into_iter().map(|kind| {
                        view! {
                            <FilterDropdown
                                kind=kind
                                options=options.values(kind).to_vec()
                                selected=Signal::derive(move || state.with(|s| s.selection(kind).clone()))
                                on_toggle=Callback::new(move |value: String| {
                                    dispatch.run(ViewUpdate::Toggle(kind, value))
                                })
                            />
                        }
                    }).collect_view()}

                    <Show when=move || { active() > 0 }>
                        <button
                            type="button"
                            class="rounded-full px-3 py-2 text-sm text-stone-500 hover:bg-stone-100"
                            on:click=move |_| dispatch.run(ViewUpdate::ClearAll)
                        >
                            "✕ Clear " {active}
                        </button>
                    </Show>
                </div>

                <SortDropdown
                    sort=Signal::derive(move || state.with(ViewState::sort))
                    on_change=Callback::new(move |sort: SortOption| dispatch.run(ViewUpdate::SetSort(sort)))
                />
            </div>
        </div>
    }
}

/// "Showing 12 of 40 results" line under the controls
#[component]
pub fn ResultSummary(
    #[prop(into)]
    state: Signal<ViewState>,
    #[prop(into)]
    catalog_view: Signal<CatalogView>,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-7xl px-4 mb-4">
            <p class="text-sm text-stone-500">
                {move || state.with(|s| catalog_view.with(|v| v.summary(s)))}
            </p>
        </div>
    }
}

/// Pagination bar
///
/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)]
    catalog_view: Signal<CatalogView>,
    dispatch: Callback<ViewUpdate>,
) -> impl IntoView {
    let current = move || catalog_view.with(|v| v.page);

    view! {
        <Show when=move || catalog_view.with(|v| v.total_pages > 1)>
            <nav class="flex justify-center mt-12 mb-8" aria-label="Pagination">
                <div class="flex gap-2 items-center">
                    <RoundButton
                        on_click=Callback::new(move |()| dispatch.run(ViewUpdate::PreviousPage))
                        disabled=Signal::derive(move || !catalog_view.with(CatalogView::has_previous))
                    >
                        "‹"
                    </RoundButton>

                    {move || {
                        catalog_view.with(|v| v.slots.clone()).into_iter().map(|slot| match slot {
                            PageSlot::Ellipsis => view! {
                                <span class="px-2 text-stone-400">"..."</span>
                            }.into_any(),
                            PageSlot::Page(page) => view! {
                                <RoundButton
                                    on_click=Callback::new(move |()| dispatch.run(ViewUpdate::SetPage(page)))
                                    active=Signal::derive(move || current() == page)
                                >
                                    {page}
                                </RoundButton>
                            }.into_any(),
                        }).collect_view()
                    }}

                    <RoundButton
                        on_click=Callback::new(move |()| dispatch.run(ViewUpdate::NextPage))
                        disabled=Signal::derive(move || !catalog_view.with(CatalogView::has_next))
                    >
                        "›"
                    </RoundButton>
                </div>
            </nav>
        </Show>
    }
}

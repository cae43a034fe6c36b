// tests/url_state_tests.rs - Query-string round trips and sanitising
//
// Links are shared and hand-edited, so decoding must accept anything and
// encoding must always produce the canonical form.

mod common;

use holohut::fixtures::{CatalogFixture, MixedShelf};
use holohut::web_app::model::{FilterOptions, SortOption, TagKind};
use holohut::web_app::state::{TagSelection, ViewState, ViewUpdate};

use common::{state_with, subsets};

fn known() -> FilterOptions {
    MixedShelf::catalog().options().clone()
}

#[test]
fn test_round_trip_reproduces_state() {
    let known = known();
    let searches = ["", "box", "Pokémon & friends, 151+", "100% ?=#"];

    let mut checked = 0;
    for languages in subsets(known.values(TagKind::Language)) {
        for (i, sort) in SortOption::ALL.into_iter().enumerate() {
            let search = searches[i % searches.len()];
            let state = state_with([
                ViewUpdate::SetSelection(TagKind::Language, languages.clone()),
                ViewUpdate::SetSelection(
                    TagKind::Type,
                    TagSelection::from_values(["Booster Box", "3 Pack Blister"]),
                ),
                ViewUpdate::SetSearch(search.to_string()),
                ViewUpdate::SetSort(sort),
                ViewUpdate::SetPage(1 + i as u32),
            ]);

            let query = state.to_query_string();
            let decoded = ViewState::from_query(&query, &known);
            assert_eq!(decoded, state, "query {:?}", query);

            // Encoding the decoded state gives the same string back
            assert_eq!(decoded.to_query_string(), query);
            checked += 1;
        }
    }
    assert_eq!(checked, 16 * 5);
}

#[test]
fn test_default_fields_are_omitted() {
    let state = state_with([
        ViewUpdate::Toggle(TagKind::Seller, "PokeVolt".into()),
        ViewUpdate::SetSort(SortOption::Default),
        ViewUpdate::SetPage(1),
    ]);
    assert_eq!(state.to_query_string(), "sellers=PokeVolt");
}

#[test]
fn test_hand_edited_url_is_sanitised() {
    let state = ViewState::from_query(
        "?languages=Korean,Klingon,Korean&types=&sellers=TCG+Republic&q=&page=-4&sort=price",
        &known(),
    );

    assert_eq!(state.languages(), &TagSelection::from_values(["Korean"]));
    assert!(state.types().is_empty());
    // styled seller without stock in this catalog is still a valid filter
    assert_eq!(state.sellers(), &TagSelection::from_values(["TCG Republic"]));
    assert_eq!(state.search(), "");
    assert_eq!(state.page(), 1);
    assert_eq!(state.sort(), SortOption::Default);
    assert_eq!(state.to_query_string(), "languages=Korean&sellers=TCG+Republic");
}

#[test]
fn test_round_trip_for_styled_seller_without_stock() {
    let known = known();
    assert!(!known.contains(TagKind::Seller, "TCG Republic"));

    let state = state_with([ViewUpdate::Toggle(TagKind::Seller, "TCG Republic".into())]);
    let query = state.to_query_string();
    assert_eq!(query, "sellers=TCG+Republic");
    assert_eq!(ViewState::from_query(&query, &known), state);
}

#[test]
fn test_unknown_parameters_are_ignored() {
    let state = ViewState::from_query("utm_source=newsletter&ref=x", &known());
    assert!(state.is_default());
}

#[test]
fn test_every_sort_literal_parses() {
    for sort in SortOption::ALL {
        let query = format!("sort={}", sort.as_str());
        assert_eq!(ViewState::from_query(&query, &known()).sort(), sort);
    }
}

#[test]
fn test_percent_encoded_and_plus_encoded_spaces_are_equal() {
    let known = known();
    let plus = ViewState::from_query("types=Booster+Box&q=elite+trainer", &known);
    let percent = ViewState::from_query("types=Booster%20Box&q=elite%20trainer", &known);
    assert_eq!(plus, percent);
    assert_eq!(plus.search(), "elite trainer");
}

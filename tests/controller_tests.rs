// tests/controller_tests.rs - Controller behaviour across interaction sequences
//
// Covers page bounds after every update, clear-all, and what reaches the
// address bar.

mod common;

use holohut::fixtures::{CatalogFixture, MixedShelf, NumberedPacks};
use holohut::web_app::model::{SortOption, TagKind};
use holohut::web_app::state::{TagSelection, ViewState, ViewUpdate};

use common::{controller_for, controller_from_url};

/// A long, deterministic mix of interactions
fn interactions() -> Vec<ViewUpdate> {
    let base = vec![
        ViewUpdate::SetPage(2),
        ViewUpdate::NextPage,
        ViewUpdate::NextPage,
        ViewUpdate::Toggle(TagKind::Language, "Japanese".into()),
        ViewUpdate::SetPage(40),
        ViewUpdate::PreviousPage,
        ViewUpdate::Toggle(TagKind::Language, "Japanese".into()),
        ViewUpdate::SetPage(2),
        ViewUpdate::SetSearch("booster".into()),
        ViewUpdate::NextPage,
        ViewUpdate::SetSort(SortOption::NameDesc),
        ViewUpdate::SetSearch(String::new()),
        ViewUpdate::SetPage(0),
        ViewUpdate::Toggle(TagKind::Type, "Booster Box".into()),
        ViewUpdate::PreviousPage,
        ViewUpdate::SetSelection(TagKind::Seller, TagSelection::from_values(["Nowhere"])),
        ViewUpdate::NextPage,
        ViewUpdate::ClearAll,
        ViewUpdate::SetPage(u32::MAX),
        ViewUpdate::NextPage,
    ];
    base.iter().cycle().take(base.len() * 3).cloned().collect()
}

#[test]
fn test_page_stays_in_bounds_after_every_update() {
    let mut controller = controller_for::<MixedShelf>(ViewState::default());

    for update in interactions() {
        let label = format!("{:?}", update);
        let view = controller.dispatch(update).clone();
        let page = controller.state().page();

        assert!(page >= 1, "after {}", label);
        assert!(page <= view.total_pages.max(1), "after {}: page {} of {}", label, page, view.total_pages);
        assert_eq!(view.page, page, "after {}", label);
        assert!(view.items.len() <= 12);
        assert_eq!(view.items.is_empty(), view.total_count == 0, "after {}", label);
    }
}

#[test]
fn test_next_page_stops_at_the_last_page() {
    let mut controller = controller_for::<NumberedPacks>(ViewState::default());
    controller.dispatch(ViewUpdate::NextPage);
    controller.dispatch(ViewUpdate::NextPage);
    controller.dispatch(ViewUpdate::NextPage);

    assert_eq!(controller.state().page(), 2);
    assert!(!controller.view().has_next());
}

#[test]
fn test_clear_all_restores_the_unfiltered_view() {
    let mut controller = controller_from_url::<MixedShelf>(
        "languages=English&types=Booster+Box&q=surging&sort=price-desc",
    );
    assert_eq!(controller.view().total_count, 1);

    let view = controller.dispatch(ViewUpdate::ClearAll).clone();
    assert!(controller.state().is_default());
    assert_eq!(view.total_count, MixedShelf::products().len());
    assert_eq!(view.items[0].id, 1);
    assert_eq!(controller.address_bar().current(), Some(""));
}

#[test]
fn test_stale_url_is_corrected_and_published_once() {
    let mut controller = controller_from_url::<MixedShelf>("page=9&sellers=PokeVolt");
    assert_eq!(controller.state().page(), 1);
    assert!(controller.address_bar().history.is_empty());

    controller.publish();
    controller.publish();
    assert_eq!(controller.address_bar().history, vec!["sellers=PokeVolt".to_string()]);
}

#[test]
fn test_shared_link_for_seller_without_stock_shows_no_results() {
    let controller = controller_from_url::<MixedShelf>("sellers=TCG+Republic&page=2");

    assert_eq!(controller.state().sellers(), &TagSelection::from_values(["TCG Republic"]));
    assert_eq!(controller.view().total_count, 0);
    assert_eq!(controller.view().total_pages, 1);
    assert_eq!(controller.state().page(), 1);
}

#[test]
fn test_address_bar_follows_interactions() {
    let mut controller = controller_for::<MixedShelf>(ViewState::default());
    controller.dispatch(ViewUpdate::Toggle(TagKind::Language, "Japanese".into()));
    controller.dispatch(ViewUpdate::SetSort(SortOption::PriceAsc));
    controller.dispatch(ViewUpdate::SetSort(SortOption::PriceAsc));
    controller.dispatch(ViewUpdate::Toggle(TagKind::Language, "Japanese".into()));

    assert_eq!(
        controller.address_bar().history,
        vec![
            "languages=Japanese".to_string(),
            "languages=Japanese&sort=price-asc".to_string(),
            "sort=price-asc".to_string(),
        ]
    );
}

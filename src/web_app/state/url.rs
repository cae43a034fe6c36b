// web_app/state/url.rs - Query-string codec for the view state
//
// Reading accepts anything and falls back to defaults; writing produces the
// canonical form, which omits every field at its default value.

use url::form_urlencoded;

use crate::web_app::model::{FilterOptions, SortOption, TagKind};
use super::{TagSelection, ViewState};

pub const PARAM_QUERY: &str = "q";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_SORT: &str = "sort";

const LIST_SEPARATOR: char = ',';

impl ViewState {
    /// Builds the initial state from a raw query string (leading `?` optional)
    pub fn from_query(query: &str, known: &FilterOptions) -> ViewState {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        // First occurrence wins, like URLSearchParams.get
        ViewState::from_lookup(
            |key| {
                pairs
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
            },
            known,
        )
    }

    /// Builds the initial state from a parameter lookup
    ///
    /// Tag values are kept when the catalog offers them or they belong to a
    /// styled category, so a shared link for a seller that is currently out
    /// of stock still filters. Anything else is dropped.
    pub fn from_lookup<F>(lookup: F, known: &FilterOptions) -> ViewState
    where
        F: Fn(&str) -> Option<String>,
    {
        let param = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut state = ViewState::default();

        for kind in TagKind::ALL {
            let Some(raw) = param(kind.param()) else { continue };
            let (kept, dropped): (Vec<&str>, Vec<&str>) = raw
                .split(LIST_SEPARATOR)
                .partition(|value| known.is_known(kind, value));
            if !dropped.is_empty() {
                tracing::debug!("Dropping unknown {} values from URL: {:?}", kind.param(), dropped);
            }
            *state.selection_mut(kind) = TagSelection::from_values(kept);
        }

        if let Some(search) = param(PARAM_QUERY) {
            state.search = search;
        }

        if let Some(sort) = param(PARAM_SORT) {
            state.sort = SortOption::parse(&sort).unwrap_or_else(|| {
                tracing::debug!("Ignoring unknown sort '{}'", sort);
                SortOption::Default
            });
        }

        state.page = param(PARAM_PAGE)
            .and_then(|page| parse_page(&page))
            .unwrap_or(1);

        state
    }

    /// Canonical query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for kind in TagKind::ALL {
            let selection = self.selection(kind);
            if !selection.is_empty() {
                serializer.append_pair(kind.param(), &selection.join(&LIST_SEPARATOR.to_string()));
            }
        }
        if !self.search.is_empty() {
            serializer.append_pair(PARAM_QUERY, &self.search);
        }
        if self.page > 1 {
            serializer.append_pair(PARAM_PAGE, &self.page.to_string());
        }
        if self.sort != SortOption::Default {
            serializer.append_pair(PARAM_SORT, self.sort.as_str());
        }

        serializer.finish()
    }
}

/// Positive page number; zero, negative and non-numeric input is rejected
fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::state::ViewUpdate;

    fn known() -> FilterOptions {
        FilterOptions {
            languages: vec!["English".into(), "Japanese".into(), "Simplified Chinese".into()],
            types: vec!["Booster Box".into(), "Booster Pack".into()],
            sellers: vec!["Bored Game Company".into(), "TCG Republic".into()],
        }
    }

    #[test]
    fn test_default_state_has_empty_query() {
        assert_eq!(ViewState::default().to_query_string(), "");
    }

    #[test]
    fn test_canonical_parameter_order_and_encoding() {
        let mut state = ViewState::default();
        state.apply(ViewUpdate::SetSort(SortOption::PriceAsc));
        state.apply(ViewUpdate::Toggle(TagKind::Seller, "TCG Republic".into()));
        state.apply(ViewUpdate::Toggle(TagKind::Language, "Japanese".into()));
        state.apply(ViewUpdate::Toggle(TagKind::Language, "English".into()));
        state.apply(ViewUpdate::SetSearch("elite box".into()));
        state.apply(ViewUpdate::SetPage(2));

        assert_eq!(
            state.to_query_string(),
            "languages=Japanese%2CEnglish&sellers=TCG+Republic&q=elite+box&page=2&sort=price-asc"
        );
    }

    #[test]
    fn test_parse_full_query() {
        let state = ViewState::from_query(
            "?languages=Japanese%2CEnglish&types=Booster+Box&q=Box&page=3&sort=name-desc",
            &known(),
        );

        assert_eq!(state.languages(), &TagSelection::from_values(["English", "Japanese"]));
        assert_eq!(state.types(), &TagSelection::from_values(["Booster Box"]));
        assert!(state.sellers().is_empty());
        assert_eq!(state.search(), "Box");
        assert_eq!(state.page(), 3);
        assert_eq!(state.sort(), SortOption::NameDesc);
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let state = ViewState::from_query("sellers=TCG%20Republic,Nowhere,,tcg republic", &known());
        assert_eq!(state.sellers(), &TagSelection::from_values(["TCG Republic"]));

        let state = ViewState::from_query("types=Tin", &known());
        assert!(state.types().is_empty());
    }

    #[test]
    fn test_styled_values_absent_from_catalog_are_kept() {
        // known() offers no Korean products
        let state = ViewState::from_query("languages=Korean,Klingon&types=Collection+Box", &known());
        assert_eq!(state.languages(), &TagSelection::from_values(["Korean"]));
        assert_eq!(state.types(), &TagSelection::from_values(["Collection Box"]));
    }

    #[test]
    fn test_invalid_scalars_fall_back() {
        for query in ["page=abc", "page=0", "page=-2", "page=", "page=1.5"] {
            assert_eq!(ViewState::from_query(query, &known()).page(), 1, "{}", query);
        }

        assert_eq!(ViewState::from_query("sort=cheapest", &known()).sort(), SortOption::Default);
        assert_eq!(ViewState::from_query("sort=", &known()).sort(), SortOption::Default);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let state = ViewState::from_query("q=first&q=second", &known());
        assert_eq!(state.search(), "first");
    }

    #[test]
    fn test_search_keeps_raw_text() {
        let state = ViewState::from_query("q=%20Pok%C3%A9mon%20151%20", &known());
        assert_eq!(state.search(), " Pokémon 151 ");
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page("7"), Some(7));
        assert_eq!(parse_page(" 7 "), Some(7));
        assert_eq!(parse_page("0"), None);
        assert_eq!(parse_page("x"), None);
    }
}

// web_app/query/filter.rs - First pipeline stage
//
// A product is kept when it satisfies every active constraint: within a
// dimension any selected value matches, across dimensions all must match.

use crate::web_app::model::{Product, TagKind};
use crate::web_app::state::ViewState;

/// Keeps matching products in dataset order
pub fn filter_products<'a>(products: &'a [Product], state: &ViewState) -> Vec<&'a Product> {
    let needle = state.search().to_lowercase();
    products
        .iter()
        .filter(|product| matches(product, state, &needle))
        .collect()
}

/// `needle` is the lower-cased search text
fn matches(product: &Product, state: &ViewState, needle: &str) -> bool {
    TagKind::ALL
        .iter()
        .all(|&kind| state.selection(kind).admits(product.tag(kind)))
        && (needle.is_empty() || product.name.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::product;
    use crate::web_app::state::ViewUpdate;

    fn shelf() -> Vec<Product> {
        vec![
            product(1, "Booster Box", 100, "English", "Booster Box", "TCG Republic"),
            product(2, "booster pack", 10, "Japanese", "Booster Pack", "TCG Republic"),
            product(3, "Elite Trainer BOX", 50, "English", "Elite Trainer Box", "Bored Game Company"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_constraints_keeps_everything() {
        let products = shelf();
        let kept = filter_products(&products, &ViewState::default());
        assert_eq!(ids(&kept), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = shelf();
        let mut state = ViewState::default();
        state.apply(ViewUpdate::SetSearch("box".into()));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 3]);

        state.apply(ViewUpdate::SetSearch("BOOSTER".into()));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 2]);
    }

    #[test]
    fn test_values_within_a_dimension_are_alternatives() {
        let products = shelf();
        let mut state = ViewState::default();
        state.apply(ViewUpdate::Toggle(TagKind::Type, "Booster Box".into()));
        state.apply(ViewUpdate::Toggle(TagKind::Type, "Booster Pack".into()));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1, 2]);
    }

    #[test]
    fn test_dimensions_are_combined() {
        let products = shelf();
        let mut state = ViewState::default();
        state.apply(ViewUpdate::Toggle(TagKind::Language, "English".into()));
        state.apply(ViewUpdate::Toggle(TagKind::Seller, "TCG Republic".into()));
        assert_eq!(ids(&filter_products(&products, &state)), vec![1]);

        state.apply(ViewUpdate::SetSearch("elite".into()));
        assert!(filter_products(&products, &state).is_empty());
    }
}

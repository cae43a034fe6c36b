// fixtures/mod.rs - Reusable datasets for tests
//
// A fixture is a named, deterministic product list. Tests pick the fixture
// that matches the scenario instead of building products inline.

use rust_decimal::Decimal;

use crate::web_app::error::CatalogError;
use crate::web_app::model::{Catalog, Product};
use crate::web_app::state::AddressBar;

pub mod catalogs;

pub use catalogs::{MixedShelf, NameSearchSample, NumberedPacks};

/// A dataset that tests can load as a catalog
pub trait CatalogFixture {
    /// Products in dataset order; ids are unique
    fn products() -> Vec<Product>;

    fn try_catalog() -> Result<Catalog, CatalogError> {
        Catalog::new(Self::products())
    }

    /// Panics if the fixture violates the catalog invariants
    fn catalog() -> Catalog {
        match Self::try_catalog() {
            Ok(catalog) => catalog,
            Err(e) => panic!("fixture is not a valid catalog: {e}"),
        }
    }
}

/// In-stock product with a whole-rupee price
pub fn product(id: u32, name: &str, price: i64, language: &str, product_type: &str, shop: &str) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    Product {
        id,
        name: name.to_string(),
        price: Decimal::new(price, 0),
        formatted_price: format!("₹{price}.00"),
        language: language.to_string(),
        product_type: product_type.to_string(),
        shop: shop.to_string(),
        in_stock: true,
        image: format!("https://images.example.com/{slug}.webp"),
        link: format!("https://shop.example.com/{slug}"),
    }
}

/// Address bar that records every replacement in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryAddressBar {
    pub history: Vec<String>,
}

impl MemoryAddressBar {
    /// The query currently shown, if anything was ever written
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl AddressBar for MemoryAddressBar {
    fn replace_query(&mut self, query: &str) {
        self.history.push(query.to_string());
    }
}

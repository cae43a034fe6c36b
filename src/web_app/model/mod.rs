// web_app/model/mod.rs - Shared data models for client and server
//
// These types are compiled in every configuration (ssr, hydrate and plain
// tests) and carry no Leptos dependency.

use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, OnceLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::web_app::error::CatalogError;

pub mod tags;

pub use tags::TagStyle;

/// Dataset compiled into the binary; the scraper rewrites this file
const BUNDLED_PRODUCTS: &str = include_str!("../../../data/products.json");

/// One trading-card product as published by the scraper
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formatted_price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub product_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shop: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

impl Product {
    /// Value of the given tag dimension for this product
    pub fn tag(&self, kind: TagKind) -> &str {
        match kind {
            TagKind::Language => &self.language,
            TagKind::Type => &self.product_type,
            TagKind::Seller => &self.shop,
        }
    }
}

// The scraper writes `null` when a price or type could not be extracted
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The three filterable tag dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    Language,
    Type,
    Seller,
}

impl TagKind {
    pub const ALL: [TagKind; 3] = [TagKind::Language, TagKind::Type, TagKind::Seller];

    /// Query-string parameter holding this dimension's selection
    pub fn param(self) -> &'static str {
        match self {
            TagKind::Language => "languages",
            TagKind::Type => "types",
            TagKind::Seller => "sellers",
        }
    }

    /// Label of the filter dropdown
    pub fn label(self) -> &'static str {
        match self {
            TagKind::Language => "Language",
            TagKind::Type => "Type",
            TagKind::Seller => "Seller",
        }
    }
}

/// Sort key applied after filtering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    /// Literal used in the `sort` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn parse(value: &str) -> Option<SortOption> {
        SortOption::ALL.into_iter().find(|opt| opt.as_str() == value)
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Default => write!(f, "Default"),
            SortOption::PriceAsc => write!(f, "Price: Low → High"),
            SortOption::PriceDesc => write!(f, "Price: High → Low"),
            SortOption::NameAsc => write!(f, "Name: A → Z"),
            SortOption::NameDesc => write!(f, "Name: Z → A"),
        }
    }
}

/// Distinct tag values per dimension, sorted, as offered by the filter dropdowns
///
/// Together with the styled categories in [`TagStyle::KNOWN`] these are the
/// values accepted from the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub languages: Vec<String>,
    pub types: Vec<String>,
    pub sellers: Vec<String>,
}

impl FilterOptions {
    pub fn from_products(products: &[Product]) -> Self {
        let distinct = |kind: TagKind| -> Vec<String> {
            products
                .iter()
                .map(|p| p.tag(kind))
                .filter(|value| !value.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        FilterOptions {
            languages: distinct(TagKind::Language),
            types: distinct(TagKind::Type),
            sellers: distinct(TagKind::Seller),
        }
    }

    pub fn values(&self, kind: TagKind) -> &[String] {
        match kind {
            TagKind::Language => &self.languages,
            TagKind::Type => &self.types,
            TagKind::Seller => &self.sellers,
        }
    }

    pub fn contains(&self, kind: TagKind, value: &str) -> bool {
        self.values(kind).iter().any(|known| known == value)
    }

    /// Accepted in a URL: offered by this catalog or one of the styled categories
    pub fn is_known(&self, kind: TagKind, value: &str) -> bool {
        self.contains(kind, value) || TagStyle::is_styled(kind, value)
    }
}

/// The read-only product dataset plus its derived filter options
///
/// Cloning is cheap: both parts are reference counted.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Arc<[Product]>,
    options: Arc<FilterOptions>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }

        let options = FilterOptions::from_products(&products);
        Ok(Catalog {
            products: products.into(),
            options: Arc::new(options),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// The dataset bundled at compile time, parsed once per process
    pub fn bundled() -> Result<Self, CatalogError> {
        static BUNDLED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        BUNDLED
            .get_or_init(|| {
                let loaded = Catalog::from_json(BUNDLED_PRODUCTS);
                match &loaded {
                    Ok(catalog) => tracing::info!("Loaded {} bundled products", catalog.len()),
                    Err(e) => tracing::error!("Failed to load bundled products: {}", e),
                }
                loaded
            })
            .clone()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

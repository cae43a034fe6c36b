// web_app/error.rs - Errors raised while loading the product catalog
//
// Query-string input never produces an error (bad values fall back to
// defaults), so the only fallible step is reading the bundled dataset.

use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CatalogError {
    /// The dataset is not a JSON array of product records
    #[error("invalid catalog data: {0}")]
    Parse(#[source] Arc<serde_json::Error>),

    /// Two records share the same identifier
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(u32),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(Arc::new(err))
    }
}

// web_app/state/mod.rs - View state of the catalog page
//
// Filters, search text, sort key and page number. Every user interaction is
// expressed as a ViewUpdate and applied through ViewState::apply; the
// derived view and the address bar are refreshed by the controller.

use crate::web_app::model::{SortOption, TagKind};
use crate::web_app::query::paginate::clamp_page;

pub mod controller;
pub mod url;

pub use controller::{AddressBar, CatalogController};

/// Selected values of one tag dimension
///
/// Behaves as a set (no duplicates, equality ignores order) but keeps the
/// order in which values were picked, which is the order they are written
/// back to the query string.
#[derive(Clone, Debug, Default)]
pub struct TagSelection(Vec<String>);

impl TagSelection {
    pub fn new() -> Self {
        TagSelection(Vec::new())
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = TagSelection::new();
        for value in values {
            selection.insert(value.into());
        }
        selection
    }

    /// Adds a value; returns false when it was already selected
    pub fn insert(&mut self, value: String) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    /// Selects the value if absent, deselects it otherwise
    pub fn toggle(&mut self, value: &str) {
        if self.contains(value) {
            self.0.retain(|v| v != value);
        } else {
            self.0.push(value.to_string());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// An empty selection places no constraint on the dimension
    pub fn admits(&self, value: &str) -> bool {
        self.0.is_empty() || self.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl PartialEq for TagSelection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for TagSelection {}

/// One discrete user interaction
#[derive(Clone, Debug, PartialEq)]
pub enum ViewUpdate {
    /// Replace a dimension's selection wholesale
    SetSelection(TagKind, TagSelection),
    /// Click on one value in a filter dropdown
    Toggle(TagKind, String),
    SetSearch(String),
    SetSort(SortOption),
    SetPage(u32),
    NextPage,
    PreviousPage,
    ClearAll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    languages: TagSelection,
    types: TagSelection,
    sellers: TagSelection,
    search: String,
    sort: SortOption,
    page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            languages: TagSelection::new(),
            types: TagSelection::new(),
            sellers: TagSelection::new(),
            search: String::new(),
            sort: SortOption::Default,
            page: 1,
        }
    }
}

impl ViewState {
    pub fn selection(&self, kind: TagKind) -> &TagSelection {
        match kind {
            TagKind::Language => &self.languages,
            TagKind::Type => &self.types,
            TagKind::Seller => &self.sellers,
        }
    }

    fn selection_mut(&mut self, kind: TagKind) -> &mut TagSelection {
        match kind {
            TagKind::Language => &mut self.languages,
            TagKind::Type => &mut self.types,
            TagKind::Seller => &mut self.sellers,
        }
    }

    pub fn languages(&self) -> &TagSelection {
        &self.languages
    }

    pub fn types(&self) -> &TagSelection {
        &self.types
    }

    pub fn sellers(&self) -> &TagSelection {
        &self.sellers
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Number of selected tag values across all dimensions (search not included)
    pub fn active_filter_count(&self) -> usize {
        self.languages.len() + self.types.len() + self.sellers.len()
    }

    pub fn is_default(&self) -> bool {
        *self == ViewState::default()
    }

    /// Applies one interaction.
    ///
    /// Filter, search and sort changes put the user back on page 1 since the
    /// previous page number refers to a different result set. Page moves only
    /// enforce the lower bound; the upper bound depends on the result count
    /// and is enforced by [`ViewState::correct_page`].
    pub fn apply(&mut self, update: ViewUpdate) {
        tracing::debug!("Applying view update: {:?}", update);
        match update {
            ViewUpdate::SetSelection(kind, selection) => {
                *self.selection_mut(kind) = selection;
                self.page = 1;
            }
            ViewUpdate::Toggle(kind, value) => {
                self.selection_mut(kind).toggle(&value);
                self.page = 1;
            }
            ViewUpdate::SetSearch(search) => {
                self.search = search;
                self.page = 1;
            }
            ViewUpdate::SetSort(sort) => {
                self.sort = sort;
                self.page = 1;
            }
            ViewUpdate::SetPage(page) => self.page = page.max(1),
            ViewUpdate::NextPage => self.page = self.page.saturating_add(1),
            ViewUpdate::PreviousPage => self.page = self.page.saturating_sub(1).max(1),
            ViewUpdate::ClearAll => *self = ViewState::default(),
        }
    }

    /// Pulls the page back inside `1..=max(1, total_pages)`; returns true if it moved
    pub fn correct_page(&mut self, total_pages: u32) -> bool {
        let corrected = clamp_page(self.page, total_pages);
        if corrected == self.page {
            return false;
        }
        tracing::debug!("Correcting page {} -> {} ({} pages)", self.page, corrected, total_pages);
        self.page = corrected;
        true
    }
}

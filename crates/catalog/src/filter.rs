//! The filter engine: (catalog, filter state) → exact visible result set.
//!
//! A pure function recomputed on demand. The catalog is small and static, so
//! there is no cache and therefore no invalidation logic.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::repository::ProductRepository;

/// Category restriction. `All` is the sentinel meaning no restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category label.
    Named(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::from_label(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.label().to_string()
    }
}

/// The two independent filter inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

/// Compute the visible result set for a filter state.
///
/// Category matches are exact and case-sensitive; query matches are
/// case-insensitive substring checks across title, description, and category.
/// Both filters are conjunctive, and the relative order of retained products
/// equals their order in the catalog.
///
/// The query string is taken literally — trimming is the input boundary's
/// job, never this function's.
pub fn visible_products<'a>(
    catalog: &'a ProductRepository,
    state: &FilterState,
) -> Vec<&'a Product> {
    let needle = state.query.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|product| matches_category(product, &state.category))
        .filter(|product| needle.is_empty() || matches_query(product, &needle))
        .collect()
}

fn matches_category(product: &Product, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => product.category == *name,
    }
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Why a result set came back empty. Collaborators own the message text; the
/// core only supplies which case applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// A search query is active and nothing matched it.
    NoSearchMatches,
    /// No query is active; the category simply has no products.
    EmptyCategory,
}

/// What the view layer needs alongside the visible list: a result count and,
/// when a search is active, the query to echo back ("results for <query>").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub count: usize,
    pub query: Option<String>,
}

impl ResultSummary {
    pub fn new(state: &FilterState, count: usize) -> Self {
        let query = if state.query.is_empty() {
            None
        } else {
            Some(state.query.clone())
        };
        Self { count, query }
    }

    /// Zero results is a valid terminal state, never an error.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if self.count > 0 {
            return None;
        }
        Some(if self.query.is_some() {
            EmptyReason::NoSearchMatches
        } else {
            EmptyReason::EmptyCategory
        })
    }
}

//! Catalog browsing state: the two filter inputs and their update rules.

use std::sync::Arc;

use dealcart_catalog::{
    CategoryFilter, FilterState, Product, ProductRepository, ResultSummary, visible_products,
};

/// Owns the category and search-text inputs and delegates computation to the
/// filter engine. The two setters are the only paths that mutate the filter
/// state.
#[derive(Debug, Clone)]
pub struct CatalogController {
    catalog: Arc<ProductRepository>,
    state: FilterState,
}

impl CatalogController {
    /// The repository is constructed once by the host and passed in
    /// explicitly; the controller owns no catalog data itself.
    pub fn new(catalog: Arc<ProductRepository>) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &ProductRepository {
        &self.catalog
    }

    /// Switch category. Starts a fresh browse: an active search is cleared,
    /// not refined. `set_category(All)` restores the unfiltered catalog
    /// exactly.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        self.state.query.clear();
    }

    /// Store the trimmed search text, leaving the category unchanged. An
    /// empty trimmed string is valid and means "no text filter".
    pub fn set_search_query(&mut self, text: &str) {
        self.state.query = text.trim().to_string();
    }

    /// Always recomputed on demand — the catalog is small and static, so
    /// there is no cache and nothing to invalidate.
    pub fn current_view(&self) -> Vec<&Product> {
        visible_products(&self.catalog, &self.state)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(&self.state, self.current_view().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealcart_core::ProductId;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: 20.0,
            original_price: 25.0,
            rating: 4.0,
            review_count: 3,
            image: String::new(),
            features: Vec::new(),
            affiliate_link: format!("https://example.com/aff/{id}"),
        }
    }

    fn controller() -> CatalogController {
        let repo = ProductRepository::from_products(vec![
            product(1, "Wireless Mouse", "Electronics"),
            product(2, "Cotton Shirt", "Fashion"),
        ])
        .unwrap();
        CatalogController::new(Arc::new(repo))
    }

    #[test]
    fn starts_unfiltered() {
        let ctl = controller();
        assert_eq!(ctl.state(), &FilterState::default());
        assert_eq!(ctl.current_view().len(), 2);
    }

    #[test]
    fn set_category_clears_an_active_search() {
        let mut ctl = controller();
        ctl.set_category(CategoryFilter::from_label("Electronics"));
        ctl.set_search_query("foo");
        assert_eq!(ctl.state().query, "foo");

        ctl.set_category(CategoryFilter::from_label("Fashion"));
        assert_eq!(
            ctl.state(),
            &FilterState {
                category: CategoryFilter::from_label("Fashion"),
                query: String::new(),
            }
        );
    }

    #[test]
    fn set_search_query_trims_and_preserves_category() {
        let mut ctl = controller();
        ctl.set_category(CategoryFilter::from_label("Electronics"));
        ctl.set_search_query("  mouse \t");

        assert_eq!(ctl.state().query, "mouse");
        assert_eq!(ctl.state().category, CategoryFilter::from_label("Electronics"));
    }

    #[test]
    fn whitespace_only_query_trims_to_no_text_filter() {
        let mut ctl = controller();
        ctl.set_search_query("   ");
        assert_eq!(ctl.state().query, "");
        assert_eq!(ctl.current_view().len(), 2);
    }

    #[test]
    fn resetting_to_all_restores_the_unfiltered_catalog() {
        let mut ctl = controller();
        ctl.set_category(CategoryFilter::from_label("Electronics"));
        ctl.set_search_query("mouse");

        ctl.set_category(CategoryFilter::All);
        let view = ctl.current_view();
        assert_eq!(view.len(), 2);
        assert_eq!(ctl.state(), &FilterState::default());
    }

    #[test]
    fn category_and_query_filter_conjunctively() {
        let mut ctl = controller();
        ctl.set_category(CategoryFilter::from_label("Electronics"));
        let view = ctl.current_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, ProductId::new(1));

        // Category stays Electronics, so the Fashion-only match disappears.
        ctl.set_search_query("shirt");
        assert!(ctl.current_view().is_empty());
        assert_eq!(ctl.summary().count, 0);
        assert_eq!(ctl.summary().query.as_deref(), Some("shirt"));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: switching category always leaves the query empty,
            /// whatever was typed before.
            #[test]
            fn set_category_always_resets_query(
                query in ".{0,32}",
                label in "[A-Za-z]{1,12}",
            ) {
                let mut ctl = controller();
                ctl.set_search_query(&query);
                ctl.set_category(CategoryFilter::from_label(label));
                prop_assert_eq!(ctl.state().query.as_str(), "");
            }

            /// Property: the stored query is exactly the trimmed input and
            /// the category never moves.
            #[test]
            fn set_search_query_stores_trimmed_text(query in ".{0,32}") {
                let mut ctl = controller();
                ctl.set_category(CategoryFilter::from_label("Electronics"));
                ctl.set_search_query(&query);
                prop_assert_eq!(ctl.state().query.as_str(), query.trim());
                prop_assert_eq!(
                    ctl.state().category.clone(),
                    CategoryFilter::from_label("Electronics")
                );
            }
        }
    }
}

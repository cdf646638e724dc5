//! Detail-view selection and the copy-link confirmation contract.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use dealcart_catalog::{Product, ProductRepository};
use dealcart_core::{DomainError, DomainResult, ProductId};

/// How long a copy confirmation stays visible before auto-reverting
/// (two UI-feedback units of one second each).
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Result of a collaborator's clipboard write, reported back distinctly.
/// A failure is recoverable and user-visible; it is never retried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// A copy attempt for the open product's affiliate link.
///
/// The clipboard write happens in a collaborator and may finish or fail at
/// any later time without blocking further interaction; `generation` ties the
/// eventual report back to the attempt it belongs to, so a stale callback can
/// never resurrect feedback for a superseded copy or selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTicket {
    pub generation: u64,
    /// The affiliate link, verbatim.
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CopyFeedback {
    outcome: CopyOutcome,
    expires_at: Instant,
}

/// Owns which single product (if any) is open for detail viewing.
///
/// `Option<ProductId>` encodes the invariant that an open view always has a
/// product: closing clears both together and no stale reference survives.
#[derive(Debug, Clone)]
pub struct SelectionController {
    catalog: Arc<ProductRepository>,
    open: Option<ProductId>,
    feedback: Option<CopyFeedback>,
    copy_generation: u64,
}

impl SelectionController {
    pub fn new(catalog: Arc<ProductRepository>) -> Self {
        Self {
            catalog,
            open: None,
            feedback: None,
            copy_generation: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_product(&self) -> Option<&Product> {
        self.open.and_then(|id| self.catalog.get(id))
    }

    /// Open a product for detail viewing.
    ///
    /// The target must identify a product of the current catalog; anything
    /// else is a caller bug and is rejected without touching state. Selecting
    /// while another product is open supersedes it (last select wins), which
    /// also invalidates any pending copy attempt for the old product.
    pub fn select(&mut self, id: ProductId) -> DomainResult<&Product> {
        let Some(product) = self.catalog.get(id) else {
            return Err(DomainError::invariant(format!(
                "selection target {id} is not in the catalog"
            )));
        };
        self.open = Some(id);
        self.feedback = None;
        self.copy_generation += 1;
        Ok(product)
    }

    /// Close the detail view. Unconditional and idempotent; a manual close
    /// always cancels a pending copy confirmation and its auto-revert.
    pub fn close(&mut self) {
        self.open = None;
        self.feedback = None;
    }

    /// Start a copy of the open product's affiliate link.
    ///
    /// Requires an open selection. Bumps the generation so any report from an
    /// earlier attempt becomes stale.
    pub fn copy_ticket(&mut self) -> DomainResult<CopyTicket> {
        let Some(product) = self.open.and_then(|id| self.catalog.get(id)) else {
            return Err(DomainError::invariant(
                "copy requested with no open selection",
            ));
        };
        let link = product.affiliate_link.clone();
        self.copy_generation += 1;
        Ok(CopyTicket {
            generation: self.copy_generation,
            link,
        })
    }

    /// Record the collaborator's clipboard outcome.
    ///
    /// Only the newest attempt for the currently open selection may set
    /// feedback; stale generations and reports arriving after a close are
    /// ignored — the callback may touch nothing but the confirmation state.
    /// Returns whether the report was applied.
    pub fn resolve_copy(&mut self, generation: u64, outcome: CopyOutcome, now: Instant) -> bool {
        if self.open.is_none() || generation != self.copy_generation {
            return false;
        }
        self.feedback = Some(CopyFeedback {
            outcome,
            expires_at: now + COPY_FEEDBACK_TTL,
        });
        true
    }

    /// The transient confirmation, auto-reverting at its deadline.
    pub fn copy_feedback(&mut self, now: Instant) -> Option<CopyOutcome> {
        if let Some(feedback) = self.feedback {
            if now >= feedback.expires_at {
                self.feedback = None;
            }
        }
        self.feedback.map(|feedback| feedback.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            category: "Electronics".to_string(),
            price: 30.0,
            original_price: 40.0,
            rating: 4.5,
            review_count: 12,
            image: String::new(),
            features: Vec::new(),
            affiliate_link: format!("https://example.com/aff/{id}"),
        }
    }

    fn controller() -> SelectionController {
        let repo = ProductRepository::from_products(vec![
            product(1, "Wireless Mouse"),
            product(2, "Mechanical Keyboard"),
        ])
        .unwrap();
        SelectionController::new(Arc::new(repo))
    }

    #[test]
    fn starts_closed() {
        let ctl = controller();
        assert!(!ctl.is_open());
        assert!(ctl.open_product().is_none());
    }

    #[test]
    fn select_opens_the_product() {
        let mut ctl = controller();
        let selected = ctl.select(ProductId::new(1)).unwrap();
        assert_eq!(selected.title, "Wireless Mouse");
        assert!(ctl.is_open());
        assert_eq!(ctl.open_product().unwrap().id, ProductId::new(1));
    }

    #[test]
    fn select_rejects_a_target_outside_the_catalog() {
        let mut ctl = controller();
        let err = ctl.select(ProductId::new(99)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(!ctl.is_open());
    }

    #[test]
    fn a_second_select_supersedes_without_closing() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        ctl.select(ProductId::new(2)).unwrap();

        assert!(ctl.is_open());
        assert_eq!(ctl.open_product().unwrap().id, ProductId::new(2));
    }

    #[test]
    fn close_is_idempotent() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();

        ctl.close();
        assert!(!ctl.is_open());
        assert!(ctl.open_product().is_none());

        ctl.close();
        assert!(!ctl.is_open());
        assert!(ctl.open_product().is_none());
    }

    #[test]
    fn copy_ticket_carries_the_affiliate_link_verbatim() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();

        let ticket = ctl.copy_ticket().unwrap();
        assert_eq!(ticket.link, "https://example.com/aff/1");
    }

    #[test]
    fn copy_without_an_open_selection_is_rejected() {
        let mut ctl = controller();
        let err = ctl.copy_ticket().unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn resolved_copy_shows_feedback_until_the_deadline() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let ticket = ctl.copy_ticket().unwrap();

        let now = Instant::now();
        assert!(ctl.resolve_copy(ticket.generation, CopyOutcome::Copied, now));

        let just_before = now + COPY_FEEDBACK_TTL - Duration::from_millis(1);
        assert_eq!(ctl.copy_feedback(just_before), Some(CopyOutcome::Copied));

        let at_deadline = now + COPY_FEEDBACK_TTL;
        assert_eq!(ctl.copy_feedback(at_deadline), None);
        // Once reverted, it stays reverted.
        assert_eq!(ctl.copy_feedback(just_before), None);
    }

    #[test]
    fn failure_outcome_is_reported_distinctly() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let ticket = ctl.copy_ticket().unwrap();

        let now = Instant::now();
        assert!(ctl.resolve_copy(ticket.generation, CopyOutcome::Failed, now));
        assert_eq!(ctl.copy_feedback(now), Some(CopyOutcome::Failed));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let stale = ctl.copy_ticket().unwrap();
        let fresh = ctl.copy_ticket().unwrap();
        assert!(fresh.generation > stale.generation);

        let now = Instant::now();
        assert!(!ctl.resolve_copy(stale.generation, CopyOutcome::Copied, now));
        assert_eq!(ctl.copy_feedback(now), None);

        assert!(ctl.resolve_copy(fresh.generation, CopyOutcome::Copied, now));
        assert_eq!(ctl.copy_feedback(now), Some(CopyOutcome::Copied));
    }

    #[test]
    fn close_cancels_the_pending_confirmation() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let ticket = ctl.copy_ticket().unwrap();

        let now = Instant::now();
        assert!(ctl.resolve_copy(ticket.generation, CopyOutcome::Copied, now));
        ctl.close();
        assert_eq!(ctl.copy_feedback(now), None);
    }

    #[test]
    fn resolution_arriving_after_close_is_ignored() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let ticket = ctl.copy_ticket().unwrap();
        ctl.close();

        let now = Instant::now();
        assert!(!ctl.resolve_copy(ticket.generation, CopyOutcome::Copied, now));
        assert!(!ctl.is_open());
        assert_eq!(ctl.copy_feedback(now), None);
    }

    #[test]
    fn reselecting_invalidates_the_previous_products_ticket() {
        let mut ctl = controller();
        ctl.select(ProductId::new(1)).unwrap();
        let old = ctl.copy_ticket().unwrap();

        ctl.select(ProductId::new(2)).unwrap();

        let now = Instant::now();
        assert!(!ctl.resolve_copy(old.generation, CopyOutcome::Copied, now));
        assert_eq!(ctl.copy_feedback(now), None);
    }
}

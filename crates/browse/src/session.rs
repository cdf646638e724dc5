//! A browse session: both controllers wired to the notification bus.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use dealcart_catalog::{CategoryFilter, Product, ProductRepository, ResultSummary};
use dealcart_core::{DomainResult, ProductId, SessionId};
use dealcart_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::controller::CatalogController;
use crate::events::BrowseEvent;
use crate::selection::{CopyOutcome, CopyTicket, SelectionController};

/// One visitor's browse state: filter inputs, detail selection, and a
/// notification stream collaborators subscribe to instead of being
/// re-rendered by a framework.
///
/// Sessions are single logical threads of control; hosts that share one
/// across threads put it behind their own lock.
#[derive(Debug)]
pub struct BrowseSession {
    id: SessionId,
    filters: CatalogController,
    selection: SelectionController,
    bus: Arc<InMemoryEventBus<EventEnvelope<BrowseEvent>>>,
    sequence: u64,
}

impl BrowseSession {
    pub fn new(id: SessionId, catalog: Arc<ProductRepository>) -> Self {
        Self {
            id,
            filters: CatalogController::new(Arc::clone(&catalog)),
            selection: SelectionController::new(catalog),
            bus: Arc::new(InMemoryEventBus::new()),
            sequence: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn filters(&self) -> &CatalogController {
        &self.filters
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Subscribe to this session's change notifications.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<BrowseEvent>> {
        self.bus.subscribe()
    }

    pub fn set_category(&mut self, category: CategoryFilter, occurred_at: DateTime<Utc>) {
        self.filters.set_category(category);
        self.publish(BrowseEvent::FilterChanged {
            state: self.filters.state().clone(),
            occurred_at,
        });
    }

    pub fn set_search_query(&mut self, text: &str, occurred_at: DateTime<Utc>) {
        self.filters.set_search_query(text);
        self.publish(BrowseEvent::FilterChanged {
            state: self.filters.state().clone(),
            occurred_at,
        });
    }

    pub fn current_view(&self) -> Vec<&Product> {
        self.filters.current_view()
    }

    pub fn summary(&self) -> ResultSummary {
        self.filters.summary()
    }

    pub fn select(&mut self, id: ProductId, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        self.selection.select(id)?;
        self.publish(BrowseEvent::SelectionOpened {
            product_id: id,
            occurred_at,
        });
        Ok(())
    }

    /// Close the detail view. Idempotent; only an actual close is announced.
    pub fn close_selection(&mut self, occurred_at: DateTime<Utc>) {
        let was_open = self.selection.is_open();
        self.selection.close();
        if was_open {
            self.publish(BrowseEvent::SelectionClosed { occurred_at });
        }
    }

    pub fn copy_ticket(&mut self) -> DomainResult<CopyTicket> {
        self.selection.copy_ticket()
    }

    /// Record a collaborator's clipboard outcome; announces it only when the
    /// report was current (stale or post-close reports change nothing).
    pub fn resolve_copy(
        &mut self,
        generation: u64,
        outcome: CopyOutcome,
        now: Instant,
        occurred_at: DateTime<Utc>,
    ) -> bool {
        let applied = self.selection.resolve_copy(generation, outcome, now);
        if applied {
            let product_id = self.selection.open_product().map(|product| product.id);
            if let Some(product_id) = product_id {
                self.publish(BrowseEvent::CopyResolved {
                    product_id,
                    outcome,
                    occurred_at,
                });
            }
        }
        applied
    }

    pub fn copy_feedback(&mut self, now: Instant) -> Option<CopyOutcome> {
        self.selection.copy_feedback(now)
    }

    fn publish(&mut self, event: BrowseEvent) {
        let envelope = EventEnvelope::new(Uuid::now_v7(), self.id, self.sequence, event);
        self.sequence += 1;
        // Best-effort fan-out; controller state stays the source of truth.
        let _ = self.bus.publish(envelope);
    }
}

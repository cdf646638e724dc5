//! Events published when browse state changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dealcart_catalog::FilterState;
use dealcart_core::ProductId;
use dealcart_events::Event;

use crate::selection::CopyOutcome;

/// State-change notification for one browse session.
///
/// Subscribers treat these as render hints; controller state remains the
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseEvent {
    FilterChanged {
        state: FilterState,
        occurred_at: DateTime<Utc>,
    },
    SelectionOpened {
        product_id: ProductId,
        occurred_at: DateTime<Utc>,
    },
    SelectionClosed {
        occurred_at: DateTime<Utc>,
    },
    CopyResolved {
        product_id: ProductId,
        outcome: CopyOutcome,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for BrowseEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BrowseEvent::FilterChanged { .. } => "browse.filter.changed",
            BrowseEvent::SelectionOpened { .. } => "browse.selection.opened",
            BrowseEvent::SelectionClosed { .. } => "browse.selection.closed",
            BrowseEvent::CopyResolved { .. } => "browse.copy.resolved",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            BrowseEvent::FilterChanged { occurred_at, .. }
            | BrowseEvent::SelectionOpened { occurred_at, .. }
            | BrowseEvent::SelectionClosed { occurred_at }
            | BrowseEvent::CopyResolved { occurred_at, .. } => *occurred_at,
        }
    }
}

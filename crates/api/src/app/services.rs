//! Shared application state: the catalog handle and the session store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use dealcart_browse::{BrowseEvent, BrowseSession};
use dealcart_catalog::ProductRepository;
use dealcart_core::SessionId;
use dealcart_events::{EventEnvelope, Subscription};

/// One live browse session plus the notification feed its pollers drain.
#[derive(Debug)]
pub struct SessionEntry {
    pub session: BrowseSession,
    pub feed: Subscription<EventEnvelope<BrowseEvent>>,
}

/// Services handed to every handler via `Extension`.
///
/// A browse session is a single logical thread of control, so concurrent
/// HTTP callers on the same session serialize on that session's own mutex.
/// The lock is never held across an await point.
#[derive(Debug)]
pub struct AppServices {
    catalog: Arc<ProductRepository>,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<SessionEntry>>>>,
}

impl AppServices {
    pub fn new(catalog: Arc<ProductRepository>) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &ProductRepository {
        &self.catalog
    }

    /// Create a fresh browse session over the shared catalog.
    pub fn create_session(&self) -> SessionId {
        let id = SessionId::new();
        let session = BrowseSession::new(id, Arc::clone(&self.catalog));
        let feed = session.subscribe();
        let entry = Arc::new(Mutex::new(SessionEntry { session, feed }));

        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(id, entry);
        }
        tracing::debug!(session_id = %id, "browse session created");
        id
    }

    pub fn session(&self, id: SessionId) -> Option<Arc<Mutex<SessionEntry>>> {
        self.sessions.read().ok()?.get(&id).cloned()
    }
}

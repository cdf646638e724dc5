use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dealcart_core::SessionId;

/// Envelope for a published event, carrying session + stream metadata.
///
/// This is the unit delivered to subscribers.
///
/// Notes:
/// - `sequence_number` is monotonically increasing per session.
/// - `payload` is the domain-agnostic event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    session_id: SessionId,

    /// Monotonically increasing position in the session stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, session_id: SessionId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            session_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

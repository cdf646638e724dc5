//! Change notifications for browse state (pub/sub mechanics only).
//!
//! Controllers expose their state plus a notification stream; view-layer
//! collaborators subscribe instead of being re-rendered by a framework.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};

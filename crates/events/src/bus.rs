//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the pub/sub mechanism for distributing state-change
//! notifications to consumers (view layers, feeds, tests).
//!
//! The bus is intentionally **lightweight** and makes minimal assumptions:
//!
//! - **Transport-agnostic**: works with in-memory channels or anything else
//!   implementing the trait.
//! - **Broadcast semantics**: each subscriber gets a copy of every published
//!   message.
//! - **Best-effort fan-out**: delivery to a dropped subscriber is not an
//!   error; consumers must tolerate missed or duplicated notifications and
//!   re-read controller state as the source of truth.
//! - **No persistence**: the bus distributes, it does not store.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to an event stream.
///
/// Each subscription receives a copy of all messages published after it was
/// created. Subscriptions are designed for single-threaded consumption: one
/// subscription per consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Drain everything currently queued without blocking.
    pub fn drain(&self) -> Vec<M> {
        let mut out = Vec::new();
        while let Ok(message) = self.try_recv() {
            out.push(message);
        }
        out
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// Sits between state mutation and its observers:
///
/// ```text
/// Controller mutation → Event Bus (publish) → Subscribers (render/poll)
/// ```
///
/// `publish()` can fail (e.g. the bus is unusable); callers decide whether
/// that matters — controller state remains the source of truth either way.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}

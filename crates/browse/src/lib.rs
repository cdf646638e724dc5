//! `dealcart-browse` — browsing controllers for the storefront core.
//!
//! This crate contains the interactive state of a visit: the two filter
//! inputs and their update rules, the single-product detail selection, the
//! copy-link confirmation contract, and the session wiring that publishes
//! change notifications. Deterministic domain logic only (no IO, no HTTP,
//! no storage).

pub mod controller;
pub mod events;
pub mod outbound;
pub mod selection;
pub mod session;

pub use controller::CatalogController;
pub use events::BrowseEvent;
pub use outbound::OutboundLink;
pub use selection::{COPY_FEEDBACK_TTL, CopyOutcome, CopyTicket, SelectionController};
pub use session::BrowseSession;

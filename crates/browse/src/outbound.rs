//! Outbound affiliate navigation contract.

use serde::Serialize;

use dealcart_catalog::Product;

/// Browsing-context target for outbound links.
pub const NEW_CONTEXT: &str = "_blank";

/// Relationship attributes the host must apply: the destination gets no
/// reference back to the originating context and no referrer. This is a
/// security contract, not a styling choice.
pub const REL: &str = "noopener noreferrer";

/// How a collaborator must open a product's affiliate link.
///
/// Shipped as data so the view layer cannot get the contract wrong: always a
/// new browsing context, always `noopener noreferrer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    /// The affiliate link, verbatim — never parsed or rewritten.
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl OutboundLink {
    pub fn to(product: &Product) -> Self {
        Self {
            href: product.affiliate_link.clone(),
            target: NEW_CONTEXT,
            rel: REL,
        }
    }
}

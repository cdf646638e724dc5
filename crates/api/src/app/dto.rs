use serde::{Deserialize, Serialize};

use dealcart_browse::{CopyOutcome, OutboundLink};
use dealcart_catalog::{EmptyReason, Product, ResultSummary};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct SetCategoryRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SetQueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    pub product_id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResultRequest {
    pub generation: u64,
    /// Whether the collaborator's clipboard write succeeded.
    pub copied: bool,
}

// -------------------------
// Response DTOs
// -------------------------

/// Card-level product projection for grid/list rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub original_price: f64,
    pub discount_percent: u32,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.as_u64(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: product.price,
            original_price: product.original_price,
            discount_percent: product.discount_percent(),
            rating: product.rating,
            review_count: product.review_count,
            image: product.image.clone(),
        }
    }
}

/// Full detail projection for the open product view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub card: ProductCard,
    pub description: String,
    pub features: Vec<String>,
    /// The outbound navigation contract (new context, noopener noreferrer).
    pub outbound: OutboundLink,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        Self {
            card: ProductCard::from_product(product),
            description: product.description.clone(),
            features: product.features.clone(),
            outbound: OutboundLink::to(product),
        }
    }
}

/// The visible result set plus the presentation contract around it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub category: String,
    pub products: Vec<ProductCard>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
}

impl ViewResponse {
    pub fn new(category_label: &str, products: Vec<&Product>, summary: ResultSummary) -> Self {
        Self {
            category: category_label.to_string(),
            products: products.iter().map(|p| ProductCard::from_product(p)).collect(),
            count: summary.count,
            empty_reason: summary.empty_reason(),
            query: summary.query,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_feedback: Option<CopyOutcome>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyTicketResponse {
    pub generation: u64,
    /// The affiliate link, verbatim, for the collaborator to write.
    pub link: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResultResponse {
    /// False when the report was stale (superseded copy or closed selection).
    pub applied: bool,
}

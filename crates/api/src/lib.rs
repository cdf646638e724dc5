//! HTTP surface for the dealcart storefront core.

pub mod app;

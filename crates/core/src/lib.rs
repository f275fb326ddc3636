//! Paperbloom
//!
//! Client-side domain model for the Paperbloom paper-flower storefront:
//! the product catalog, the pricing engine, the cart aggregate, the admin
//! session, and terminal receipt rendering.

pub mod cart;
pub mod catalog;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod session;

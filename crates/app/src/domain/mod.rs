//! Domain services: products, product images, and users.

pub mod images;
pub mod products;
pub mod users;

//! Shared application domain and persistence modules for the Paperbloom
//! backend: products with their nested options and images, users and JWT
//! auth, database seeding.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod seed;

//! # Quill Infrastructure
//!
//! Concrete implementations of the store port defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogPostStore};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogPostStore;

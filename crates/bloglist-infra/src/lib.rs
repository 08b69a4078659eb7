//! # Bloglist Infrastructure
//!
//! Concrete implementations of the ports defined in `bloglist-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL blog store via SeaORM
//!
//! Without `postgres` only the in-memory store is available.

pub mod database;

// Re-exports
pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresBlogRepository};

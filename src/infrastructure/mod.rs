//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! - [`cache`] - Redirect cache (Redis and no-op implementations)
//! - [`persistence`] - Mapping store implementations (PostgreSQL and in-memory)

pub mod cache;
pub mod persistence;

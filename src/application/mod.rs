//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules, and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Find-or-create and lookup of short links

pub mod services;

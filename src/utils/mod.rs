//! Utility functions for code generation and URL handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL validation
//! - [`db_error`] - Unique-constraint violation classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;

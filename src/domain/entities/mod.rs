//! Core domain entities.
//!
//! - [`ShortenedLink`] - A persisted long URL to short code mapping
//! - [`NewShortenedLink`] - Insert payload
//! - [`Shortened`] - Outcome of the find-or-create protocol

pub mod link;

pub use link::{NewShortenedLink, Shortened, ShortenedLink};

//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use health::health_handler;
pub use links::get_link_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;

//! HTML template rendering handlers.

mod create;

pub use create::{CreateForm, CreateTemplate, create_page_handler, create_submit_handler};

//! Link creation page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the link creation page.
///
/// Renders `templates/create.html` with the submitted URL, an optional
/// success message and any validation errors.
#[derive(Template, WebTemplate, Default)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub long_url: String,
    pub message: Option<String>,
    pub short_url: Option<String>,
    pub errors: Vec<String>,
}

/// Submitted creation form.
///
/// A missing field is treated like an empty one so it is reported as a
/// validation error on the page instead of a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub long_url: String,
}

/// Renders the empty creation form.
///
/// # Endpoint
///
/// `GET /`
pub async fn create_page_handler() -> impl IntoResponse {
    CreateTemplate::default()
}

/// Handles a creation form submission.
///
/// # Endpoint
///
/// `POST /`
///
/// Answers `200 OK` for every outcome a user can cause:
/// - new URL: page with a "created" message and the full short URL
/// - known URL: page with an "already exists" message and the existing short URL
/// - invalid URL: the form again, with the input and error messages
///
/// A body that is not a urlencoded form (including no body at all) is
/// handled like a submission without a URL.
///
/// Server-side failures re-render the form with the error's status code.
pub async fn create_submit_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!("Unreadable form submission: {}", rejection);
            CreateForm::default()
        }
    };

    match state.link_service.shorten(&form.long_url).await {
        Ok(outcome) => {
            let prefix = if outcome.is_created() {
                "Short link created"
            } else {
                "Short link already exists"
            };
            let link = outcome.link();
            let short_url = state.link_service.short_url(&link.short_code);

            CreateTemplate {
                message: Some(format!(
                    "{prefix}. {} is available at {short_url}",
                    link.long_url
                )),
                short_url: Some(short_url),
                ..CreateTemplate::default()
            }
            .into_response()
        }
        Err(AppError::Validation { details, .. }) => {
            let reason = details
                .get("reason")
                .and_then(|r| r.as_str())
                .unwrap_or("Invalid URL")
                .to_string();

            CreateTemplate {
                long_url: form.long_url,
                errors: vec![reason],
                ..CreateTemplate::default()
            }
            .into_response()
        }
        Err(e) => {
            error!("Failed to create short link: {}", e);

            let page = CreateTemplate {
                long_url: form.long_url,
                errors: vec!["The link could not be created, please try again later".to_string()],
                ..CreateTemplate::default()
            };

            (e.status_code(), page).into_response()
        }
    }
}

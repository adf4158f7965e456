use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use cstt_templates_contracts::{ErrorTemplate, Template, TemplateService};

pub mod assets;
pub mod contact;
pub mod health;
pub mod pages;
pub mod services;

/// Render a page into a 200 response.
pub(crate) fn page(
    templates: &impl TemplateService,
    template: &(impl Template + 'static),
) -> Response {
    match templates.render(template) {
        Ok(html) => Html(html).into_response(),
        Err(err) => internal_server_error(templates, err),
    }
}

pub(crate) fn internal_server_error(
    templates: &impl TemplateService,
    err: impl Into<anyhow::Error>,
) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error_page(
        templates,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    )
}

/// Render the shared error page with the given status. Falls back to a plain
/// text response if even that template fails to render.
pub(crate) fn error_page(
    templates: &impl TemplateService,
    code: StatusCode,
    message: &'static str,
) -> Response {
    match templates.render(&ErrorTemplate::new(message)) {
        Ok(html) => (code, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("failed to render the error page: {err}");
            (code, message).into_response()
        }
    }
}

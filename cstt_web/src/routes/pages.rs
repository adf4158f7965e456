use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing, Router};
use cstt_templates_contracts::{AboutTemplate, HomeTemplate, ProductsTemplate, TemplateService};

use super::{error_page, page};

pub fn router(templates: Arc<impl TemplateService>) -> Router<()> {
    Router::new()
        .route("/", routing::get(index))
        .route("/products", routing::get(products))
        .route("/about", routing::get(about))
        .fallback(not_found)
        .with_state(templates)
}

async fn index(State(templates): State<Arc<impl TemplateService>>) -> Response {
    page(&*templates, &HomeTemplate::new())
}

async fn products(State(templates): State<Arc<impl TemplateService>>) -> Response {
    page(&*templates, &ProductsTemplate::new())
}

async fn about(State(templates): State<Arc<impl TemplateService>>) -> Response {
    page(&*templates, &AboutTemplate::new())
}

async fn not_found(State(templates): State<Arc<impl TemplateService>>) -> Response {
    error_page(&*templates, StatusCode::NOT_FOUND, "Page not found")
}

use std::{panic::AssertUnwindSafe, sync::Arc};

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{from_fn, Next},
    Router,
};
use cstt_templates_contracts::TemplateService;
use futures::FutureExt;
use tracing::error;

use crate::routes::error_page;

/// Catch panics in handlers and inner middlewares and turn them into the
/// themed 500 page instead of tearing down the connection.
pub fn add<S, T>(router: Router<S>, templates: Arc<T>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    T: TemplateService,
{
    router.layer(from_fn(move |request: Request, next: Next| {
        let templates = Arc::clone(&templates);
        async move {
            match AssertUnwindSafe(next.run(request)).catch_unwind().await {
                Ok(response) => response,
                Err(_) => {
                    error!("request handler panicked");
                    error_page(
                        &*templates,
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                    )
                }
            }
        }
    }))
}

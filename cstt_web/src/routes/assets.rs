use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing, Router,
};

pub fn router() -> Router<()> {
    Router::new()
        .route("/static/css/style.css", routing::get(style_css))
        .route("/static/js/main.js", routing::get(main_js))
}

async fn style_css() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        cstt_assets::css::STYLE_CSS,
    )
        .into_response()
}

async fn main_js() -> Response {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        cstt_assets::js::MAIN_JS,
    )
        .into_response()
}

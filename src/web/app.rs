use std::path::Path;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL, LOCATION};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::ActivityStore;
use crate::web::routes::activities;

pub const INDEX_PATH: &str = "/static/index.html";

/// Full application: JSON API, landing redirect and static files, sharing one
/// activity store.
pub fn build_router(store: ActivityStore, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_redirect))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler).delete(activities::withdraw_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(store)
}

async fn index_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, INDEX_PATH)])
}

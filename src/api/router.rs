//! Portal API router.
//!
//! Returns a composable `Router` with every route nested under `/api/`.
//! Authorisation is per handler: each one asks `ApiContext` for the role
//! it needs, so there is no middleware stack.

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the portal API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn portal_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/session", get(endpoints::auth::session))
        .route("/auth/patient/login", post(endpoints::auth::patient_login))
        .route("/auth/provider/login", post(endpoints::auth::provider_login))
        .route("/auth/logout", post(endpoints::auth::logout))
        .route(
            "/departments/:name/sessions",
            get(endpoints::departments::sessions),
        )
        .route("/patient/history", get(endpoints::history::patient))
        .route("/patient/appointments", get(endpoints::appointments::list))
        .route("/patient/payments", get(endpoints::payments::list))
        .route("/provider/sessions", get(endpoints::sessions::list))
        .route(
            "/provider/patients/:patient_id/history",
            get(endpoints::history::provider_view),
        )
        .with_state(ctx);

    // The browser front-end is served from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new().nest("/api", api).layer(cors)
}

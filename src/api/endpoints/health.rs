//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub signed_in: bool,
    pub api_base_url: String,
}

/// `GET /api/health`: liveness plus whether someone is signed in.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let signed_in = ctx
        .policy
        .restore(ctx.sessions.as_ref(), Utc::now())?
        .is_some();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        signed_in,
        api_base_url: ctx.client.base_url().to_string(),
    }))
}

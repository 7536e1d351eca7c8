//! Sign-in, sign-out and the current session.
//!
//! Credentials are forwarded to the clinic API as-is; only the returned
//! identity is stored locally.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{
    Acknowledgement, PatientCredentials, ProviderCredentials, SessionUser, UserRole,
};
use crate::session::AuthSession;

/// `GET /api/session`
pub async fn session(State(ctx): State<ApiContext>) -> Result<Json<AuthSession>, ApiError> {
    ctx.current_session().map(Json)
}

/// `POST /api/auth/patient/login`
pub async fn patient_login(
    State(ctx): State<ApiContext>,
    Json(credentials): Json<PatientCredentials>,
) -> Result<Json<AuthSession>, ApiError> {
    let patient = ctx.client.patient_login(&credentials).await?;
    let session = ctx.policy.login(
        ctx.sessions.as_ref(),
        SessionUser::from(&patient),
        UserRole::Patient,
        Utc::now(),
    )?;
    Ok(Json(session))
}

/// `POST /api/auth/provider/login`
pub async fn provider_login(
    State(ctx): State<ApiContext>,
    Json(credentials): Json<ProviderCredentials>,
) -> Result<Json<AuthSession>, ApiError> {
    let provider = ctx.client.provider_login(&credentials).await?;
    let session = ctx.policy.login(
        ctx.sessions.as_ref(),
        SessionUser::from(&provider),
        UserRole::Provider,
        Utc::now(),
    )?;
    Ok(Json(session))
}

/// `POST /api/auth/logout`: always succeeds, signed in or not.
pub async fn logout(State(ctx): State<ApiContext>) -> Result<Json<Acknowledgement>, ApiError> {
    ctx.policy.logout(ctx.sessions.as_ref())?;
    tracing::info!("Signed out");
    Ok(Json(Acknowledgement {
        success: true,
        message: None,
    }))
}

//! `GET /api/provider/sessions`: the provider's session board.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ProviderSessionQuery, UserRole};
use crate::schedule::{categorize_sessions, SessionCategories};

/// Sessions split into active, upcoming and cancelled around the local now.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ProviderSessionQuery>,
) -> Result<Json<SessionCategories>, ApiError> {
    let session = ctx.require_role(UserRole::Provider)?;
    let sessions = ctx
        .client
        .list_provider_sessions(session.user.user_id, &query)
        .await?;
    Ok(Json(categorize_sessions(sessions, Local::now().naive_local())))
}

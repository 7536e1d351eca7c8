//! `GET /api/departments/:name/sessions`: a department's bookable days.
//!
//! Public, like the department pages it backs; no sign-in is needed.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Local;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::departments::{group_upcoming_sessions, DepartmentSchedule};
use crate::models::OpenSessionQuery;

pub async fn sessions(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<DepartmentSchedule>, ApiError> {
    let department = ctx
        .client
        .department_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Department not found: {name}")))?;

    let query = OpenSessionQuery {
        dept_id: Some(department.dept_id),
        ..Default::default()
    };
    let sessions = ctx.client.list_open_sessions(&query).await?;
    let days = group_upcoming_sessions(sessions, Local::now().date_naive());

    Ok(Json(DepartmentSchedule { department, days }))
}

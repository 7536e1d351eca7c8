//! `GET /api/patient/appointments`: bookings with badge and allowed actions.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Appointment, UserRole};
use crate::schedule::{patient_can_cancel, patient_can_check_in, status_badge, StatusBadge};

#[derive(Debug, Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub badge: StatusBadge,
    pub can_cancel: bool,
    pub can_check_in: bool,
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        let status = appointment.status;
        Self {
            appointment,
            badge: status_badge(status),
            can_cancel: patient_can_cancel(status),
            can_check_in: patient_can_check_in(status),
        }
    }
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<AppointmentView>>, ApiError> {
    let session = ctx.require_role(UserRole::Patient)?;
    let appointments = ctx
        .client
        .list_patient_appointments(session.user.user_id)
        .await?;
    Ok(Json(appointments.into_iter().map(AppointmentView::from).collect()))
}

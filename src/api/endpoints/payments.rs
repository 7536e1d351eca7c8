//! `GET /api/patient/payments`: bills with method and paid status labels.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::history::{payment_status, PaymentStatus};
use crate::models::{Payment, UserRole};

#[derive(Debug, Serialize)]
pub struct PaymentView {
    #[serde(flatten)]
    pub payment: Payment,
    pub method_label: &'static str,
    pub status: PaymentStatus,
    pub status_label: &'static str,
}

impl From<Payment> for PaymentView {
    fn from(payment: Payment) -> Self {
        let status = payment_status(&payment);
        Self {
            method_label: payment.method.label(),
            status,
            status_label: status.label(),
            payment,
        }
    }
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<PaymentView>>, ApiError> {
    let session = ctx.require_role(UserRole::Patient)?;
    let payments = ctx.client.list_payments(session.user.user_id).await?;
    Ok(Json(payments.into_iter().map(PaymentView::from).collect()))
}

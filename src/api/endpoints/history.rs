//! Visit history, aggregated and ordered for display.
//!
//! `GET /api/patient/history` serves the signed-in patient's own history;
//! `GET /api/provider/patients/:patient_id/history` serves a provider's
//! read-only view of one patient. Both run the same aggregation.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::history::{
    aggregate, count_records, partition_by_time, summarize, HistoryCounts, Visit, VisitSummary,
};
use crate::models::requests::blank_as_none;
use crate::models::{PatientHistory, UserRole};

#[derive(Deserialize)]
pub struct HistoryQuery {
    /// Defaults to today in the local calendar, also when sent blank.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct BucketSizes {
    pub today: usize,
    pub future: usize,
    pub past: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub reference_date: NaiveDate,
    /// Today, then upcoming soonest first, then past most recent first.
    pub visits: Vec<Visit>,
    pub buckets: BucketSizes,
    pub summaries: Vec<VisitSummary>,
    pub counts: HistoryCounts,
}

/// `GET /api/patient/history?reference_date=YYYY-MM-DD`
pub async fn patient(
    State(ctx): State<ApiContext>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let session = ctx.require_role(UserRole::Patient)?;
    let history = ctx.client.patient_history(session.user.user_id).await?;
    Ok(Json(build_response(&history, reference_date(&query))))
}

/// `GET /api/provider/patients/:patient_id/history`
pub async fn provider_view(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<i64>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let session = ctx.require_role(UserRole::Provider)?;
    let history = ctx
        .client
        .provider_patient_history(session.user.user_id, patient_id)
        .await?;
    Ok(Json(build_response(&history, reference_date(&query))))
}

fn reference_date(query: &HistoryQuery) -> NaiveDate {
    query
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive())
}

fn build_response(history: &PatientHistory, reference_date: NaiveDate) -> HistoryResponse {
    let counts = count_records(history);
    let buckets = partition_by_time(aggregate(history), reference_date);
    let sizes = BucketSizes {
        today: buckets.today.len(),
        future: buckets.future.len(),
        past: buckets.past.len(),
    };
    tracing::debug!(
        today = sizes.today,
        future = sizes.future,
        past = sizes.past,
        "Visit history built"
    );

    let visits = buckets.into_display_order();
    let summaries = visits.iter().map(summarize).collect();

    HistoryResponse {
        reference_date,
        visits,
        buckets: sizes,
        summaries,
        counts,
    }
}

//! Typed HTTP client for the remote clinic API.
//!
//! One method per remote endpoint, split by audience into `patient` and
//! `provider`. Every response is decoded into a `models` type; transport,
//! status and decode failures surface as `ClientError`.

mod patient;
mod provider;

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot reach clinic API at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Clinic API returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl ClientError {
    /// 4xx from the API: the request itself was refused.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }
}

/// FastAPI-style error body. `detail` is a string for handled errors and a
/// list of field problems for validation failures.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Client for the clinic REST API.
pub struct ClinicApiClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl ClinicApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    /// Sends the request and decodes a JSON body into `T`.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_detail(&body);
            tracing::debug!(status = status.as_u16(), %detail, "Clinic API error response");
            return Err(if status == StatusCode::NOT_FOUND {
                ClientError::NotFound(detail)
            } else {
                ClientError::Status {
                    status: status.as_u16(),
                    detail,
                }
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ClientError::Connection(self.base_url.clone())
        } else {
            ClientError::Http(e.to_string())
        }
    }
}

fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "no detail".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Turns a 404 into `None` for lookups where "nothing yet" is a normal answer.
fn found<T>(result: Result<T, ClientError>) -> Result<Option<T>, ClientError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ClientError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════


#[cfg(test)]
mod tests {
    use super::test_support::spawn_mock_api;
    use super::*;
    use crate::models::*;
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn history_json() -> Value {
        json!({
            "encounters": [
                {"enct_id": 10, "status": 2, "encounter_at": "2025-03-13T10:00:00",
                 "provider_name": "Dr. Lin", "department_name": "ENT"}
            ],
            "diagnoses": [{"enct_id": 10, "code_icd": "J10", "description": "Flu", "is_primary": true}],
            "prescriptions": [],
            "lab_results": [{"lab_id": 1, "enct_id": 99, "item_name": "CRP", "abnormal_flag": "H"}],
            "payments": [{"payment_id": 5, "enct_id": 10, "amount": 350, "method": "cash"}]
        })
    }

    async fn mock_api() -> String {
        let app = Router::new()
            .route(
                "/patient/history",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    if q.get("patient_id").map(String::as_str) == Some("1") {
                        Ok(Json(history_json()))
                    } else {
                        Err((StatusCode::NOT_FOUND, Json(json!({"detail": "Patient not found"}))))
                    }
                }),
            )
            .route(
                "/patient/login",
                post(|Json(body): Json<Value>| async move {
                    if body["password"] == "secret" {
                        Ok(Json(json!({"user_id": 1, "name": "Chen Mei", "national_id": body["national_id"]})))
                    } else {
                        Err((StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid credentials"}))))
                    }
                }),
            )
            .route(
                "/provider/:provider_id/appointments/:appt_id/encounter",
                get(|Path((_p, appt)): Path<(i64, i64)>| async move {
                    if appt == 3 {
                        Ok(Json(json!({"enct_id": 10, "status": 1, "encounter_at": "2025-03-13 10:00:00"})))
                    } else {
                        Err((StatusCode::NOT_FOUND, Json(json!({"detail": "Encounter not found"}))))
                    }
                }),
            )
            .route(
                "/provider/:provider_id/sessions",
                get(|Query(q): Query<HashMap<String, String>>| async move {
                    // Echo the filter back through the dept name so the test can see it.
                    Json(json!([{
                        "session_id": 1, "provider_id": 7, "date": "2025-03-14", "period": 1,
                        "capacity": 10, "booked_count": 2, "status": 1,
                        "dept_name": q.get("from_date").cloned().unwrap_or_default()
                    }]))
                }),
            )
            .route("/broken", get(|| async { Json(json!({"unexpected": true})) }))
            .route(
                "/patient/appointments",
                post(|| async {
                    (
                        StatusCode::CONFLICT,
                        Json(json!({"detail": "Session is full"})),
                    )
                }),
            );
        spawn_mock_api(app).await
    }

    #[tokio::test]
    async fn fetches_and_decodes_history() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        let history = client.patient_history(1).await.unwrap();
        assert_eq!(history.encounters.len(), 1);
        assert_eq!(history.diagnoses[0].description.as_deref(), Some("Flu"));
        assert_eq!(history.lab_results[0].abnormal_flag, Some(AbnormalFlag::High));
        assert_eq!(history.payments[0].method, PaymentMethod::Cash);
    }

    #[tokio::test]
    async fn not_found_carries_detail() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        match client.patient_history(2).await {
            Err(ClientError::NotFound(detail)) => assert_eq!(detail, "Patient not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_login_maps_to_status() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        let creds = PatientCredentials {
            national_id: "A123".into(),
            password: "wrong".into(),
        };
        let err = client.patient_login(&creds).await.unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn successful_login_decodes_patient() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        let creds = PatientCredentials {
            national_id: "A123".into(),
            password: "secret".into(),
        };
        let patient = client.patient_login(&creds).await.unwrap();
        assert_eq!(patient.user_id, 1);
        assert_eq!(patient.national_id.as_deref(), Some("A123"));
    }

    #[tokio::test]
    async fn conflict_is_a_status_error() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        match client.create_appointment(1, 5).await {
            Err(ClientError::Status { status, detail }) => {
                assert_eq!(status, 409);
                assert_eq!(detail, "Session is full");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_encounter_is_none() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        assert!(client.encounter_for_appointment(7, 4).await.unwrap().is_none());
        let enc = client.encounter_for_appointment(7, 3).await.unwrap().unwrap();
        assert_eq!(enc.status, EncounterStatus::Draft);
    }

    #[tokio::test]
    async fn session_query_is_sent_as_query_string() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        let query = ProviderSessionQuery {
            from_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        let sessions = client.list_provider_sessions(7, &query).await.unwrap();
        assert_eq!(sessions[0].dept_name.as_deref(), Some("2025-03-01"));
        assert_eq!(sessions[0].period, Some(SessionPeriod::Morning));
    }

    #[tokio::test]
    async fn departments_fall_back_to_empty_on_404() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        assert!(client.list_departments().await.unwrap().is_empty());
        assert!(client.department_by_name("Cardiology").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unexpected_shape_is_decode_error() {
        let client = ClinicApiClient::new(&mock_api().await, 5).unwrap();
        let result: Result<Vec<ClinicSession>, _> =
            client.execute(client.request(Method::GET, "/broken")).await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_api_is_connection_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ClinicApiClient::new(&format!("http://{addr}"), 2).unwrap();
        assert!(matches!(
            client.patient_history(1).await,
            Err(ClientError::Connection(_))
        ));
    }

    #[test]
    fn error_detail_shapes() {
        assert_eq!(error_detail(r#"{"detail": "nope"}"#), "nope");
        assert!(error_detail(r#"{"detail": [{"loc": ["body"]}]}"#).contains("loc"));
        assert_eq!(error_detail(""), "no detail");
        assert_eq!(error_detail("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ClinicApiClient::new("http://localhost:8000/", 5).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}

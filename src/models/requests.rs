//! Request bodies and query strings for the clinic API's write endpoints.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::{AbnormalFlag, EncounterStatus, PaymentMethod, SessionPeriod, SessionStatus, Sex};
use super::timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub name: String,
    pub password: String,
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCredentials {
    pub national_id: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRegistration {
    pub name: String,
    pub password: String,
    pub license_no: String,
    pub dept_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCredentials {
    pub license_no: String,
    pub password: String,
}

/// Query-string field that treats an empty value (`?from_date=`) as absent.
///
/// Browser forms submit every filter input, filled or not.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Filters for the patient-side open session search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenSessionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub dept_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub provider_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub date: Option<NaiveDate>,
}

/// Filters for a provider's own session list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSessionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub status: Option<SessionStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub session_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointment {
    pub new_session_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSchedule {
    pub date: NaiveDate,
    pub period: SessionPeriod,
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterUpsert {
    pub status: EncounterStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chief_complaint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisUpsert {
    pub is_primary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryDiagnosis {
    pub code_icd: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionLine {
    pub med_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub days: u32,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionUpsert {
    pub items: Vec<PrescriptionLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLabResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loinc_code: Option<String>,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_low: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_high: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abnormal_flag: Option<AbnormalFlag>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "timestamp::option"
    )]
    pub reported_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUpsert {
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlinePayment {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_no: Option<String>,
}

/// Free-text catalogue search (diseases, medications).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub limit: u32,
}

impl CatalogQuery {
    pub const DEFAULT_LIMIT: u32 = 50;

    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::{EncounterStatus, SessionPeriod};
use super::timestamp;

/// One clinical visit, as listed by the history endpoints.
///
/// The history endpoints join in provider and department names, so those
/// travel with the encounter rather than being looked up separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub enct_id: i64,
    #[serde(default)]
    pub appt_id: Option<i64>,
    #[serde(default)]
    pub provider_id: Option<i64>,
    #[serde(default)]
    pub patient_id: Option<i64>,
    pub status: EncounterStatus,
    #[serde(with = "timestamp")]
    pub encounter_at: NaiveDateTime,
    #[serde(default)]
    pub session_date: Option<NaiveDate>,
    #[serde(default)]
    pub session_period: Option<SessionPeriod>,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub chief_complaint: Option<String>,
    #[serde(default)]
    pub subjective: Option<String>,
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::{SessionPeriod, SessionStatus};
use super::timestamp;

/// One bookable clinic slot block (a provider's morning/afternoon/evening).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicSession {
    pub session_id: i64,
    pub provider_id: i64,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub dept_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub period: Option<SessionPeriod>,
    #[serde(default, with = "timestamp::clock_option")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "timestamp::clock_option")]
    pub end_time: Option<NaiveTime>,
    pub capacity: u32,
    #[serde(default)]
    pub booked_count: u32,
    pub status: SessionStatus,
}

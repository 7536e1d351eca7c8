use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;
use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appt_id: i64,
    pub patient_id: i64,
    #[serde(default)]
    pub patient_name: Option<String>,
    pub session_id: i64,
    pub session_date: NaiveDate,
    #[serde(default, with = "timestamp::clock_option")]
    pub session_start_time: Option<NaiveTime>,
    #[serde(default, with = "timestamp::clock_option")]
    pub session_end_time: Option<NaiveTime>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub slot_seq: u32,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub status_name: Option<String>,
}

/// Response of the appointment-to-patient lookup used by the encounter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentPatient {
    pub patient_id: i64,
}

/// Bare appointment row returned by the booking write endpoints
/// (create, cancel, reschedule, check-in), without the session joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub appt_id: i64,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub slot_seq: Option<u32>,
    pub status: AppointmentStatus,
}

/// `{"success": true}` style acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

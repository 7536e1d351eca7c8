use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{
    timestamp, Diagnosis, EncounterStatus, LabResult, Payment, Prescription, SessionPeriod,
};

/// One encounter joined with everything recorded against it.
///
/// Built fresh from a `PatientHistory` bundle on every load and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub enct_id: i64,
    pub status: EncounterStatus,
    #[serde(with = "timestamp")]
    pub encounter_at: NaiveDateTime,
    pub session_date: Option<NaiveDate>,
    pub session_period: Option<SessionPeriod>,
    pub provider_name: String,
    pub department_name: Option<String>,
    pub chief_complaint: Option<String>,
    pub subjective: Option<String>,
    pub assessment: Option<String>,
    pub plan: Option<String>,
    /// Source order, not re-sorted.
    pub diagnoses: Vec<Diagnosis>,
    pub prescription: Option<Prescription>,
    pub lab_results: Vec<LabResult>,
    pub payment: Option<Payment>,
}

impl Visit {
    /// Calendar day of the encounter, in the local calendar.
    pub fn encounter_date(&self) -> NaiveDate {
        self.encounter_at.date()
    }
}

/// Visits split around a reference day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitBuckets {
    /// Source order.
    pub today: Vec<Visit>,
    /// Soonest first.
    pub future: Vec<Visit>,
    /// Most recent first.
    pub past: Vec<Visit>,
}

impl VisitBuckets {
    pub fn len(&self) -> usize {
        self.today.len() + self.future.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Today, then upcoming, then history.
    pub fn into_display_order(self) -> Vec<Visit> {
        let mut ordered = self.today;
        ordered.extend(self.future);
        ordered.extend(self.past);
        ordered
    }
}

/// Record counts shown on the history tabs, taken from the raw bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryCounts {
    pub encounters: usize,
    pub diagnoses: usize,
    pub prescriptions: usize,
    pub lab_results: usize,
    pub payments: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }
}

/// One list row per visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitSummary {
    pub enct_id: i64,
    #[serde(with = "timestamp")]
    pub encounter_at: NaiveDateTime,
    pub provider_name: String,
    pub department_name: String,
    pub primary_diagnosis: String,
    pub abnormal_labs: usize,
    pub prescription_items: usize,
    pub payment_status: Option<PaymentStatus>,
}

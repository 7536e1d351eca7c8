use crate::models::{Diagnosis, LabResult, Payment};
use super::types::*;

/// Shown when a visit has no usable diagnosis or assessment.
pub const NO_DIAGNOSIS_LABEL: &str = "None";

/// Shown for any optional display field that is missing or blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown when the department join came back empty.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown department";

/// Headline diagnosis for a visit.
///
/// Primary diagnosis first, then the first diagnosis in list order, then the
/// visit's free-text assessment. Within a diagnosis the description wins over
/// the disease name; blank values are skipped.
pub fn primary_diagnosis_label(visit: &Visit) -> String {
    let chosen = visit
        .diagnoses
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| visit.diagnoses.first());

    match chosen {
        Some(diagnosis) => diagnosis_text(diagnosis)
            .unwrap_or(NO_DIAGNOSIS_LABEL)
            .to_string(),
        None => non_blank(visit.assessment.as_deref())
            .unwrap_or(NO_DIAGNOSIS_LABEL)
            .to_string(),
    }
}

fn diagnosis_text(diagnosis: &Diagnosis) -> Option<&str> {
    non_blank(diagnosis.description.as_deref()).or_else(|| non_blank(diagnosis.disease_name.as_deref()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Lab results flagged High or Low.
pub fn abnormal_lab_count(visit: &Visit) -> usize {
    visit.lab_results.iter().filter(|l| l.is_abnormal()).count()
}

/// `"low - high"` when both bounds are present.
pub fn reference_range_label(lab: &LabResult) -> String {
    match (non_blank(lab.ref_low.as_deref()), non_blank(lab.ref_high.as_deref())) {
        (Some(low), Some(high)) => format!("{low} - {high}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn value_or_na(value: Option<&str>) -> &str {
    non_blank(value).unwrap_or(NOT_AVAILABLE)
}

pub fn payment_status(payment: &Payment) -> PaymentStatus {
    if payment.is_paid() {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Unpaid
    }
}

pub fn summarize(visit: &Visit) -> VisitSummary {
    VisitSummary {
        enct_id: visit.enct_id,
        encounter_at: visit.encounter_at,
        provider_name: visit.provider_name.clone(),
        department_name: value_or(visit.department_name.as_deref(), UNKNOWN_DEPARTMENT),
        primary_diagnosis: primary_diagnosis_label(visit),
        abnormal_labs: abnormal_lab_count(visit),
        prescription_items: visit.prescription.as_ref().map_or(0, |p| p.items.len()),
        payment_status: visit.payment.as_ref().map(payment_status),
    }
}

fn value_or(value: Option<&str>, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

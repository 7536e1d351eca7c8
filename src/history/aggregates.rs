use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::PatientHistory;
use super::types::*;

/// Joins the flat history lists into one `Visit` per encounter.
///
/// The encounter list decides which visits exist. Diagnoses, prescriptions,
/// lab results and payments whose `enct_id` matches no encounter are dropped.
/// Output follows encounter input order. A repeated `enct_id` replaces the
/// earlier visit in place, so the first occurrence keeps its position.
pub fn aggregate(history: &PatientHistory) -> Vec<Visit> {
    let mut visits: Vec<Visit> = Vec::with_capacity(history.encounters.len());
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(history.encounters.len());

    for enc in &history.encounters {
        let visit = Visit {
            enct_id: enc.enct_id,
            status: enc.status,
            encounter_at: enc.encounter_at,
            session_date: enc.session_date,
            session_period: enc.session_period,
            provider_name: enc.provider_name.clone(),
            department_name: enc.department_name.clone(),
            chief_complaint: enc.chief_complaint.clone(),
            subjective: enc.subjective.clone(),
            assessment: enc.assessment.clone(),
            plan: enc.plan.clone(),
            diagnoses: Vec::new(),
            prescription: None,
            lab_results: Vec::new(),
            payment: None,
        };

        match index.get(&enc.enct_id) {
            Some(&pos) => {
                tracing::warn!(enct_id = enc.enct_id, "Duplicate encounter in history, keeping later row");
                visits[pos] = visit;
            }
            None => {
                index.insert(enc.enct_id, visits.len());
                visits.push(visit);
            }
        }
    }

    for diagnosis in &history.diagnoses {
        if let Some(&pos) = index.get(&diagnosis.enct_id) {
            visits[pos].diagnoses.push(diagnosis.clone());
        }
    }

    // Last one wins if the backend ever sends two for one encounter.
    for prescription in &history.prescriptions {
        if let Some(&pos) = index.get(&prescription.enct_id) {
            visits[pos].prescription = Some(prescription.clone());
        }
    }

    for lab in &history.lab_results {
        if let Some(&pos) = index.get(&lab.enct_id) {
            visits[pos].lab_results.push(lab.clone());
        }
    }

    for payment in &history.payments {
        if let Some(&pos) = index.get(&payment.enct_id) {
            visits[pos].payment = Some(payment.clone());
        }
    }

    tracing::debug!(
        encounters = history.encounters.len(),
        visits = visits.len(),
        "Aggregated patient history"
    );

    visits
}

/// Splits visits around `reference` by calendar day.
///
/// Same day goes to `today` in source order, later days to `future`
/// (ascending by date-time), earlier days to `past` (descending).
pub fn partition_by_time(visits: Vec<Visit>, reference: NaiveDate) -> VisitBuckets {
    let mut buckets = VisitBuckets::default();

    for visit in visits {
        let day = visit.encounter_date();
        if day == reference {
            buckets.today.push(visit);
        } else if day > reference {
            buckets.future.push(visit);
        } else {
            buckets.past.push(visit);
        }
    }

    buckets.future.sort_by(|a, b| a.encounter_at.cmp(&b.encounter_at));
    buckets.past.sort_by(|a, b| b.encounter_at.cmp(&a.encounter_at));

    buckets
}

/// `partition_by_time` flattened into the order the history page lists visits.
pub fn order_for_display(visits: Vec<Visit>, reference: NaiveDate) -> Vec<Visit> {
    partition_by_time(visits, reference).into_display_order()
}

/// Tab counts over the raw bundle, before any join.
pub fn count_records(history: &PatientHistory) -> HistoryCounts {
    HistoryCounts {
        encounters: history.encounters.len(),
        diagnoses: history.diagnoses.len(),
        prescriptions: history.prescriptions.len(),
        lab_results: history.lab_results.len(),
        payments: history.payments.len(),
    }
}

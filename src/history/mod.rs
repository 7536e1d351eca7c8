//! Patient visit timeline.
//!
//! Joins the flat history lists (encounters, diagnoses, prescriptions,
//! lab results, payments) into one `Visit` per encounter, then orders the
//! visits around a reference day: today, upcoming, history. Pure functions,
//! no I/O; re-run on every fetch.

mod aggregates;
mod labels;
mod types;

pub use aggregates::*;
pub use labels::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M").unwrap()
    }

    fn day(date: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()
    }

    fn encounter(enct_id: i64, encounter_at: NaiveDateTime) -> Encounter {
        Encounter {
            enct_id,
            appt_id: Some(enct_id + 100),
            provider_id: Some(7),
            patient_id: Some(1),
            status: EncounterStatus::Final,
            encounter_at,
            session_date: Some(encounter_at.date()),
            session_period: Some(SessionPeriod::Morning),
            provider_name: "Dr. Lin".into(),
            department_name: Some("Family Medicine".into()),
            chief_complaint: None,
            subjective: None,
            assessment: None,
            plan: None,
        }
    }

    fn diagnosis(enct_id: i64, description: &str, disease_name: &str, is_primary: bool) -> Diagnosis {
        Diagnosis {
            enct_id,
            code_icd: "J10".into(),
            disease_name: Some(disease_name.into()),
            description: Some(description.into()),
            is_primary,
            encounter_at: None,
            provider_name: None,
            department_name: None,
        }
    }

    fn prescription(rx_id: i64, enct_id: i64) -> Prescription {
        Prescription {
            rx_id,
            enct_id,
            status: Some(1),
            items: vec![PrescriptionItem {
                med_id: 1,
                med_name: "Amoxicillin".into(),
                dosage: Some("500mg".into()),
                frequency: Some("TID".into()),
                days: 7,
                quantity: 21.0,
            }],
        }
    }

    fn lab(lab_id: i64, enct_id: i64, flag: Option<AbnormalFlag>) -> LabResult {
        LabResult {
            lab_id,
            enct_id,
            loinc_code: None,
            item_name: "Glucose".into(),
            value: Some("100".into()),
            unit: Some("mg/dL".into()),
            ref_low: Some("70".into()),
            ref_high: Some("99".into()),
            abnormal_flag: flag,
            reported_at: None,
        }
    }

    fn payment(payment_id: i64, enct_id: i64, paid: bool) -> Payment {
        Payment {
            payment_id,
            enct_id,
            amount: 350.0,
            method: PaymentMethod::Cash,
            invoice_no: None,
            paid_at: paid.then(|| at("2025-03-14", "12:00")),
        }
    }

    fn visit_with(diagnoses: Vec<Diagnosis>, assessment: Option<&str>) -> Visit {
        let mut enc = encounter(1, at("2025-03-14", "09:00"));
        enc.assessment = assessment.map(str::to_string);
        let history = PatientHistory {
            encounters: vec![enc],
            diagnoses,
            ..Default::default()
        };
        aggregate(&history).remove(0)
    }

    fn ids(visits: &[Visit]) -> Vec<i64> {
        visits.iter().map(|v| v.enct_id).collect()
    }

    // ── aggregate ──

    #[test]
    fn test_aggregate_empty_history() {
        assert!(aggregate(&PatientHistory::default()).is_empty());
    }

    #[test]
    fn test_one_visit_per_encounter_in_input_order() {
        let history = PatientHistory {
            encounters: vec![
                encounter(3, at("2025-01-01", "09:00")),
                encounter(1, at("2025-03-01", "09:00")),
                encounter(2, at("2024-12-01", "09:00")),
            ],
            ..Default::default()
        };
        let visits = aggregate(&history);
        assert_eq!(ids(&visits), vec![3, 1, 2]);
    }

    #[test]
    fn test_children_join_to_their_encounter() {
        let history = PatientHistory {
            encounters: vec![
                encounter(1, at("2025-01-01", "09:00")),
                encounter(2, at("2025-02-01", "09:00")),
            ],
            diagnoses: vec![
                diagnosis(2, "B", "B", false),
                diagnosis(1, "A", "A", true),
                diagnosis(2, "C", "C", true),
            ],
            prescriptions: vec![prescription(50, 2)],
            lab_results: vec![lab(1, 1, Some(AbnormalFlag::High)), lab(2, 1, None)],
            payments: vec![payment(9, 1, true)],
        };
        let visits = aggregate(&history);

        assert_eq!(visits[0].diagnoses.len(), 1);
        assert_eq!(visits[0].lab_results.len(), 2);
        assert_eq!(visits[0].payment.as_ref().map(|p| p.payment_id), Some(9));
        assert!(visits[0].prescription.is_none());

        // Source order kept, not re-sorted by primary flag.
        let descs: Vec<_> = visits[1]
            .diagnoses
            .iter()
            .map(|d| d.description.clone().unwrap())
            .collect();
        assert_eq!(descs, vec!["B", "C"]);
        assert_eq!(visits[1].prescription.as_ref().map(|p| p.rx_id), Some(50));
        assert!(visits[1].payment.is_none());
    }

    #[test]
    fn test_unmatched_children_are_dropped() {
        let history = PatientHistory {
            encounters: vec![encounter(1, at("2025-01-01", "09:00"))],
            diagnoses: vec![diagnosis(99, "X", "X", true)],
            prescriptions: vec![prescription(5, 99)],
            lab_results: vec![lab(1, 99, Some(AbnormalFlag::Low))],
            payments: vec![payment(1, 99, false)],
        };
        let visits = aggregate(&history);
        assert_eq!(visits.len(), 1);
        assert!(visits[0].diagnoses.is_empty());
        assert!(visits[0].prescription.is_none());
        assert!(visits[0].lab_results.is_empty());
        assert!(visits[0].payment.is_none());
    }

    #[test]
    fn test_last_prescription_and_payment_win() {
        let history = PatientHistory {
            encounters: vec![encounter(1, at("2025-01-01", "09:00"))],
            prescriptions: vec![prescription(5, 1), prescription(6, 1)],
            payments: vec![payment(1, 1, false), payment(2, 1, true)],
            ..Default::default()
        };
        let visit = aggregate(&history).remove(0);
        assert_eq!(visit.prescription.map(|p| p.rx_id), Some(6));
        assert_eq!(visit.payment.map(|p| p.payment_id), Some(2));
    }

    #[test]
    fn test_duplicate_encounter_replaces_in_place() {
        let mut later = encounter(1, at("2025-05-01", "09:00"));
        later.provider_name = "Dr. Wu".into();
        let history = PatientHistory {
            encounters: vec![
                encounter(1, at("2025-01-01", "09:00")),
                encounter(2, at("2025-02-01", "09:00")),
                later,
            ],
            ..Default::default()
        };
        let visits = aggregate(&history);
        assert_eq!(ids(&visits), vec![1, 2]);
        assert_eq!(visits[0].provider_name, "Dr. Wu");
        assert_eq!(visits[0].encounter_at, at("2025-05-01", "09:00"));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let history = PatientHistory {
            encounters: vec![
                encounter(1, at("2025-01-01", "09:00")),
                encounter(2, at("2025-02-01", "09:00")),
            ],
            diagnoses: vec![diagnosis(1, "A", "A", true)],
            lab_results: vec![lab(1, 2, Some(AbnormalFlag::Normal))],
            ..Default::default()
        };
        assert_eq!(aggregate(&history), aggregate(&history));
    }

    // ── partition_by_time ──

    #[test]
    fn test_partition_buckets_and_sort_order() {
        let history = PatientHistory {
            encounters: vec![
                encounter(1, at("2025-03-10", "09:00")),
                encounter(2, at("2025-03-14", "15:00")),
                encounter(3, at("2025-03-20", "09:00")),
                encounter(4, at("2025-03-16", "09:00")),
                encounter(5, at("2025-03-14", "08:00")),
                encounter(6, at("2025-03-12", "09:00")),
                encounter(7, at("2025-03-16", "08:00")),
            ],
            ..Default::default()
        };
        let buckets = partition_by_time(aggregate(&history), day("2025-03-14"));

        // Today keeps source order even though 5 is earlier in the day.
        assert_eq!(ids(&buckets.today), vec![2, 5]);
        assert_eq!(ids(&buckets.future), vec![7, 4, 3]);
        assert_eq!(ids(&buckets.past), vec![6, 1]);
        assert_eq!(buckets.len(), 7);
    }

    #[test]
    fn test_partition_loses_nothing() {
        let history = PatientHistory {
            encounters: (1..=20)
                .map(|i| encounter(i, at("2025-03-01", "09:00") + Duration::hours(i * 13)))
                .collect(),
            ..Default::default()
        };
        let visits = aggregate(&history);
        let buckets = partition_by_time(visits.clone(), day("2025-03-05"));
        assert_eq!(buckets.len(), visits.len());

        let mut seen = ids(&buckets.clone().into_display_order());
        seen.sort();
        assert_eq!(seen, (1..=20).collect::<Vec<_>>());

        assert!(buckets.future.windows(2).all(|w| w[0].encounter_at <= w[1].encounter_at));
        assert!(buckets.past.windows(2).all(|w| w[0].encounter_at >= w[1].encounter_at));
        assert!(buckets.today.iter().all(|v| v.encounter_date() == day("2025-03-05")));
    }

    #[test]
    fn test_display_order_is_today_future_past() {
        let history = PatientHistory {
            encounters: vec![
                encounter(1, at("2025-03-01", "09:00")),
                encounter(2, at("2025-03-30", "09:00")),
                encounter(3, at("2025-03-14", "09:00")),
                encounter(4, at("2025-03-20", "09:00")),
                encounter(5, at("2025-03-05", "09:00")),
            ],
            ..Default::default()
        };
        let ordered = order_for_display(aggregate(&history), day("2025-03-14"));
        assert_eq!(ids(&ordered), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn test_partition_empty() {
        let buckets = partition_by_time(Vec::new(), day("2025-03-14"));
        assert!(buckets.is_empty());
    }

    // ── primary_diagnosis_label ──

    #[test]
    fn test_label_primary_with_description() {
        let visit = visit_with(vec![diagnosis(1, "Flu", "Influenza", true)], None);
        assert_eq!(primary_diagnosis_label(&visit), "Flu");
    }

    #[test]
    fn test_label_primary_falls_back_to_disease_name() {
        let visit = visit_with(vec![diagnosis(1, "", "Influenza", true)], None);
        assert_eq!(primary_diagnosis_label(&visit), "Influenza");
    }

    #[test]
    fn test_label_without_primary_uses_first() {
        let visit = visit_with(
            vec![diagnosis(1, "A", "", false), diagnosis(1, "B", "", false)],
            None,
        );
        assert_eq!(primary_diagnosis_label(&visit), "A");
    }

    #[test]
    fn test_label_primary_beats_list_order() {
        let visit = visit_with(
            vec![diagnosis(1, "A", "", false), diagnosis(1, "B", "", true)],
            None,
        );
        assert_eq!(primary_diagnosis_label(&visit), "B");
    }

    #[test]
    fn test_label_no_diagnosis_uses_assessment() {
        let visit = visit_with(vec![], Some("stable"));
        assert_eq!(primary_diagnosis_label(&visit), "stable");
    }

    #[test]
    fn test_label_no_diagnosis_no_assessment() {
        assert_eq!(primary_diagnosis_label(&visit_with(vec![], None)), NO_DIAGNOSIS_LABEL);
        assert_eq!(primary_diagnosis_label(&visit_with(vec![], Some("  "))), NO_DIAGNOSIS_LABEL);
    }

    #[test]
    fn test_label_blank_diagnosis_does_not_reach_assessment() {
        let visit = visit_with(vec![diagnosis(1, " ", "", true)], Some("stable"));
        assert_eq!(primary_diagnosis_label(&visit), NO_DIAGNOSIS_LABEL);
    }

    // ── abnormal_lab_count ──

    #[test]
    fn test_abnormal_count_ignores_normal_and_absent() {
        let history = PatientHistory {
            encounters: vec![encounter(1, at("2025-03-14", "09:00"))],
            lab_results: vec![
                lab(1, 1, Some(AbnormalFlag::High)),
                lab(2, 1, Some(AbnormalFlag::Low)),
                lab(3, 1, Some(AbnormalFlag::Normal)),
                lab(4, 1, None),
            ],
            ..Default::default()
        };
        let visit = aggregate(&history).remove(0);
        assert_eq!(abnormal_lab_count(&visit), 2);
    }

    // ── display helpers ──

    #[test]
    fn test_reference_range_label() {
        let mut l = lab(1, 1, None);
        assert_eq!(reference_range_label(&l), "70 - 99");
        l.ref_high = None;
        assert_eq!(reference_range_label(&l), NOT_AVAILABLE);
    }

    #[test]
    fn test_payment_status() {
        assert_eq!(payment_status(&payment(1, 1, true)), PaymentStatus::Paid);
        assert_eq!(payment_status(&payment(1, 1, false)), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_summarize_visit() {
        let mut enc = encounter(1, at("2025-03-14", "09:00"));
        enc.department_name = None;
        let history = PatientHistory {
            encounters: vec![enc],
            diagnoses: vec![diagnosis(1, "Flu", "Influenza", true)],
            prescriptions: vec![prescription(5, 1)],
            lab_results: vec![lab(1, 1, Some(AbnormalFlag::High))],
            payments: vec![payment(1, 1, false)],
        };
        let summary = summarize(&aggregate(&history)[0]);
        assert_eq!(summary.primary_diagnosis, "Flu");
        assert_eq!(summary.department_name, UNKNOWN_DEPARTMENT);
        assert_eq!(summary.abnormal_labs, 1);
        assert_eq!(summary.prescription_items, 1);
        assert_eq!(summary.payment_status, Some(PaymentStatus::Unpaid));
    }

    #[test]
    fn test_count_records_uses_raw_bundle() {
        let history = PatientHistory {
            encounters: vec![encounter(1, at("2025-03-14", "09:00"))],
            lab_results: vec![lab(1, 1, None), lab(2, 99, None)],
            ..Default::default()
        };
        let counts = count_records(&history);
        assert_eq!(counts.encounters, 1);
        assert_eq!(counts.lab_results, 2);
        assert_eq!(counts.payments, 0);
    }

    // ── end to end ──

    #[test]
    fn test_yesterday_and_today_scenario() {
        let today = day("2025-03-14");
        let yesterday = today - Duration::days(1);
        let history = PatientHistory {
            encounters: vec![
                encounter(10, yesterday.and_hms_opt(10, 0, 0).unwrap()),
                encounter(11, today.and_hms_opt(9, 0, 0).unwrap()),
            ],
            diagnoses: vec![diagnosis(10, "Flu", "Influenza", true)],
            prescriptions: vec![prescription(1, 11)],
            lab_results: vec![lab(1, 99, Some(AbnormalFlag::High))],
            payments: vec![],
        };

        let visits = aggregate(&history);
        assert_eq!(visits.len(), 2);

        let v10 = visits.iter().find(|v| v.enct_id == 10).unwrap();
        let v11 = visits.iter().find(|v| v.enct_id == 11).unwrap();
        assert_eq!(v10.diagnoses.len(), 1);
        assert!(v10.prescription.is_none());
        assert!(v11.prescription.is_some());
        assert!(v11.diagnoses.is_empty());
        assert!(visits.iter().all(|v| v.lab_results.is_empty()));

        let buckets = partition_by_time(visits, today);
        assert_eq!(ids(&buckets.today), vec![11]);
        assert!(buckets.future.is_empty());
        assert_eq!(ids(&buckets.past), vec![10]);
    }
}

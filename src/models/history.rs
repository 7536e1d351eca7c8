use serde::{Deserialize, Serialize};

use super::diagnosis::Diagnosis;
use super::encounter::Encounter;
use super::lab::LabResult;
use super::payment::Payment;
use super::prescription::Prescription;

/// The flat bundle returned by both history endpoints.
///
/// The provider-side endpoint omits prescriptions and payments, so every
/// list defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientHistory {
    #[serde(default)]
    pub encounters: Vec<Encounter>,
    #[serde(default)]
    pub diagnoses: Vec<Diagnosis>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
    #[serde(default)]
    pub lab_results: Vec<LabResult>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

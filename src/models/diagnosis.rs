use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub enct_id: i64,
    #[serde(default)]
    pub code_icd: String,
    #[serde(default)]
    pub disease_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default, with = "timestamp::option")]
    pub encounter_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
}

/// Disease catalogue entry returned by the ICD search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseOption {
    pub code_icd: String,
    #[serde(default)]
    pub description: String,
}

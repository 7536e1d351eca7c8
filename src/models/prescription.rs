use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub rx_id: i64,
    pub enct_id: i64,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub items: Vec<PrescriptionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionItem {
    pub med_id: i64,
    #[serde(default)]
    pub med_name: String,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub days: u32,
    #[serde(default)]
    pub quantity: f64,
}

/// Drug catalogue entry returned by the medication search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationOption {
    pub med_id: i64,
    #[serde(default)]
    pub name: String,
    /// Pack strength, e.g. "500mg x 20".
    #[serde(default, rename = "spec")]
    pub strength: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

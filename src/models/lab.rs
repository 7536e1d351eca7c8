use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::enums::AbnormalFlag;
use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub lab_id: i64,
    pub enct_id: i64,
    #[serde(default)]
    pub loinc_code: Option<String>,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub ref_low: Option<String>,
    #[serde(default)]
    pub ref_high: Option<String>,
    #[serde(default, deserialize_with = "blank_flag_as_none")]
    pub abnormal_flag: Option<AbnormalFlag>,
    #[serde(default, with = "timestamp::option")]
    pub reported_at: Option<NaiveDateTime>,
}

impl LabResult {
    pub fn is_abnormal(&self) -> bool {
        self.abnormal_flag.is_some_and(|f| f.is_abnormal())
    }
}

/// An empty flag column means "not assessed", same as null.
fn blank_flag_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<AbnormalFlag>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::PaymentMethod;
use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub enct_id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(default)]
    pub invoice_no: Option<String>,
    /// Absent until the bill is settled.
    #[serde(default, with = "timestamp::option")]
    pub paid_at: Option<NaiveDateTime>,
}

impl Payment {
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Sex;

/// The identity fields every login response carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub national_id: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub dept_id: Option<i64>,
    #[serde(default)]
    pub license_no: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub dept_id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<&Patient> for SessionUser {
    fn from(p: &Patient) -> Self {
        Self {
            user_id: p.user_id,
            name: p.name.clone(),
        }
    }
}

impl From<&Provider> for SessionUser {
    fn from(p: &Provider) -> Self {
        Self {
            user_id: p.user_id,
            name: p.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentCategory {
    pub category: String,
    #[serde(default)]
    pub departments: Vec<Department>,
}

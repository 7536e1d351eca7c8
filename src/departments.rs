//! Department page: a department's open sessions, grouped by day.
//!
//! Only sessions from today on are listed. Days come in date order and each
//! day's sessions in start-time order.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::{ClinicSession, Department};
use crate::schedule::start_of;

/// Shown when the API leaves a session's provider name out.
pub const UNNAMED_PROVIDER: &str = "Doctor";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSlot {
    #[serde(flatten)]
    pub session: ClinicSession,
    pub doctor_name: String,
    pub remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDay {
    pub date: NaiveDate,
    pub weekday_label: &'static str,
    pub sessions: Vec<SessionSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSchedule {
    pub department: Department,
    pub days: Vec<SessionDay>,
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Drops sessions dated before `today` and groups the rest by date.
pub fn group_upcoming_sessions(sessions: Vec<ClinicSession>, today: NaiveDate) -> Vec<SessionDay> {
    let mut upcoming: Vec<ClinicSession> = sessions
        .into_iter()
        .filter(|s| s.date >= today)
        .collect();
    upcoming.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| start_of(a).cmp(&start_of(b)))
    });

    let mut days: Vec<SessionDay> = Vec::new();
    for session in upcoming {
        let slot = SessionSlot {
            doctor_name: session
                .provider_name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNNAMED_PROVIDER.to_string()),
            remaining: session.remaining_capacity(),
            session,
        };
        match days.last_mut() {
            Some(day) if day.date == slot.session.date => day.sessions.push(slot),
            _ => days.push(SessionDay {
                date: slot.session.date,
                weekday_label: weekday_label(slot.session.date.weekday()),
                sessions: vec![slot],
            }),
        }
    }

    tracing::debug!(days = days.len(), "Grouped department sessions");
    days
}

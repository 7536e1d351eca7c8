//! Provider session board and appointment status badges.
//!
//! Sessions are split into active / upcoming / cancelled around the current
//! wall-clock minute. Appointment codes map to a badge and the actions each
//! side may take on them.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{AppointmentStatus, ClinicSession, SessionPeriod, SessionStatus};

impl SessionPeriod {
    /// Fixed clinic hours for each period.
    pub fn time_window(&self) -> (NaiveTime, NaiveTime) {
        let (start, end) = match self {
            Self::Morning => (9, 12),
            Self::Afternoon => (14, 17),
            Self::Evening => (18, 21),
        };
        (hour(start), hour(end))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl ClinicSession {
    /// Explicit start/end when both are present, otherwise the period's hours.
    pub fn time_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => self.period.map(|p| p.time_window()),
        }
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.booked_count)
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionCategories {
    /// In progress right now.
    pub active: Vec<ClinicSession>,
    /// Date then start time.
    pub upcoming: Vec<ClinicSession>,
    /// Stopped by the provider, or already over.
    pub cancelled: Vec<ClinicSession>,
}

/// Splits a provider's sessions around `now`.
///
/// Comparison is at minute precision and both window ends are inclusive.
pub fn categorize_sessions(sessions: Vec<ClinicSession>, now: NaiveDateTime) -> SessionCategories {
    let today = now.date();
    let minute = truncate_to_minute(now.time());
    let mut categories = SessionCategories::default();

    for session in sessions {
        if session.status == SessionStatus::Stopped {
            categories.cancelled.push(session);
            continue;
        }

        if session.date > today {
            categories.upcoming.push(session);
            continue;
        }
        if session.date < today {
            categories.cancelled.push(session);
            continue;
        }

        match session.time_window() {
            Some((start, _)) if minute < truncate_to_minute(start) => {
                categories.upcoming.push(session)
            }
            Some((_, end)) if minute > truncate_to_minute(end) => {
                categories.cancelled.push(session)
            }
            _ => categories.active.push(session),
        }
    }

    categories.upcoming.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| start_of(a).cmp(&start_of(b)))
    });

    categories
}

pub(crate) fn start_of(session: &ClinicSession) -> NaiveTime {
    session.time_window().map_or(NaiveTime::MIN, |(start, _)| start)
}

fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

// ═══════════════════════════════════════════════════════════
// Appointment badges
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub text: &'static str,
    pub css_class: &'static str,
}

pub fn status_badge(status: AppointmentStatus) -> StatusBadge {
    let (text, css_class) = match status {
        AppointmentStatus::Booked => ("Booked", "status-booked"),
        AppointmentStatus::CheckedIn => ("Checked in", "status-checked-in"),
        AppointmentStatus::Completed => ("Completed", "status-completed"),
        AppointmentStatus::Cancelled => ("Cancelled", "status-cancelled"),
        AppointmentStatus::NoShow => ("No-show", "status-no-show"),
        AppointmentStatus::Waitlisted => ("Waitlisted", "status-waitlisted"),
        AppointmentStatus::Unknown(_) => ("Unknown", "status-unknown"),
    };
    StatusBadge { text, css_class }
}

/// Patients may cancel a booking they have not attended yet.
pub fn patient_can_cancel(status: AppointmentStatus) -> bool {
    matches!(status, AppointmentStatus::Booked | AppointmentStatus::NoShow)
}

pub fn patient_can_check_in(status: AppointmentStatus) -> bool {
    matches!(status, AppointmentStatus::Booked | AppointmentStatus::NoShow)
}

pub fn provider_can_start_encounter(status: AppointmentStatus) -> bool {
    status == AppointmentStatus::CheckedIn
}

/// Completed and later codes have a record to open.
pub fn provider_can_view_record(status: AppointmentStatus) -> bool {
    status.as_i32() >= AppointmentStatus::Completed.as_i32()
}

// lib/src/views/dashboard.rs

use chrono::NaiveDate;
use serde::Serialize;

use models::{Appointment, AppointmentStatus, Patient, QueueEntry, QueueStatus};

/// The four stat-card counts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub todays_appointments: usize,
    pub waiting_patients: usize,
    pub completed_today: usize,
}

/// Appointments dated exactly `today`, regardless of their time component.
pub fn todays_appointments(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date == today).collect()
}

/// Today's still-pending schedule: completed and cancelled dropped, sorted
/// ascending by time, capped at five entries.
pub fn upcoming_today(appointments: &[Appointment], today: NaiveDate) -> Vec<&Appointment> {
    let mut upcoming: Vec<&Appointment> = todays_appointments(appointments, today)
        .into_iter()
        .filter(|a| {
            a.status != AppointmentStatus::Completed && a.status != AppointmentStatus::Cancelled
        })
        .collect();
    upcoming.sort_by_key(|a| a.time);
    upcoming.truncate(5);
    upcoming
}

pub fn dashboard_stats(
    patients: &[Patient],
    appointments: &[Appointment],
    queue: &[QueueEntry],
    today: NaiveDate,
) -> DashboardStats {
    let waiting_patients = queue
        .iter()
        .filter(|e| e.status == QueueStatus::Waiting || e.status == QueueStatus::CheckedIn)
        .count();
    let completed_today = queue
        .iter()
        .filter(|e| e.status == QueueStatus::Completed && e.check_in_time.date_naive() == today)
        .count();
    DashboardStats {
        total_patients: patients.len(),
        todays_appointments: todays_appointments(appointments, today).len(),
        waiting_patients,
        completed_today,
    }
}

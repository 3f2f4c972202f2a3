// lib/src/views/patient.rs

use chrono::NaiveDate;
use serde::Serialize;

use models::{Appointment, AppointmentStatus};

/// The stat cards on the patient detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitStats {
    /// Completed appointments.
    pub total_visits: usize,
    /// Scheduled or confirmed appointments.
    pub upcoming_appointments: usize,
    /// Date of the most recent completed appointment, if any.
    pub last_visit: Option<NaiveDate>,
    pub no_shows: usize,
}

pub fn visit_stats(appointments: &[Appointment], patient_id: i32) -> VisitStats {
    let own = || appointments.iter().filter(move |a| a.patient_id == patient_id);

    let total_visits = own().filter(|a| a.status == AppointmentStatus::Completed).count();
    let upcoming_appointments = own()
        .filter(|a| {
            a.status == AppointmentStatus::Scheduled || a.status == AppointmentStatus::Confirmed
        })
        .count();
    let last_visit = own()
        .filter(|a| a.status == AppointmentStatus::Completed)
        .map(|a| a.date)
        .max();
    let no_shows = own().filter(|a| a.status == AppointmentStatus::NoShow).count();

    VisitStats {
        total_visits,
        upcoming_appointments,
        last_visit,
        no_shows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Utc};

    fn appointment(patient_id: i32, date: (i32, u32, u32), status: AppointmentStatus) -> Appointment {
        Appointment {
            id: 0,
            patient_id,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 30,
            reason: "Checkup".to_string(),
            notes: None,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_count_visits_upcoming_and_no_shows_for_one_patient() {
        let appointments = vec![
            appointment(1, (2026, 3, 10), AppointmentStatus::Completed),
            appointment(1, (2026, 6, 2), AppointmentStatus::Completed),
            appointment(1, (2026, 9, 14), AppointmentStatus::Scheduled),
            appointment(1, (2026, 9, 21), AppointmentStatus::Confirmed),
            appointment(1, (2026, 1, 5), AppointmentStatus::NoShow),
            appointment(2, (2026, 6, 2), AppointmentStatus::Completed), // other patient
        ];
        let stats = visit_stats(&appointments, 1);
        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.upcoming_appointments, 2);
        assert_eq!(stats.no_shows, 1);
        // Most recent completed, not the first encountered.
        assert_eq!(stats.last_visit, NaiveDate::from_ymd_opt(2026, 6, 2));
    }

    #[test]
    fn should_report_no_last_visit_without_a_completed_appointment() {
        let appointments = vec![appointment(1, (2026, 9, 14), AppointmentStatus::Scheduled)];
        let stats = visit_stats(&appointments, 1);
        assert_eq!(stats.last_visit, None);
        assert_eq!(stats.total_visits, 0);
    }
}

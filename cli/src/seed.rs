// cli/src/seed.rs

//! Demo fixtures, built relative to today so the dashboard and queue views
//! have something to show.

use chrono::{Duration, Local, Months, NaiveDate, NaiveTime, Utc};

use lib::store::{ClinicStores, StoreLatency};
use models::{Appointment, AppointmentStatus, Patient, QueueEntry, QueueStatus};

pub fn demo_stores(latency: StoreLatency) -> ClinicStores {
    let today = Local::now().date_naive();
    ClinicStores::with_records(patients(), appointments(today), queue(), latency)
}

fn patient(id: i32, first: &str, last: &str, phone: &str, email: &str) -> Patient {
    Patient {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: None,
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
        address: None,
        emergency_contact: None,
        notes: None,
        created_at: Utc::now() - Duration::days(90),
    }
}

fn patients() -> Vec<Patient> {
    vec![
        patient(1, "Sarah", "Johnson", "555-0142", "sarah.johnson@example.com"),
        patient(2, "Miguel", "Alvarez", "555-0187", "miguel.alvarez@example.com"),
        patient(3, "Priya", "Patel", "555-0123", "priya.patel@example.com"),
        patient(4, "James", "O'Brien", "555-0165", "james.obrien@example.com"),
        patient(5, "Lena", "Fischer", "555-0178", "lena.fischer@example.com"),
    ]
}

fn appointment(
    id: i32,
    patient_id: i32,
    date: NaiveDate,
    time: (u32, u32),
    reason: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id,
        patient_id,
        date,
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).expect("valid seed time"),
        duration_minutes: 30,
        reason: reason.to_string(),
        notes: None,
        status,
        created_at: Utc::now() - Duration::days(14),
    }
}

fn appointments(today: NaiveDate) -> Vec<Appointment> {
    let last_month = today - Months::new(1);
    let two_back = today - Months::new(2);
    vec![
        // Today's schedule.
        appointment(1, 1, today, (9, 0), "Annual checkup", AppointmentStatus::CheckedIn),
        appointment(2, 2, today, (9, 30), "Flu symptoms", AppointmentStatus::InProgress),
        appointment(3, 3, today, (10, 15), "Blood pressure follow-up", AppointmentStatus::Confirmed),
        appointment(4, 4, today, (11, 0), "Annual checkup", AppointmentStatus::Scheduled),
        appointment(5, 5, today, (14, 0), "Vaccination", AppointmentStatus::Scheduled),
        appointment(6, 1, today, (8, 15), "Lab results", AppointmentStatus::Completed),
        // History for the reports.
        appointment(7, 2, last_month, (10, 0), "Annual checkup", AppointmentStatus::Completed),
        appointment(8, 3, last_month, (11, 0), "Flu symptoms", AppointmentStatus::Completed),
        appointment(9, 4, last_month, (15, 30), "Vaccination", AppointmentStatus::NoShow),
        appointment(10, 5, two_back, (9, 45), "Annual checkup", AppointmentStatus::Completed),
        appointment(11, 1, two_back, (13, 0), "Back pain", AppointmentStatus::Cancelled),
        appointment(12, 2, two_back, (16, 0), "Annual checkup", AppointmentStatus::Completed),
    ]
}

fn queue() -> Vec<QueueEntry> {
    let now = Utc::now();
    vec![
        QueueEntry {
            id: 1,
            appointment_id: 1,
            check_in_time: now - Duration::minutes(25),
            consultation_start: None,
            consultation_end: None,
            status: QueueStatus::CheckedIn,
        },
        QueueEntry {
            id: 2,
            appointment_id: 2,
            check_in_time: now - Duration::minutes(70),
            consultation_start: Some(now - Duration::minutes(20)),
            consultation_end: None,
            status: QueueStatus::InConsultation,
        },
        QueueEntry {
            id: 3,
            appointment_id: 6,
            check_in_time: now - Duration::minutes(130),
            consultation_start: Some(now - Duration::minutes(110)),
            consultation_end: Some(now - Duration::minutes(85)),
            status: QueueStatus::Completed,
        },
    ]
}

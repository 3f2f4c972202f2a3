// lib/src/views/queue.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use models::{Appointment, Patient, QueueEntry, QueueStatus};

/// A queue entry joined to its appointment and patient for display.
#[derive(Debug, Clone)]
pub struct QueueRow<'a> {
    pub entry: &'a QueueEntry,
    pub appointment: &'a Appointment,
    pub patient: &'a Patient,
}

/// The three columns of the queue screen.
#[derive(Debug, Clone, Default)]
pub struct QueueBoard<'a> {
    pub waiting: Vec<QueueRow<'a>>,
    pub in_consultation: Vec<QueueRow<'a>>,
    pub completed: Vec<QueueRow<'a>>,
}

/// Partitions queue entries into display buckets, joining each to its
/// appointment and patient. An entry whose appointment or patient cannot be
/// resolved is dropped from every bucket rather than rendered broken. The
/// waiting column lists checked-in entries ahead of waiting ones, preserving
/// store order within each group.
pub fn queue_board<'a>(
    entries: &'a [QueueEntry],
    appointments: &'a [Appointment],
    patients: &'a [Patient],
) -> QueueBoard<'a> {
    let appointments_by_id: HashMap<i32, &Appointment> =
        appointments.iter().map(|a| (a.id, a)).collect();
    let patients_by_id: HashMap<i32, &Patient> = patients.iter().map(|p| (p.id, p)).collect();

    let join = |entry: &'a QueueEntry| -> Option<QueueRow<'a>> {
        let appointment = appointments_by_id.get(&entry.appointment_id)?;
        let patient = patients_by_id.get(&appointment.patient_id)?;
        Some(QueueRow {
            entry,
            appointment,
            patient,
        })
    };

    let rows_with = |status: QueueStatus| -> Vec<QueueRow<'a>> {
        entries
            .iter()
            .filter(|e| e.status == status)
            .filter_map(join)
            .collect()
    };

    let mut waiting = rows_with(QueueStatus::CheckedIn);
    waiting.extend(rows_with(QueueStatus::Waiting));

    QueueBoard {
        waiting,
        in_consultation: rows_with(QueueStatus::InConsultation),
        completed: rows_with(QueueStatus::Completed),
    }
}

/// Elapsed time from `since` to `now`, as `"45m"` under an hour and
/// `"2h 5m"` from an hour up. Minutes are floored; a future timestamp
/// clamps to `"0m"`.
pub fn format_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - since).num_minutes().max(0);
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

// lib/src/workflow.rs

//! The check-in workflow. Queue and appointment statuses are separate
//! vocabularies kept loosely in sync here, by the caller, one awaited
//! mutation at a time — the stores themselves enforce nothing.

use chrono::{DateTime, Utc};

use models::errors::{ClinicError, ClinicResult};
use models::{AppointmentPatch, NewQueueEntry, QueueEntry, QueueEntryPatch, QueueStatus};

use crate::store::{ClinicStores, Record, RecordStore};

/// Checks a patient in for an appointment: creates the queue entry and flips
/// the appointment to `checked-in`. Fails with `NotFound` if the appointment
/// does not exist.
pub async fn check_in(
    stores: &ClinicStores,
    appointment_id: i32,
    now: DateTime<Utc>,
) -> ClinicResult<QueueEntry> {
    let appointment = stores
        .appointments
        .get_by_id(appointment_id)
        .await?
        .ok_or_else(|| ClinicError::not_found(models::Appointment::ENTITY, appointment_id))?;

    let entry = stores
        .queue
        .create(NewQueueEntry {
            appointment_id: appointment.id,
            check_in_time: now,
            status: QueueStatus::CheckedIn,
        })
        .await?;

    stores
        .appointments
        .update(
            appointment.id,
            AppointmentPatch::status(models::AppointmentStatus::CheckedIn),
        )
        .await?;

    log::info!("checked in appointment {} as queue entry {}", appointment.id, entry.id);
    Ok(entry)
}

/// Moves a queue entry to a new status. Entering consultation stamps
/// `consultation_start`; completing stamps `consultation_end`. The linked
/// appointment's status is mirrored when the appointment still resolves; a
/// dangling appointment id is tolerated silently.
pub async fn set_queue_status(
    stores: &ClinicStores,
    entry_id: i32,
    status: QueueStatus,
    now: DateTime<Utc>,
) -> ClinicResult<QueueEntry> {
    let entry = stores
        .queue
        .get_by_id(entry_id)
        .await?
        .ok_or_else(|| ClinicError::not_found(QueueEntry::ENTITY, entry_id))?;

    let mut patch = QueueEntryPatch {
        status: Some(status),
        ..QueueEntryPatch::default()
    };
    match status {
        QueueStatus::InConsultation => patch.consultation_start = Some(now),
        QueueStatus::Completed => patch.consultation_end = Some(now),
        _ => {}
    }
    let updated = stores.queue.update(entry_id, patch).await?;

    if let Some(appointment) = stores.appointments.get_by_id(entry.appointment_id).await? {
        stores
            .appointments
            .update(appointment.id, AppointmentPatch::status(status.appointment_status()))
            .await?;
        log::info!(
            "queue entry {} -> {}, appointment {} -> {}",
            entry_id,
            status,
            appointment.id,
            status.appointment_status()
        );
    } else {
        log::warn!(
            "queue entry {} references missing appointment {}",
            entry_id,
            entry.appointment_id
        );
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreLatency;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use models::{AppointmentStatus, NewAppointment};

    async fn seeded() -> (ClinicStores, i32) {
        let stores = ClinicStores::new(StoreLatency::none());
        let appointment = stores
            .appointments
            .create(NewAppointment {
                patient_id: 1,
                date: NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                duration_minutes: 30,
                reason: "Checkup".to_string(),
                notes: None,
                status: AppointmentStatus::Confirmed,
            })
            .await
            .unwrap();
        (stores, appointment.id)
    }

    #[tokio::test]
    async fn should_create_an_entry_and_flip_the_appointment_on_check_in() {
        let (stores, appointment_id) = seeded().await;
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 8, 45, 0).unwrap();

        let entry = check_in(&stores, appointment_id, now).await.unwrap();
        assert_eq!(entry.status, QueueStatus::CheckedIn);
        assert_eq!(entry.check_in_time, now);

        let appointment = stores
            .appointments
            .get_by_id(appointment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::CheckedIn);
    }

    #[tokio::test]
    async fn should_fail_check_in_for_a_missing_appointment() {
        let stores = ClinicStores::new(StoreLatency::none());
        let err = check_in(&stores, 99, Utc::now()).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(stores.queue.is_empty().await);
    }

    #[tokio::test]
    async fn should_stamp_consultation_timestamps_and_mirror_the_status() {
        let (stores, appointment_id) = seeded().await;
        let checked_in = Utc.with_ymd_and_hms(2026, 8, 29, 8, 45, 0).unwrap();
        let started = Utc.with_ymd_and_hms(2026, 8, 29, 9, 5, 0).unwrap();
        let finished = Utc.with_ymd_and_hms(2026, 8, 29, 9, 35, 0).unwrap();

        let entry = check_in(&stores, appointment_id, checked_in).await.unwrap();

        let entry = set_queue_status(&stores, entry.id, QueueStatus::InConsultation, started)
            .await
            .unwrap();
        assert_eq!(entry.consultation_start, Some(started));
        assert_eq!(entry.consultation_end, None);
        let appointment = stores
            .appointments
            .get_by_id(appointment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::InProgress);

        let entry = set_queue_status(&stores, entry.id, QueueStatus::Completed, finished)
            .await
            .unwrap();
        assert_eq!(entry.consultation_start, Some(started));
        assert_eq!(entry.consultation_end, Some(finished));
        let appointment = stores
            .appointments
            .get_by_id(appointment_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Completed);
    }

    #[tokio::test]
    async fn should_tolerate_a_dangling_appointment_when_updating_the_queue() {
        let (stores, appointment_id) = seeded().await;
        let entry = check_in(&stores, appointment_id, Utc::now()).await.unwrap();

        stores.appointments.delete(appointment_id).await.unwrap();

        let updated = set_queue_status(&stores, entry.id, QueueStatus::Completed, Utc::now())
            .await
            .unwrap();
        assert_eq!(updated.status, QueueStatus::Completed);
    }
}

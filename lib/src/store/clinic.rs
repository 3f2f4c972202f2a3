// lib/src/store/clinic.rs

use chrono::NaiveDate;

use models::errors::ClinicResult;
use models::{Appointment, Patient, QueueEntry, QueueStatus};

use super::latency::StoreLatency;
use super::memory::MemoryStore;
use super::record::RecordStore;

/// The three independent entity stores, bundled for handlers and views.
/// Construction is explicit; nothing here is ambient shared state.
#[derive(Debug, Clone)]
pub struct ClinicStores {
    pub patients: MemoryStore<Patient>,
    pub appointments: MemoryStore<Appointment>,
    pub queue: MemoryStore<QueueEntry>,
}

impl ClinicStores {
    pub fn new(latency: StoreLatency) -> Self {
        ClinicStores {
            patients: MemoryStore::new(latency),
            appointments: MemoryStore::new(latency),
            queue: MemoryStore::new(latency),
        }
    }

    /// Seeds all three stores, e.g. with demo fixtures.
    pub fn with_records(
        patients: Vec<Patient>,
        appointments: Vec<Appointment>,
        queue: Vec<QueueEntry>,
        latency: StoreLatency,
    ) -> Self {
        ClinicStores {
            patients: MemoryStore::with_records(patients, latency),
            appointments: MemoryStore::with_records(appointments, latency),
            queue: MemoryStore::with_records(queue, latency),
        }
    }

    pub async fn appointments_for_patient(&self, patient_id: i32) -> ClinicResult<Vec<Appointment>> {
        let all = self.appointments.get_all().await?;
        Ok(all.into_iter().filter(|a| a.patient_id == patient_id).collect())
    }

    /// Appointments whose date falls in `start..=end`.
    pub async fn appointments_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClinicResult<Vec<Appointment>> {
        let all = self.appointments.get_all().await?;
        Ok(all
            .into_iter()
            .filter(|a| a.date >= start && a.date <= end)
            .collect())
    }

    pub async fn queue_by_status(&self, status: QueueStatus) -> ClinicResult<Vec<QueueEntry>> {
        let all = self.queue.get_all().await?;
        Ok(all.into_iter().filter(|e| e.status == status).collect())
    }

    /// Entries checked in on `today` (calendar comparison on the check-in
    /// timestamp's date).
    pub async fn today_queue(&self, today: NaiveDate) -> ClinicResult<Vec<QueueEntry>> {
        let all = self.queue.get_all().await?;
        Ok(all
            .into_iter()
            .filter(|e| e.check_in_time.date_naive() == today)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone, Utc};
    use models::{AppointmentStatus, NewAppointment, NewQueueEntry};

    fn appointment_draft(patient_id: i32, date: NaiveDate) -> NewAppointment {
        NewAppointment {
            patient_id,
            date,
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_minutes: 30,
            reason: "Follow-up".to_string(),
            notes: None,
            status: AppointmentStatus::Scheduled,
        }
    }

    #[tokio::test]
    async fn should_filter_appointments_by_patient_and_date_range() {
        let stores = ClinicStores::new(StoreLatency::none());
        let d1 = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 8, 20).unwrap();
        stores.appointments.create(appointment_draft(1, d1)).await.unwrap();
        stores.appointments.create(appointment_draft(2, d2)).await.unwrap();

        let for_one = stores.appointments_for_patient(1).await.unwrap();
        assert_eq!(for_one.len(), 1);
        assert_eq!(for_one[0].patient_id, 1);

        let in_range = stores
            .appointments_in_range(
                NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].date, d2);
    }

    #[tokio::test]
    async fn should_select_todays_queue_by_check_in_date() {
        let stores = ClinicStores::new(StoreLatency::none());
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let this_morning = Utc.with_ymd_and_hms(2026, 8, 29, 8, 15, 0).unwrap();
        let yesterday = Utc.with_ymd_and_hms(2026, 8, 28, 8, 15, 0).unwrap();

        stores
            .queue
            .create(NewQueueEntry {
                appointment_id: 1,
                check_in_time: this_morning,
                status: QueueStatus::CheckedIn,
            })
            .await
            .unwrap();
        stores
            .queue
            .create(NewQueueEntry {
                appointment_id: 2,
                check_in_time: yesterday,
                status: QueueStatus::Completed,
            })
            .await
            .unwrap();

        let todays = stores.today_queue(today).await.unwrap();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].appointment_id, 1);

        let completed = stores.queue_by_status(QueueStatus::Completed).await.unwrap();
        assert_eq!(completed.len(), 1);
    }
}

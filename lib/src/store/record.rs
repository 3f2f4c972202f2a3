// lib/src/store/record.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use models::errors::ClinicResult;
use models::{
    Appointment, AppointmentPatch, NewAppointment, NewPatient, NewQueueEntry, Patient,
    PatientPatch, QueueEntry, QueueEntryPatch,
};

/// Ties an entity to its draft (creation fields) and patch (partial update)
/// types so a store can be generic over all three clinic collections.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    /// Entity name used in `NotFound` errors and log lines.
    const ENTITY: &'static str;

    fn id(&self) -> i32;

    /// Materializes a record from a validated draft. `created_at` is the
    /// store's creation timestamp; entities without such a field ignore it.
    fn from_draft(id: i32, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// Merges a patch: provided fields overwrite, absent fields are kept.
    fn apply(&mut self, patch: Self::Patch);
}

/// The asynchronous CRUD contract every entity store exposes. Drafts are
/// validated by the caller before `create` is invoked; the store itself never
/// rejects on validation grounds.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Returns a copy of every record; the result never aliases internal
    /// storage.
    async fn get_all(&self) -> ClinicResult<Vec<T>>;

    /// Absent is a valid, non-error outcome.
    async fn get_by_id(&self, id: i32) -> ClinicResult<Option<T>>;

    async fn create(&self, draft: T::Draft) -> ClinicResult<T>;

    /// Merges `patch` into the stored record and returns the merged record.
    /// Fails with `NotFound` if the id is absent.
    async fn update(&self, id: i32, patch: T::Patch) -> ClinicResult<T>;

    /// Fails with `NotFound` if the id is absent. No cascading deletes.
    async fn delete(&self, id: i32) -> ClinicResult<bool>;
}

impl Record for Patient {
    type Draft = NewPatient;
    type Patch = PatientPatch;

    const ENTITY: &'static str = "patient";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewPatient, created_at: DateTime<Utc>) -> Self {
        Patient {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_birth: draft.date_of_birth,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            emergency_contact: draft.emergency_contact,
            notes: draft.notes,
            created_at,
        }
    }

    fn apply(&mut self, patch: PatientPatch) {
        Patient::apply(self, patch);
    }
}

impl Record for Appointment {
    type Draft = NewAppointment;
    type Patch = AppointmentPatch;

    const ENTITY: &'static str = "appointment";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewAppointment, created_at: DateTime<Utc>) -> Self {
        Appointment {
            id,
            patient_id: draft.patient_id,
            date: draft.date,
            time: draft.time,
            duration_minutes: draft.duration_minutes,
            reason: draft.reason,
            notes: draft.notes,
            status: draft.status,
            created_at,
        }
    }

    fn apply(&mut self, patch: AppointmentPatch) {
        Appointment::apply(self, patch);
    }
}

impl Record for QueueEntry {
    type Draft = NewQueueEntry;
    type Patch = QueueEntryPatch;

    const ENTITY: &'static str = "queue entry";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewQueueEntry, _created_at: DateTime<Utc>) -> Self {
        QueueEntry {
            id,
            appointment_id: draft.appointment_id,
            check_in_time: draft.check_in_time,
            consultation_start: None,
            consultation_end: None,
            status: draft.status,
        }
    }

    fn apply(&mut self, patch: QueueEntryPatch) {
        QueueEntry::apply(self, patch);
    }
}

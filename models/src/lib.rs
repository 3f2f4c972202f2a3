// models/src/lib.rs

pub mod appointment;
pub mod errors;
pub mod patient;
pub mod queue_entry;
pub mod status;

pub use appointment::{Appointment, AppointmentPatch, NewAppointment};
pub use errors::{ClinicError, ClinicResult, ValidationError};
pub use patient::{NewPatient, Patient, PatientPatch};
pub use queue_entry::{NewQueueEntry, QueueEntry, QueueEntryPatch};
pub use status::{AppointmentStatus, QueueStatus, StatusCategory};

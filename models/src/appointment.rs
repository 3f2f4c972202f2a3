// models/src/appointment.rs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::status::AppointmentStatus;

/// A scheduled visit. `patient_id` is a foreign key into the patient store,
/// deliberately unenforced: a deleted patient leaves the appointment dangling
/// and views drop the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn apply(&mut self, patch: AppointmentPatch) {
        if let Some(patient_id) = patch.patient_id {
            self.patient_id = patient_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Fields supplied when scheduling; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: i32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

impl NewAppointment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.patient_id < 1 {
            return Err(ValidationError::MissingField("patient"));
        }
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingField("reason for visit"));
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(())
    }
}

/// Partial update: `Some` overwrites the field, `None` leaves it untouched.
/// Any status may be written over any other; no transition table exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentPatch {
    pub patient_id: Option<i32>,
    pub date: Option<NaiveDate>,
    #[serde(with = "hhmm::option")]
    pub time: Option<NaiveTime>,
    pub duration_minutes: Option<u32>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        AppointmentPatch {
            status: Some(status),
            ..AppointmentPatch::default()
        }
    }
}

/// Serde helpers for the zero-padded `"HH:MM"` wire form of appointment times.
/// `NaiveTime`'s `Ord` agrees with lexicographic order on that form.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{self, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let s: Option<String> = Option::deserialize(deserializer)?;
            match s {
                Some(s) => NaiveTime::parse_from_str(&s, super::FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

// models/src/queue_entry.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::QueueStatus;

/// Check-in-to-completion tracking for a single visit, distinct from the
/// appointment it originated from. `appointment_id` is an unenforced foreign
/// key; views drop entries whose appointment no longer resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEntry {
    pub id: i32,
    pub appointment_id: i32,
    pub check_in_time: DateTime<Utc>,
    #[serde(default)]
    pub consultation_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub consultation_end: Option<DateTime<Utc>>,
    pub status: QueueStatus,
}

impl QueueEntry {
    pub fn apply(&mut self, patch: QueueEntryPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(consultation_start) = patch.consultation_start {
            self.consultation_start = Some(consultation_start);
        }
        if let Some(consultation_end) = patch.consultation_end {
            self.consultation_end = Some(consultation_end);
        }
    }
}

/// Fields supplied at check-in; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQueueEntry {
    pub appointment_id: i32,
    pub check_in_time: DateTime<Utc>,
    pub status: QueueStatus,
}

/// Partial update: `Some` overwrites the field, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueEntryPatch {
    pub status: Option<QueueStatus>,
    pub consultation_start: Option<DateTime<Utc>>,
    pub consultation_end: Option<DateTime<Utc>>,
}

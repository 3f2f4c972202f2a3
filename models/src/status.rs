// models/src/status.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual category a status maps to, used purely for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Info,
    Success,
    Warning,
    Error,
}

/// The lifecycle of an appointment. No transition table is enforced: any
/// update may set any status, matching the behavior of the system this models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 7] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::CheckedIn,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::CheckedIn => "checked-in",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no-show",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            AppointmentStatus::Scheduled | AppointmentStatus::Confirmed => StatusCategory::Info,
            AppointmentStatus::CheckedIn | AppointmentStatus::InProgress => StatusCategory::Warning,
            AppointmentStatus::Completed => StatusCategory::Success,
            AppointmentStatus::Cancelled | AppointmentStatus::NoShow => StatusCategory::Error,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lifecycle of a queue entry. A separate vocabulary from
/// `AppointmentStatus` despite the overlapping labels; callers keep the two
/// loosely in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueueStatus {
    Waiting,
    CheckedIn,
    InConsultation,
    Completed,
}

impl QueueStatus {
    pub const ALL: [QueueStatus; 4] = [
        QueueStatus::Waiting,
        QueueStatus::CheckedIn,
        QueueStatus::InConsultation,
        QueueStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "waiting",
            QueueStatus::CheckedIn => "checked-in",
            QueueStatus::InConsultation => "in-consultation",
            QueueStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "Waiting",
            QueueStatus::CheckedIn => "Checked In",
            QueueStatus::InConsultation => "In Consultation",
            QueueStatus::Completed => "Completed",
        }
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            QueueStatus::Waiting | QueueStatus::CheckedIn => StatusCategory::Warning,
            QueueStatus::InConsultation => StatusCategory::Info,
            QueueStatus::Completed => StatusCategory::Success,
        }
    }

    /// The appointment-side status a caller mirrors this queue status onto.
    pub fn appointment_status(&self) -> AppointmentStatus {
        match self {
            QueueStatus::Waiting | QueueStatus::CheckedIn => AppointmentStatus::CheckedIn,
            QueueStatus::InConsultation => AppointmentStatus::InProgress,
            QueueStatus::Completed => AppointmentStatus::Completed,
        }
    }
}

impl fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_statuses_in_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::CheckedIn).unwrap(),
            "\"checked-in\""
        );
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::NoShow).unwrap(),
            "\"no-show\""
        );
        assert_eq!(
            serde_json::to_string(&QueueStatus::InConsultation).unwrap(),
            "\"in-consultation\""
        );
    }

    #[test]
    fn should_deserialize_every_status_from_its_string_form() {
        for status in AppointmentStatus::ALL {
            let json = format!("\"{}\"", status.as_str());
            let parsed: AppointmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
        for status in QueueStatus::ALL {
            let json = format!("\"{}\"", status.as_str());
            let parsed: QueueStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn should_map_completed_statuses_to_success() {
        assert_eq!(AppointmentStatus::Completed.category(), StatusCategory::Success);
        assert_eq!(QueueStatus::Completed.category(), StatusCategory::Success);
        assert_eq!(AppointmentStatus::NoShow.category(), StatusCategory::Error);
    }

    #[test]
    fn should_mirror_queue_statuses_onto_the_appointment_vocabulary() {
        assert_eq!(
            QueueStatus::InConsultation.appointment_status(),
            AppointmentStatus::InProgress
        );
        assert_eq!(
            QueueStatus::Completed.appointment_status(),
            AppointmentStatus::Completed
        );
    }
}

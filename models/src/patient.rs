// models/src/patient.rs

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

/// A registered patient. `id` is store-assigned; `created_at` is set at
/// creation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn apply(&mut self, patch: PatientPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(emergency_contact) = patch.emergency_contact {
            self.emergency_contact = Some(emergency_contact);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }
}

/// Fields supplied when registering a patient; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewPatient {
    /// Form-level validation, run before the draft ever reaches a store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingField("first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingField("last name"));
        }
        match &self.phone {
            Some(phone) if !phone.trim().is_empty() => {}
            _ => return Err(ValidationError::MissingField("phone number")),
        }
        if let Some(email) = &self.email {
            if !email.is_empty() && !EMAIL_RE.is_match(email) {
                return Err(ValidationError::InvalidEmail(email.clone()));
            }
        }
        Ok(())
    }
}

/// Partial update: `Some` overwrites the field, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub notes: Option<String>,
}

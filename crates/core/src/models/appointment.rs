use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SchedulingError, SchedulingResult};

/// One booked service instance.
///
/// `date` and `time` are kept as the display-formatted text the user
/// entered (`DD/MM/YYYY` and `HH:mm`), not as calendar types; two
/// appointments occupy the same slot only when both strings match exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_name: String,
    pub client_contact: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub service_description: Option<String>,
    pub collaborator: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// User-entered appointment fields, before an id is assigned.
///
/// Used both by the booking flow and by edits; validation runs before any
/// store access so a rejected draft never writes partial state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub client_name: String,
    pub client_contact: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub service_description: Option<String>,
    pub collaborator: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub done: bool,
}

impl AppointmentDraft {
    pub fn validate(&self) -> SchedulingResult<()> {
        if self.client_name.trim().is_empty() {
            return Err(SchedulingError::Validation(
                "Client name is required".to_string(),
            ));
        }
        if self.client_contact.trim().is_empty() {
            return Err(SchedulingError::Validation(
                "Client contact is required".to_string(),
            ));
        }
        if self.date.trim().is_empty() {
            return Err(SchedulingError::Validation("Date is required".to_string()));
        }
        if self.time.trim().is_empty() {
            return Err(SchedulingError::Validation("Time is required".to_string()));
        }
        if self.collaborator.trim().is_empty() {
            return Err(SchedulingError::Validation(
                "An assigned collaborator is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Appointment {
    /// Creates a new appointment from a validated draft, assigning a fresh
    /// id and creation timestamp.
    pub fn from_draft(draft: AppointmentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: draft.client_name,
            client_contact: draft.client_contact,
            date: draft.date,
            time: draft.time,
            service: draft.service,
            service_description: draft.service_description,
            collaborator: draft.collaborator,
            favorite: draft.favorite,
            done: draft.done,
            created_at: Utc::now(),
        }
    }

    /// Replaces the user-editable fields with those of `draft`, keeping the
    /// id and creation timestamp.
    pub fn apply_draft(&mut self, draft: AppointmentDraft) {
        self.client_name = draft.client_name;
        self.client_contact = draft.client_contact;
        self.date = draft.date;
        self.time = draft.time;
        self.service = draft.service;
        self.service_description = draft.service_description;
        self.collaborator = draft.collaborator;
        self.favorite = draft.favorite;
        self.done = draft.done;
    }

    /// True when `other` would occupy the same slot. The assigned
    /// collaborator is deliberately ignored: one slot, one booking.
    pub fn same_slot(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }

    /// Multi-line text summary of the appointment, as handed to the
    /// platform clipboard by the list view.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Client: {}", self.client_name),
            format!("Contact: {}", self.client_contact),
            format!("Date: {}", self.date),
            format!("Time: {}", self.time),
            format!("Service: {}", self.service),
        ];
        if let Some(description) = &self.service_description {
            lines.push(format!("Description: {}", description));
        }
        lines.push(format!("Collaborator: {}", self.collaborator));
        lines.join("\n")
    }
}

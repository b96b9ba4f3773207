use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{SchedulingError, SchedulingResult};

/// A staff member eligible for assignment to an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub name: String,
    pub tax_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollaboratorDraft {
    pub name: String,
    pub tax_id: Option<String>,
}

impl CollaboratorDraft {
    pub fn validate(&self) -> SchedulingResult<()> {
        if self.name.trim().is_empty() {
            return Err(SchedulingError::Validation(
                "Collaborator name is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl Collaborator {
    pub fn from_draft(draft: CollaboratorDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            tax_id: draft.tax_id,
            created_at: Utc::now(),
        }
    }
}

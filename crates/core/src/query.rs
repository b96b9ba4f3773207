//! Pure filter engine for the appointment list views.
//!
//! Filtering is recomputed from the full list on every change rather than
//! maintained incrementally; the functions here never mutate their input.

use serde::{Deserialize, Serialize};

use crate::models::appointment::Appointment;

/// Completion-status filter applied after the date/favorite stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Scheduled,
    Finished,
}

/// Criteria for one evaluation of the list view.
///
/// The date filter and the favorites filter are not independent: a
/// selected date takes precedence, and only when no date is selected does
/// the favorites-only flag apply. The status filter then narrows whatever
/// the first stage produced.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub selected_date: Option<String>,
    pub favorites_only: bool,
    pub status: StatusFilter,
    pub sort_by_name: bool,
}

/// Applies `criteria` to `all` and returns the display list.
///
/// Date matching is exact string equality on the display-formatted date,
/// so `01/01/2024` and `1/1/2024` are distinct. Result order is input
/// order unless `sort_by_name` is set, in which case entries are sorted by
/// client name (case-insensitive, stable — ties keep input order).
pub fn filter_appointments(all: &[Appointment], criteria: &FilterCriteria) -> Vec<Appointment> {
    let first_stage: Vec<&Appointment> = if let Some(date) = &criteria.selected_date {
        all.iter().filter(|a| &a.date == date).collect()
    } else if criteria.favorites_only {
        all.iter().filter(|a| a.favorite).collect()
    } else {
        all.iter().collect()
    };

    let mut result: Vec<Appointment> = first_stage
        .into_iter()
        .filter(|a| match criteria.status {
            StatusFilter::All => true,
            StatusFilter::Scheduled => !a.done,
            StatusFilter::Finished => a.done,
        })
        .cloned()
        .collect();

    if criteria.sort_by_name {
        // Vec::sort_by is stable, so equal names keep their input order.
        result.sort_by(|a, b| {
            a.client_name
                .to_lowercase()
                .cmp(&b.client_name.to_lowercase())
        });
    }

    result
}

/// One row of the client directory, projected from the appointment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientEntry {
    pub client_name: String,
    pub client_contact: String,
}

/// Projects the client directory from the appointment list, keeping only
/// entries whose name contains `search` (case-insensitive). An empty
/// search keeps every entry. One appointment yields one row; repeat
/// clients are not collapsed.
pub fn client_directory(all: &[Appointment], search: &str) -> Vec<ClientEntry> {
    let needle = search.to_lowercase();
    all.iter()
        .filter(|a| needle.is_empty() || a.client_name.to_lowercase().contains(&needle))
        .map(|a| ClientEntry {
            client_name: a.client_name.clone(),
            client_contact: a.client_contact.clone(),
        })
        .collect()
}

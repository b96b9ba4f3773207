use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use slotbook_core::errors::{SchedulingError, SchedulingResult};
use slotbook_core::models::appointment::{Appointment, AppointmentDraft};

use crate::envelope;
use crate::keys;
use crate::kv::KeyValueStore;

/// Owner of the canonical appointment list.
///
/// Every mutation is one full-list read and one full-list write of the
/// `appointments` key. The internal mutex serializes mutations, so two
/// overlapping user actions queue instead of racing to a lost update.
pub struct AppointmentRepository<S> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> AppointmentRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn load_all(&self) -> SchedulingResult<Vec<Appointment>> {
        let raw = self.store.get(keys::APPOINTMENTS).await?;
        envelope::decode_list(keys::APPOINTMENTS, raw)
    }

    /// Books a new appointment: validates the draft, rejects it when the
    /// `(date, time)` slot is already taken, then appends and persists.
    /// On a duplicate nothing is written and the stored list is unchanged.
    pub async fn book(&self, draft: AppointmentDraft) -> SchedulingResult<Appointment> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut appointments = self.load_all().await?;

        if appointments
            .iter()
            .any(|a| a.same_slot(&draft.date, &draft.time))
        {
            tracing::debug!(
                "Rejecting duplicate booking: date={}, time={}",
                draft.date,
                draft.time
            );
            return Err(SchedulingError::DuplicateBooking {
                date: draft.date,
                time: draft.time,
            });
        }

        let appointment = Appointment::from_draft(draft);
        tracing::debug!(
            "Booking appointment: id={}, date={}, time={}, collaborator={}",
            appointment.id,
            appointment.date,
            appointment.time,
            appointment.collaborator
        );

        appointments.push(appointment.clone());
        self.persist(&appointments).await?;

        Ok(appointment)
    }

    /// Replaces the user-editable fields of the appointment with id `id`.
    pub async fn update(&self, id: Uuid, draft: AppointmentDraft) -> SchedulingResult<Appointment> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut appointments = self.load_all().await?;

        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SchedulingError::NotFound(format!("Appointment {} not found", id)))?;

        appointment.apply_draft(draft);
        let updated = appointment.clone();

        tracing::debug!("Updating appointment: id={}", id);
        self.persist(&appointments).await?;

        Ok(updated)
    }

    pub async fn remove(&self, id: Uuid) -> SchedulingResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut appointments = self.load_all().await?;

        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        if appointments.len() == before {
            return Err(SchedulingError::NotFound(format!(
                "Appointment {} not found",
                id
            )));
        }

        tracing::debug!("Removing appointment: id={}", id);
        self.persist(&appointments).await
    }

    pub async fn set_favorite(&self, id: Uuid, value: bool) -> SchedulingResult<Appointment> {
        self.set_flag(id, value, |a, v| a.favorite = v).await
    }

    pub async fn set_done(&self, id: Uuid, value: bool) -> SchedulingResult<Appointment> {
        self.set_flag(id, value, |a, v| a.done = v).await
    }

    /// Unconditional bulk overwrite. Used only by backup restore.
    pub async fn replace_all(&self, appointments: Vec<Appointment>) -> SchedulingResult<()> {
        let _guard = self.write_lock.lock().await;
        tracing::debug!("Replacing all appointments: count={}", appointments.len());
        self.persist(&appointments).await
    }

    async fn set_flag(
        &self,
        id: Uuid,
        value: bool,
        apply: impl FnOnce(&mut Appointment, bool),
    ) -> SchedulingResult<Appointment> {
        let _guard = self.write_lock.lock().await;
        let mut appointments = self.load_all().await?;

        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SchedulingError::NotFound(format!("Appointment {} not found", id)))?;

        apply(appointment, value);
        let updated = appointment.clone();

        self.persist(&appointments).await?;
        Ok(updated)
    }

    async fn persist(&self, appointments: &[Appointment]) -> SchedulingResult<()> {
        let raw = envelope::encode_list(appointments)?;
        self.store.set(keys::APPOINTMENTS, &raw).await?;
        Ok(())
    }
}

//! The application facade.
//!
//! `App` owns the store and repositories and is the single source of
//! truth for application state. Every mutation goes through it and emits
//! a [`ChangeEvent`] on a broadcast channel; screens subscribe and reload
//! instead of keeping their own copies of stored state.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::broadcast;
use uuid::Uuid;

use slotbook_core::errors::SchedulingResult;
use slotbook_core::models::appointment::{Appointment, AppointmentDraft};
use slotbook_core::models::collaborator::{Collaborator, CollaboratorDraft};
use slotbook_core::models::establishment::{EstablishmentProfile, ThemePreference};
use slotbook_store::repositories::{
    AppointmentRepository, CollaboratorRegistry, EstablishmentService,
};
use slotbook_store::{backup, FileStore, KeyValueStore};

use crate::config::AppConfig;

/// Which screen the app starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartScreen {
    /// No establishment registered yet; run onboarding.
    Onboarding,
    /// Profile exists; go straight to the home screen.
    Home,
}

/// Notification that a slice of application state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    AppointmentsChanged,
    CollaboratorsChanged,
    ProfileChanged,
    StoreRestored,
    StoreCleared,
}

const EVENT_CHANNEL_CAPACITY: usize = 16;

pub struct App<S = FileStore> {
    store: Arc<S>,
    appointments: AppointmentRepository<S>,
    collaborators: CollaboratorRegistry<S>,
    establishment: EstablishmentService<S>,
    events: broadcast::Sender<ChangeEvent>,
}

impl App<FileStore> {
    /// Opens the durable store under the configured data directory and
    /// wires the repositories.
    pub async fn open(config: &AppConfig) -> eyre::Result<Self> {
        let store = Arc::new(slotbook_store::open_store(&config.data_dir).await?);
        Ok(Self::with_store(store))
    }
}

impl<S: KeyValueStore> App<S> {
    /// Builds an app over an already-opened store. Tests use this with an
    /// in-memory store.
    pub fn with_store(store: Arc<S>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            appointments: AppointmentRepository::new(Arc::clone(&store)),
            collaborators: CollaboratorRegistry::new(Arc::clone(&store)),
            establishment: EstablishmentService::new(Arc::clone(&store)),
            store,
            events,
        }
    }

    /// Subscribes to change notifications. Each mutation through the
    /// facade emits exactly one event after it has persisted.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    /// Initial screen choice, gated on whether onboarding completed.
    pub async fn start_screen(&self) -> SchedulingResult<StartScreen> {
        if self.establishment.is_registered().await? {
            Ok(StartScreen::Home)
        } else {
            Ok(StartScreen::Onboarding)
        }
    }

    // ── Appointments ──

    pub async fn appointments(&self) -> SchedulingResult<Vec<Appointment>> {
        self.appointments.load_all().await
    }

    pub async fn book_appointment(&self, draft: AppointmentDraft) -> SchedulingResult<Appointment> {
        let appointment = self.appointments.book(draft).await?;
        self.notify(ChangeEvent::AppointmentsChanged);
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        id: Uuid,
        draft: AppointmentDraft,
    ) -> SchedulingResult<Appointment> {
        let appointment = self.appointments.update(id, draft).await?;
        self.notify(ChangeEvent::AppointmentsChanged);
        Ok(appointment)
    }

    pub async fn remove_appointment(&self, id: Uuid) -> SchedulingResult<()> {
        self.appointments.remove(id).await?;
        self.notify(ChangeEvent::AppointmentsChanged);
        Ok(())
    }

    pub async fn set_favorite(&self, id: Uuid, value: bool) -> SchedulingResult<Appointment> {
        let appointment = self.appointments.set_favorite(id, value).await?;
        self.notify(ChangeEvent::AppointmentsChanged);
        Ok(appointment)
    }

    pub async fn set_done(&self, id: Uuid, value: bool) -> SchedulingResult<Appointment> {
        let appointment = self.appointments.set_done(id, value).await?;
        self.notify(ChangeEvent::AppointmentsChanged);
        Ok(appointment)
    }

    // ── Collaborators ──

    pub async fn collaborators(&self) -> SchedulingResult<Vec<Collaborator>> {
        self.collaborators.load_all().await
    }

    pub async fn add_collaborator(
        &self,
        draft: CollaboratorDraft,
    ) -> SchedulingResult<Collaborator> {
        let collaborator = self.collaborators.add(draft).await?;
        self.notify(ChangeEvent::CollaboratorsChanged);
        Ok(collaborator)
    }

    // ── Establishment profile & settings ──

    pub async fn profile(&self) -> SchedulingResult<Option<EstablishmentProfile>> {
        self.establishment.load().await
    }

    pub async fn save_profile(&self, profile: &EstablishmentProfile) -> SchedulingResult<()> {
        self.establishment.save(profile).await?;
        self.notify(ChangeEvent::ProfileChanged);
        Ok(())
    }

    pub async fn theme(&self) -> SchedulingResult<Option<ThemePreference>> {
        self.establishment.theme().await
    }

    pub async fn set_theme(&self, theme: ThemePreference) -> SchedulingResult<()> {
        self.establishment.set_theme(theme).await?;
        self.notify(ChangeEvent::ProfileChanged);
        Ok(())
    }

    // ── Backup / restore ──

    pub async fn backup_to_string(&self) -> SchedulingResult<String> {
        backup::export(self.store.as_ref()).await
    }

    pub async fn backup_to_file(&self, path: &Path) -> SchedulingResult<()> {
        backup::export_to_file(self.store.as_ref(), path).await
    }

    pub async fn restore_from_str(&self, json: &str) -> SchedulingResult<usize> {
        let restored = backup::import(self.store.as_ref(), json).await?;
        self.notify(ChangeEvent::StoreRestored);
        Ok(restored)
    }

    /// Clears all application state. Destructive; recoverable only from a
    /// previously exported backup.
    pub async fn restore_defaults(&self) -> SchedulingResult<()> {
        self.establishment.reset().await?;
        self.notify(ChangeEvent::StoreCleared);
        Ok(())
    }

    fn notify(&self, event: ChangeEvent) {
        // Send fails only when no screen is subscribed, which is fine.
        let _ = self.events.send(event);
    }
}

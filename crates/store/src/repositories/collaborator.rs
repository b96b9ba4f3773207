use std::sync::Arc;

use tokio::sync::Mutex;

use slotbook_core::errors::SchedulingResult;
use slotbook_core::models::collaborator::{Collaborator, CollaboratorDraft};

use crate::envelope;
use crate::keys;
use crate::kv::KeyValueStore;

/// Owner of the canonical staff list under the `collaborators` key.
///
/// Registration appends unconditionally; two collaborators may share a
/// name, and the booking flow stores the name it was shown.
pub struct CollaboratorRegistry<S> {
    store: Arc<S>,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> CollaboratorRegistry<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn load_all(&self) -> SchedulingResult<Vec<Collaborator>> {
        let raw = self.store.get(keys::COLLABORATORS).await?;
        envelope::decode_list(keys::COLLABORATORS, raw)
    }

    pub async fn add(&self, draft: CollaboratorDraft) -> SchedulingResult<Collaborator> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut collaborators = self.load_all().await?;

        let collaborator = Collaborator::from_draft(draft);
        tracing::debug!(
            "Registering collaborator: id={}, name={}",
            collaborator.id,
            collaborator.name
        );

        collaborators.push(collaborator.clone());
        self.persist(&collaborators).await?;

        Ok(collaborator)
    }

    /// Unconditional bulk overwrite. Used only by backup restore.
    pub async fn replace_all(&self, collaborators: Vec<Collaborator>) -> SchedulingResult<()> {
        let _guard = self.write_lock.lock().await;
        self.persist(&collaborators).await
    }

    async fn persist(&self, collaborators: &[Collaborator]) -> SchedulingResult<()> {
        let raw = envelope::encode_list(collaborators)?;
        self.store.set(keys::COLLABORATORS, &raw).await?;
        Ok(())
    }
}

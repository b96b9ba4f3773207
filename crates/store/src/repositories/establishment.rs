use std::sync::Arc;

use slotbook_core::errors::{SchedulingError, SchedulingResult};
use slotbook_core::models::establishment::{EstablishmentProfile, ThemePreference};

use crate::keys;
use crate::kv::KeyValueStore;

/// Mediator for the establishment profile scalars and app settings.
///
/// The profile is stored as individual string keys rather than one JSON
/// record, matching the layout the app has always used.
pub struct EstablishmentService<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> EstablishmentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads the profile, or `None` if onboarding never completed.
    ///
    /// A stored name with a missing or unrecognized business line is an
    /// error rather than a silent default.
    pub async fn load(&self) -> SchedulingResult<Option<EstablishmentProfile>> {
        let Some(name) = self.store.get(keys::ESTABLISHMENT_NAME).await? else {
            return Ok(None);
        };

        let business_line = self
            .store
            .get(keys::ESTABLISHMENT_BUSINESS_LINE)
            .await?
            .ok_or_else(|| {
                SchedulingError::Validation("Stored profile has no business line".to_string())
            })?
            .parse()?;

        Ok(Some(EstablishmentProfile {
            name,
            tax_id: self.store.get(keys::ESTABLISHMENT_TAX_ID).await?,
            business_line,
            logo_ref: self.store.get(keys::ESTABLISHMENT_LOGO_REF).await?,
        }))
    }

    /// Persists the profile and marks the establishment as registered.
    pub async fn save(&self, profile: &EstablishmentProfile) -> SchedulingResult<()> {
        profile.validate()?;

        tracing::debug!(
            "Saving establishment profile: name={}, business_line={}",
            profile.name,
            profile.business_line
        );

        self.store
            .set(keys::ESTABLISHMENT_NAME, &profile.name)
            .await?;
        self.store
            .set(
                keys::ESTABLISHMENT_BUSINESS_LINE,
                profile.business_line.as_str(),
            )
            .await?;

        match &profile.tax_id {
            Some(tax_id) => self.store.set(keys::ESTABLISHMENT_TAX_ID, tax_id).await?,
            None => self.store.remove(keys::ESTABLISHMENT_TAX_ID).await?,
        }
        match &profile.logo_ref {
            Some(logo_ref) => self.store.set(keys::ESTABLISHMENT_LOGO_REF, logo_ref).await?,
            None => self.store.remove(keys::ESTABLISHMENT_LOGO_REF).await?,
        }

        self.store.set(keys::ESTABLISHMENT_REGISTERED, "true").await?;
        Ok(())
    }

    /// Whether onboarding has completed; gates the initial screen choice.
    pub async fn is_registered(&self) -> SchedulingResult<bool> {
        if self.store.get(keys::ESTABLISHMENT_REGISTERED).await?.as_deref() == Some("true") {
            return Ok(true);
        }
        // Older stores predate the sentinel; fall back to the name key.
        Ok(self.store.get(keys::ESTABLISHMENT_NAME).await?.is_some())
    }

    pub async fn theme(&self) -> SchedulingResult<Option<ThemePreference>> {
        match self.store.get(keys::THEME_PREFERENCE).await? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    pub async fn set_theme(&self, theme: ThemePreference) -> SchedulingResult<()> {
        self.store.set(keys::THEME_PREFERENCE, theme.as_str()).await?;
        Ok(())
    }

    /// Clears every key in the store. Destructive and irreversible except
    /// via a previously exported backup.
    pub async fn reset(&self) -> SchedulingResult<()> {
        tracing::debug!("Resetting store to defaults");
        self.store.clear().await?;
        Ok(())
    }
}

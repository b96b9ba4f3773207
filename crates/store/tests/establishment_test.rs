use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use slotbook_core::errors::SchedulingError;
use slotbook_core::models::establishment::{
    BusinessLine, EstablishmentProfile, ThemePreference,
};
use slotbook_store::keys;
use slotbook_store::kv::KeyValueStore;
use slotbook_store::mock::MemoryStore;
use slotbook_store::repositories::EstablishmentService;

fn profile() -> EstablishmentProfile {
    EstablishmentProfile {
        name: "Rosa's Garage".to_string(),
        tax_id: Some("12.345.678/0001-00".to_string()),
        business_line: BusinessLine::AutoShop,
        logo_ref: Some("logo.png".to_string()),
    }
}

#[tokio::test]
async fn test_load_is_none_before_onboarding() {
    let service = EstablishmentService::new(Arc::new(MemoryStore::new()));

    assert!(service.load().await.unwrap().is_none());
    assert!(!service.is_registered().await.unwrap());
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let service = EstablishmentService::new(Arc::new(MemoryStore::new()));

    service.save(&profile()).await.unwrap();

    assert_eq!(service.load().await.unwrap(), Some(profile()));
    assert!(service.is_registered().await.unwrap());
}

#[tokio::test]
async fn test_save_writes_the_fixed_key_layout() {
    let store = Arc::new(MemoryStore::new());
    let service = EstablishmentService::new(Arc::clone(&store));

    service.save(&profile()).await.unwrap();

    assert_eq!(
        store.get(keys::ESTABLISHMENT_NAME).await.unwrap().as_deref(),
        Some("Rosa's Garage")
    );
    assert_eq!(
        store
            .get(keys::ESTABLISHMENT_BUSINESS_LINE)
            .await
            .unwrap()
            .as_deref(),
        Some("auto_shop")
    );
    assert_eq!(
        store
            .get(keys::ESTABLISHMENT_REGISTERED)
            .await
            .unwrap()
            .as_deref(),
        Some("true")
    );
}

#[tokio::test]
async fn test_resaving_without_optional_fields_clears_them() {
    let store = Arc::new(MemoryStore::new());
    let service = EstablishmentService::new(Arc::clone(&store));
    service.save(&profile()).await.unwrap();

    let mut updated = profile();
    updated.tax_id = None;
    updated.logo_ref = None;
    service.save(&updated).await.unwrap();

    assert!(store.get(keys::ESTABLISHMENT_TAX_ID).await.unwrap().is_none());
    assert_eq!(service.load().await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_registered_falls_back_to_name_key_for_old_stores() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(keys::ESTABLISHMENT_NAME, "Rosa's Garage")
        .await
        .unwrap();

    let service = EstablishmentService::new(store);
    assert!(service.is_registered().await.unwrap());
}

#[tokio::test]
async fn test_unknown_stored_business_line_is_an_error() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(keys::ESTABLISHMENT_NAME, "Rosa's Garage")
        .await
        .unwrap();
    store
        .set(keys::ESTABLISHMENT_BUSINESS_LINE, "barbershop")
        .await
        .unwrap();

    let service = EstablishmentService::new(store);
    assert!(matches!(
        service.load().await,
        Err(SchedulingError::Validation(_))
    ));
}

#[rstest]
#[case(ThemePreference::Light, "light")]
#[case(ThemePreference::Dark, "dark")]
#[tokio::test]
async fn test_theme_round_trips(#[case] theme: ThemePreference, #[case] raw: &str) {
    let store = Arc::new(MemoryStore::new());
    let service = EstablishmentService::new(Arc::clone(&store));

    assert!(service.theme().await.unwrap().is_none());
    service.set_theme(theme).await.unwrap();

    assert_eq!(
        store.get(keys::THEME_PREFERENCE).await.unwrap().as_deref(),
        Some(raw)
    );
    assert_eq!(service.theme().await.unwrap(), Some(theme));
}

#[tokio::test]
async fn test_reset_clears_every_key() {
    let store = Arc::new(MemoryStore::new());
    let service = EstablishmentService::new(Arc::clone(&store));
    service.save(&profile()).await.unwrap();
    store.set("appointments", "[]").await.unwrap();

    service.reset().await.unwrap();

    assert!(store.keys().await.unwrap().is_empty());
    assert!(service.load().await.unwrap().is_none());
}

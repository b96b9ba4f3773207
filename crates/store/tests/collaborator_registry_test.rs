use std::sync::Arc;

use pretty_assertions::assert_eq;

use slotbook_core::errors::SchedulingError;
use slotbook_core::models::collaborator::CollaboratorDraft;
use slotbook_store::mock::MemoryStore;
use slotbook_store::repositories::CollaboratorRegistry;

fn draft(name: &str) -> CollaboratorDraft {
    CollaboratorDraft {
        name: name.to_string(),
        tax_id: None,
    }
}

#[tokio::test]
async fn test_add_appends_in_registration_order() {
    let registry = CollaboratorRegistry::new(Arc::new(MemoryStore::new()));

    registry.add(draft("Bea")).await.unwrap();
    registry.add(draft("Caio")).await.unwrap();

    let names: Vec<String> = registry
        .load_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Bea".to_string(), "Caio".to_string()]);
}

#[tokio::test]
async fn test_duplicate_names_are_not_deduplicated() {
    let registry = CollaboratorRegistry::new(Arc::new(MemoryStore::new()));

    let first = registry.add(draft("Bea")).await.unwrap();
    let second = registry.add(draft("Bea")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(registry.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_name_is_required() {
    let registry = CollaboratorRegistry::new(Arc::new(MemoryStore::new()));

    let result = registry.add(draft("  ")).await;
    assert!(matches!(result, Err(SchedulingError::Validation(_))));
    assert!(registry.load_all().await.unwrap().is_empty());
}

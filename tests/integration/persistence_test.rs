//! Integration tests for the JSON slot format.

mod helpers;

use docshelf_core::error::ErrorKind;
use docshelf_entity::document::{ProcessingStatus, UploadDescriptor};

#[tokio::test]
async fn test_resave_leaves_content_unchanged() {
    let app = helpers::TestApp::new();
    let store = app.open_seeded_store().await;
    let folder = store.create_folder("Week 2", None).await.unwrap();
    let file = store
        .create_file(UploadDescriptor::new("scan.png", 10), Some(folder.id.clone()))
        .await
        .unwrap();
    store
        .update_status(&file.id, ProcessingStatus::Processing, Some(30))
        .await
        .unwrap();

    let slot = app.slots().documents();
    let before = std::fs::read_to_string(app.documents_path()).unwrap();
    let loaded = slot.load_all().await.unwrap();
    slot.save_all(&loaded).await.unwrap();
    let after = std::fs::read_to_string(app.documents_path()).unwrap();

    assert_eq!(before, after);
    assert_eq!(slot.load_all().await.unwrap(), loaded);
}

#[tokio::test]
async fn test_slot_uses_camel_case_fields() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;
    let folder = store.create_folder("Docs", None).await.unwrap();
    store
        .create_file(UploadDescriptor::new("a.pdf", 7), Some(folder.id.clone()))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(app.documents_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = json.as_array().unwrap();

    assert_eq!(items[0]["type"], "folder");
    assert!(items[0]["parentId"].is_null());
    assert!(items[0].get("size").is_none());
    assert_eq!(items[1]["parentId"], folder.id.as_str());
    assert_eq!(items[1]["mediaType"], "pdf");
    assert_eq!(items[1]["status"], "completed");
    assert!(items[1]["createdAt"].is_string());
}

#[tokio::test]
async fn test_corrupt_slot_is_a_serialization_error() {
    let app = helpers::TestApp::new();
    std::fs::write(app.documents_path(), "{ not json").unwrap();

    let err = docshelf_service::HierarchyStore::load(app.slots().documents())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Serialization);
}

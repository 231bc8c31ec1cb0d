//! Integration tests for the document hierarchy.

mod helpers;

use docshelf_core::error::ErrorKind;
use docshelf_entity::document::{ProcessingStatus, UploadDescriptor};

#[tokio::test]
async fn test_changes_survive_reopen() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;

    let course = store.create_folder("Course Material", None).await.unwrap();
    let week1 = store
        .create_folder("Week 1", Some(course.id.clone()))
        .await
        .unwrap();
    let slides = store
        .create_file(
            UploadDescriptor::new("Intro.PDF", 4096),
            Some(week1.id.clone()),
        )
        .await
        .unwrap();
    store.rename(&week1.id, "Week One").await.unwrap();
    drop(store);

    let reopened = app.open_store().await;
    let snapshot = reopened.snapshot().await;
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.ancestors_of(&slides.id), ["Course Material", "Week One"]);

    let file = reopened.get(&slides.id).await.unwrap();
    assert_eq!(file.media_type.as_deref(), Some("pdf"));
    assert_eq!(file.size, Some(4096));
    assert_eq!(file.status, Some(ProcessingStatus::Completed));
    assert!(reopened.integrity_report().await.is_empty());
}

#[tokio::test]
async fn test_move_and_delete_scenario() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;

    let a = store.create_folder("A", None).await.unwrap();
    let b = store.create_folder("B", Some(a.id.clone())).await.unwrap();
    let f = store
        .create_file(UploadDescriptor::new("F.txt", 1), Some(b.id.clone()))
        .await
        .unwrap();
    let other = store.create_folder("Other", None).await.unwrap();

    assert_eq!(store.snapshot().await.ancestors_of(&f.id), ["A", "B"]);

    let err = store.move_to(&a.id, Some(b.id.clone())).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Cycle);

    store.move_to(&b.id, Some(other.id.clone())).await.unwrap();
    assert_eq!(store.snapshot().await.ancestors_of(&f.id), ["Other", "B"]);

    store.delete(&other.id).await.unwrap();
    let reopened = app.open_store().await;
    let remaining: Vec<_> = reopened.list(None).await.into_iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![a.id.clone()]);
    assert!(reopened.list(Some(&a.id)).await.is_empty());
}

#[tokio::test]
async fn test_seeded_library_on_first_use() {
    let app = helpers::TestApp::new();
    assert!(!app.documents_path().exists());

    let store = app.open_seeded_store().await;
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.folders_only().len(), 2);
    assert_eq!(snapshot.files_only().len(), 3);
    assert!(app.documents_path().exists());

    let sample = snapshot.folders_only()[0].id.clone();
    store.delete(&sample).await.unwrap();
    drop(store);

    let reopened = app.open_seeded_store().await;
    assert_eq!(reopened.snapshot().await.len(), 4);
}

#[tokio::test]
async fn test_tree_view_counts() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;

    let a = store.create_folder("A", None).await.unwrap();
    store.create_folder("B", Some(a.id.clone())).await.unwrap();
    for name in ["1.txt", "2.txt"] {
        store
            .create_file(UploadDescriptor::new(name, 1), Some(a.id.clone()))
            .await
            .unwrap();
    }

    let tree = store.snapshot().await.tree();
    assert_eq!(tree.total_folders, 2);
    assert_eq!(tree.roots[0].file_count, 2);
    assert_eq!(tree.roots[0].children[0].name, "B");
}

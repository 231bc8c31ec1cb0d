//! Integration tests for study memos.

mod helpers;

use docshelf_core::error::ErrorKind;
use docshelf_core::types::MemoId;
use docshelf_entity::document::UploadDescriptor;

#[tokio::test]
async fn test_memo_outlives_its_file() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;
    let memos = app.open_memos().await;

    let file = store
        .create_file(UploadDescriptor::new("Lab Data.xlsx", 2048), None)
        .await
        .unwrap();
    let memo = memos.create(&file).await.unwrap();
    assert_eq!(memo.title, "Study summary: Lab Data.xlsx");
    assert!(memo.content.contains("Data Summary"));

    store.delete(&file.id).await.unwrap();
    drop(memos);

    let reopened = app.open_memos().await;
    let listed = reopened.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].source_file_id, file.id);
    assert_eq!(listed[0].source_file_name, "Lab Data.xlsx");
}

#[tokio::test]
async fn test_memo_errors() {
    let app = helpers::TestApp::new();
    let store = app.open_store().await;
    let memos = app.open_memos().await;

    let folder = store.create_folder("Notes", None).await.unwrap();
    let err = memos.create(&folder).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let err = memos.delete(&MemoId::from("memo-missing")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    let err = memos.get(&MemoId::from("memo-missing")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

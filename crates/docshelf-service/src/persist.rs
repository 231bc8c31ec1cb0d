//! Saving a working collection through a slot.

use serde::Serialize;
use serde::de::DeserializeOwned;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::SnapshotStore;

/// Save `items` to `store`, reporting any failure as a persistence error.
///
/// A slot may fail with another kind (a JSON slot fails with
/// `Serialization`); callers see `Persistence` either way, with the
/// slot's error kept as the source.
pub(crate) async fn save_or_persistence_error<T>(
    store: &dyn SnapshotStore<T>,
    items: &[T],
) -> AppResult<()>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    store.save_all(items).await.map_err(|e| {
        if e.is(ErrorKind::Persistence) {
            e
        } else {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to save slot '{}'", store.slot()),
                e,
            )
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;

    /// A slot that loads as empty and refuses every save with
    /// `Serialization`.
    #[derive(Debug)]
    pub(crate) struct UnencodableStore;

    #[async_trait]
    impl<T> SnapshotStore<T> for UnencodableStore
    where
        T: Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        fn slot(&self) -> &str {
            "unencodable"
        }

        async fn exists(&self) -> AppResult<bool> {
            Ok(false)
        }

        async fn load_all(&self) -> AppResult<Vec<T>> {
            Ok(Vec::new())
        }

        async fn save_all(&self, _items: &[T]) -> AppResult<()> {
            Err(AppError::new(ErrorKind::Serialization, "cannot encode"))
        }
    }

    #[tokio::test]
    async fn test_other_save_errors_become_persistence() {
        let err = save_or_persistence_error::<u32>(&UnencodableStore, &[1, 2])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Persistence);
        assert!(err.message.contains("unencodable"));
        assert!(err.source.is_some());
    }
}

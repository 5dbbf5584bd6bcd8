use std::sync::Arc;

use async_trait::async_trait;
use blog_core::blog::{Document, DocumentFields, FieldValue};
use blog_core::ports::{ClockPort, DocumentStorePort, StoreError};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::time::SystemClock;

/// Process-local document collection.
///
/// Keeps insertion order, assigns uuid ids and stamps server timestamps
/// from the injected clock. Update and delete of a missing id fail with
/// `StoreError::NotFound`, like the Firestore adapter.
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Document>>,
    clock: Arc<dyn ClockPort>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Pre-populates the store, keeping the given order.
    pub fn with_documents(self, documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
            clock: self.clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.clock.now_ms()).unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn list_documents(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id == id).cloned())
    }

    async fn add_document(
        &self,
        mut fields: DocumentFields,
        server_timestamp_field: Option<&str>,
    ) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        if let Some(field) = server_timestamp_field {
            fields.insert(field.to_string(), FieldValue::Timestamp(self.now()));
        }

        self.documents
            .write()
            .await
            .push(Document::new(id.clone(), fields));
        debug!(id = %id, "document added");
        Ok(id)
    }

    async fn update_document(&self, id: &str, fields: DocumentFields) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        document.fields.extend(fields);
        debug!(id = %id, "document updated");
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        documents.remove(index);
        debug!(id = %id, "document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> DocumentFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
            .collect()
    }

    #[tokio::test]
    async fn add_assigns_unique_ids_and_keeps_insertion_order() {
        let store = InMemoryDocumentStore::new();
        let a = store.add_document(fields(&[("name", "a")]), None).await.unwrap();
        let b = store.add_document(fields(&[("name", "b")]), None).await.unwrap();

        assert_ne!(a, b);
        let ids: Vec<_> = store
            .list_documents()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn add_stamps_server_timestamp_from_clock() {
        let store = InMemoryDocumentStore::with_clock(Arc::new(FixedClock(1_700_000_000_000)));
        let id = store
            .add_document(fields(&[("name", "a")]), Some("createdAt"))
            .await
            .unwrap();

        let doc = store.get_document(&id).await.unwrap().unwrap();
        let ts = doc.fields.get("createdAt").and_then(|v| v.as_timestamp()).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_000);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store = InMemoryDocumentStore::new();
        let id = store
            .add_document(fields(&[("name", "a"), ("title", "t")]), None)
            .await
            .unwrap();

        store
            .update_document(&id, fields(&[("title", "X")]))
            .await
            .unwrap();

        let doc = store.get_document(&id).await.unwrap().unwrap();
        assert_eq!(doc.fields.get("title"), Some(&FieldValue::from("X")));
        assert_eq!(doc.fields.get("name"), Some(&FieldValue::from("a")));
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_id_are_not_found() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(
            store.update_document("nope", DocumentFields::new()).await,
            Err(StoreError::NotFound("nope".into()))
        );
        assert_eq!(
            store.delete_document("nope").await,
            Err(StoreError::NotFound("nope".into()))
        );
    }

    #[tokio::test]
    async fn delete_twice_fails_the_second_time() {
        let store = InMemoryDocumentStore::new().with_documents([Document::new("x", fields(&[]))]);
        store.delete_document("x").await.unwrap();
        assert!(store.delete_document("x").await.unwrap_err().is_not_found());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.get_document("nope").await.unwrap(), None);
    }
}

use std::sync::Arc;

use blog_core::blog::fields;
use blog_core::ports::{DocumentStorePort, StoreError};
use blog_core::{Blog, BlogDraft, BlogId};
use tracing::{debug, info};

/// Record service over the configured blog collection.
/// 博客集合上的记录服务。
///
/// Every operation is a single store call: no retry, no backoff. Failures
/// are returned to the caller unchanged.
pub struct BlogService {
    store: Arc<dyn DocumentStorePort>,
}

impl BlogService {
    /// ```ignore
    /// let service = BlogService::from_ports(Arc::new(InMemoryDocumentStore::new()));
    /// service.create_blog(BlogDraft::new().with_name("A")).await?;
    /// ```
    pub fn from_ports(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store }
    }

    /// All records in store order, identity merged into each.
    #[tracing::instrument(name = "service.blog.list", skip(self))]
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, StoreError> {
        let documents = self.store.list_documents().await?;
        debug!(count = documents.len(), "Listed blogs");
        Ok(documents.into_iter().map(Blog::from_document).collect())
    }

    /// `Ok(None)` when the record does not exist.
    #[tracing::instrument(name = "service.blog.get", skip(self), fields(blog_id = %id))]
    pub async fn get_blog(&self, id: &BlogId) -> Result<Option<Blog>, StoreError> {
        let document = self.store.get_document(id.as_str()).await?;
        Ok(document.map(Blog::from_document))
    }

    /// Stores every supplied field plus a server-assigned `createdAt`.
    ///
    /// A `createdAt` supplied by the caller is dropped: the store owns it.
    #[tracing::instrument(name = "service.blog.create", skip(self, draft))]
    pub async fn create_blog(&self, draft: BlogDraft) -> Result<BlogId, StoreError> {
        let mut fields = draft.into_fields();
        fields.remove(fields::CREATED_AT);

        let id = self
            .store
            .add_document(fields, Some(fields::CREATED_AT))
            .await?;
        info!(blog_id = %id, "Created blog");
        Ok(BlogId::from(id))
    }

    /// Changes only the supplied fields. Fails with `NotFound` when the
    /// record does not exist.
    #[tracing::instrument(name = "service.blog.update", skip(self, draft), fields(blog_id = %id))]
    pub async fn update_blog(&self, id: &BlogId, draft: BlogDraft) -> Result<(), StoreError> {
        self.store
            .update_document(id.as_str(), draft.into_fields())
            .await?;
        info!(blog_id = %id, "Updated blog");
        Ok(())
    }

    /// Fails with `NotFound` when the record does not exist, including a
    /// second delete of the same id.
    #[tracing::instrument(name = "service.blog.delete", skip(self), fields(blog_id = %id))]
    pub async fn delete_blog(&self, id: &BlogId) -> Result<(), StoreError> {
        self.store.delete_document(id.as_str()).await?;
        info!(blog_id = %id, "Deleted blog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blog_core::blog::{Document, DocumentFields, FieldValue};
    use std::sync::Mutex;

    /// Records the arguments of `add_document`.
    #[derive(Default)]
    struct RecordingStore {
        added: Mutex<Vec<(DocumentFields, Option<String>)>>,
    }

    #[async_trait]
    impl DocumentStorePort for RecordingStore {
        async fn list_documents(&self) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::Transport("offline".into()))
        }

        async fn get_document(&self, _id: &str) -> Result<Option<Document>, StoreError> {
            Ok(None)
        }

        async fn add_document(
            &self,
            fields: DocumentFields,
            server_timestamp_field: Option<&str>,
        ) -> Result<String, StoreError> {
            self.added
                .lock()
                .unwrap()
                .push((fields, server_timestamp_field.map(str::to_string)));
            Ok("new-id".into())
        }

        async fn update_document(&self, id: &str, _fields: DocumentFields) -> Result<(), StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }

        async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
            Err(StoreError::NotFound(id.to_string()))
        }
    }

    #[tokio::test]
    async fn create_requests_server_timestamp_and_strips_client_created_at() {
        let store = Arc::new(RecordingStore::default());
        let service = BlogService::from_ports(store.clone());

        let draft = BlogDraft::new()
            .with_name("A")
            .with_extra("createdAt", FieldValue::from("forged"));
        let id = service.create_blog(draft).await.unwrap();

        assert_eq!(id.as_str(), "new-id");
        let added = store.added.lock().unwrap();
        let (fields, ts_field) = &added[0];
        assert_eq!(ts_field.as_deref(), Some("createdAt"));
        assert!(!fields.contains_key("createdAt"));
        assert_eq!(fields.get("name"), Some(&FieldValue::from("A")));
    }

    #[tokio::test]
    async fn errors_are_surfaced_unchanged() {
        let service = BlogService::from_ports(Arc::new(RecordingStore::default()));

        assert_eq!(
            service.list_blogs().await.unwrap_err(),
            StoreError::Transport("offline".into())
        );
        assert!(service
            .update_blog(&BlogId::from("x"), BlogDraft::new().with_title("X"))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(service
            .delete_blog(&BlogId::from("x"))
            .await
            .unwrap_err()
            .is_not_found());
        assert_eq!(service.get_blog(&BlogId::from("x")).await.unwrap(), None);
    }
}

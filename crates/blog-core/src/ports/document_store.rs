use async_trait::async_trait;

use super::errors::StoreError;
use crate::blog::{Document, DocumentFields};

/// Access to one remote document collection.
///
/// 访问单个远程文档集合。实现方负责标识分配与服务器时间戳。
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// All documents in store-defined order.
    async fn list_documents(&self) -> Result<Vec<Document>, StoreError>;

    /// `Ok(None)` when no document has this id.
    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError>;

    /// Creates a document with a store-assigned id and returns that id.
    ///
    /// When `server_timestamp_field` is set, the store writes its own
    /// request time into that field.
    async fn add_document(
        &self,
        fields: DocumentFields,
        server_timestamp_field: Option<&str>,
    ) -> Result<String, StoreError>;

    /// Overwrites only the given fields. The document must exist.
    async fn update_document(&self, id: &str, fields: DocumentFields) -> Result<(), StoreError>;

    /// Removes the document. The document must exist.
    async fn delete_document(&self, id: &str) -> Result<(), StoreError>;
}

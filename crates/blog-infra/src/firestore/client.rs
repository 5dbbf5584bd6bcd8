use async_trait::async_trait;
use blog_core::blog::{Document, DocumentFields};
use blog_core::ports::{DocumentStorePort, StoreError};
use rand::{distr::Alphanumeric, Rng};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::config::FirestoreConfig;
use super::field_path::quote_field_path;
use super::wire::{
    decode_document, encode_fields, CommitRequest, ErrorEnvelope, FieldTransform,
    ListDocumentsResponse, Precondition, WireDocument, Write,
};

const AUTO_ID_LEN: usize = 20;
const REQUEST_TIME: &str = "REQUEST_TIME";

/// Document store backed by the Firestore REST API.
///
/// Every call is single-shot: no retries, no backoff. The only timeout is
/// the HTTP client's request timeout.
pub struct FirestoreDocumentStore {
    http: reqwest::Client,
    config: FirestoreConfig,
    documents_root: Url,
}

impl FirestoreDocumentStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to build http client: {e}")))?;
        Self::with_client(http, config)
    }

    pub fn with_client(http: reqwest::Client, config: FirestoreConfig) -> Result<Self, StoreError> {
        let root = format!(
            "{}/v1/{}",
            config.endpoint.trim_end_matches('/'),
            config.documents_path()
        );
        let documents_root = Url::parse(&root)
            .map_err(|e| StoreError::Transport(format!("invalid endpoint '{root}': {e}")))?;
        Ok(Self {
            http,
            config,
            documents_root,
        })
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    /// `.../documents/<collection>[/<id>]`, each segment percent-encoded.
    fn url(&self, id: Option<&str>) -> Result<Url, StoreError> {
        let mut url = self.documents_root.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| StoreError::Transport("endpoint cannot be a base URL".into()))?;
            segments.push(&self.config.collection);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// `.../documents:commit`
    fn commit_url(&self) -> Result<Url, StoreError> {
        let mut url = self.documents_root.clone();
        let path = format!("{}:commit", url.path());
        url.set_path(&path);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.config.api_key {
            Some(key) if !key.is_empty() => builder.query(&[("key", key.as_str())]),
            _ => builder,
        }
    }

    fn generate_auto_id() -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(AUTO_ID_LEN)
            .map(char::from)
            .collect()
    }

    /// Sends the request; non-success statuses become `StoreError`s.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        id: Option<&str>,
    ) -> Result<String, StoreError> {
        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if status.is_success() {
            return Ok(body);
        }

        Err(Self::error_from_response(status, &body, id))
    }

    fn error_from_response(status: StatusCode, body: &str, id: Option<&str>) -> StoreError {
        let detail = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_default();

        if status == StatusCode::NOT_FOUND || detail.status == "NOT_FOUND" {
            return StoreError::NotFound(id.unwrap_or_default().to_string());
        }

        warn!(
            status = status.as_u16(),
            code = %detail.status,
            "firestore rejected request"
        );
        StoreError::Rejected {
            status: if detail.code != 0 {
                detail.code
            } else {
                status.as_u16()
            },
            code: if detail.status.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("UNKNOWN")
                    .to_uppercase()
                    .replace(' ', "_")
            } else {
                detail.status
            },
            message: if detail.message.is_empty() {
                body.trim().to_string()
            } else {
                detail.message
            },
        }
    }

    fn parse<T: DeserializeOwned>(body: &str) -> Result<T, StoreError> {
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DocumentStorePort for FirestoreDocumentStore {
    async fn list_documents(&self) -> Result<Vec<Document>, StoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut builder = self
                .request(Method::GET, self.url(None)?)
                .query(&[("pageSize", self.config.page_size.to_string())]);
            if let Some(token) = &page_token {
                builder = builder.query(&[("pageToken", token.as_str())]);
            }

            let body = self.send(builder, None).await?;
            let page: ListDocumentsResponse = Self::parse(&body)?;
            for wire in page.documents {
                documents.push(decode_document(wire).map_err(StoreError::Decode)?);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(count = documents.len(), "listed documents");
        Ok(documents)
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        let builder = self.request(Method::GET, self.url(Some(id))?);
        let body = match self.send(builder, Some(id)).await {
            Ok(body) => body,
            Err(StoreError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        let wire: WireDocument = Self::parse(&body)?;
        decode_document(wire).map(Some).map_err(StoreError::Decode)
    }

    async fn add_document(
        &self,
        fields: DocumentFields,
        server_timestamp_field: Option<&str>,
    ) -> Result<String, StoreError> {
        let id = Self::generate_auto_id();
        let update_transforms = server_timestamp_field
            .map(|field| {
                vec![FieldTransform {
                    field_path: quote_field_path(field),
                    set_to_server_value: REQUEST_TIME,
                }]
            })
            .unwrap_or_default();

        let request = CommitRequest {
            writes: vec![Write {
                update: WireDocument {
                    name: self.config.document_name(&id),
                    fields: encode_fields(&fields),
                    create_time: None,
                    update_time: None,
                },
                update_transforms,
                current_document: Precondition { exists: false },
            }],
        };

        let builder = self.request(Method::POST, self.commit_url()?).json(&request);
        self.send(builder, Some(&id)).await?;
        debug!(id = %id, "document created");
        Ok(id)
    }

    async fn update_document(&self, id: &str, fields: DocumentFields) -> Result<(), StoreError> {
        if fields.is_empty() {
            // An empty mask would replace the whole document.
            return match self.get_document(id).await? {
                Some(_) => Ok(()),
                None => Err(StoreError::NotFound(id.to_string())),
            };
        }

        let mut query: Vec<(&str, String)> = fields
            .keys()
            .map(|key| ("updateMask.fieldPaths", quote_field_path(key)))
            .collect();
        query.push(("currentDocument.exists", "true".to_string()));

        let body = WireDocument {
            name: String::new(),
            fields: encode_fields(&fields),
            create_time: None,
            update_time: None,
        };

        let builder = self
            .request(Method::PATCH, self.url(Some(id))?)
            .query(&query)
            .json(&body);
        self.send(builder, Some(id)).await?;
        debug!(id = %id, fields = fields.len(), "document updated");
        Ok(())
    }

    async fn delete_document(&self, id: &str) -> Result<(), StoreError> {
        let builder = self
            .request(Method::DELETE, self.url(Some(id))?)
            .query(&[("currentDocument.exists", "true")]);
        self.send(builder, Some(id)).await?;
        debug!(id = %id, "document deleted");
        Ok(())
    }
}

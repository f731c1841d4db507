//! Resume document persistence.
//!
//! Documents are owned by the external resume API; this module is the only
//! place that talks to it. Handlers depend on the `DocumentStore` trait
//! (`Arc<dyn DocumentStore>` in `AppState`), so the backend is swapped at
//! startup: HTTP against the upstream when `RESUME_STORE_URL` is configured,
//! in-memory otherwise (local development and tests).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::detect::DocumentFormat;
use crate::document::models::ResumeV2;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("document {0} not found")]
    NotFound(Uuid),
}

/// A stored resume document plus its catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub title: String,
    /// Format the document arrived in. Converted legacy uploads keep `v1`
    /// here so the client can tell users their document was migrated.
    pub source_format: DocumentFormat,
    pub document: ResumeV2,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save(&self, record: DocumentRecord) -> Result<DocumentRecord, StoreError>;
    async fn get(&self, id: Uuid) -> Result<DocumentRecord, StoreError>;
    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory store
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<HashMap<Uuid, DocumentRecord>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save(&self, record: DocumentRecord) -> Result<DocumentRecord, StoreError> {
        self.docs.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<DocumentRecord, StoreError> {
        self.docs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let mut records: Vec<_> = self.docs.read().await.values().cloned().collect();
        // Newest first, matching the upstream listing order.
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        match self.docs.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP store — external resume API
// ────────────────────────────────────────────────────────────────────────────

pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDocumentStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn save(&self, record: DocumentRecord) -> Result<DocumentRecord, StoreError> {
        let response = self
            .client
            .put(self.url(&format!("/resumes/{}", record.id)))
            .json(&record)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<DocumentRecord, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/resumes/{id}")))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn list(&self) -> Result<Vec<DocumentRecord>, StoreError> {
        let response = self.client.get(self.url("/resumes")).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/resumes/{id}")))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::models::{ResumeBlock, ResumeV2};

    fn record(title: &str) -> DocumentRecord {
        let now = Utc::now();
        DocumentRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            source_format: DocumentFormat::V2,
            document: ResumeV2::new(vec![ResumeBlock::Text {
                title: "个人总结".to_string(),
                data: "测试".to_string(),
            }]),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_memory_store_save_then_get() {
        let store = MemoryDocumentStore::new();
        let saved = store.save(record("我的简历")).await.unwrap();

        let fetched = store.get(saved.id).await.unwrap();
        assert_eq!(fetched.title, "我的简历");
        assert_eq!(fetched.document, saved.document);
    }

    #[tokio::test]
    async fn test_memory_store_get_missing_is_not_found() {
        let store = MemoryDocumentStore::new();
        let id = Uuid::new_v4();
        match store.get(id).await {
            Err(StoreError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_memory_store_list_newest_first() {
        let store = MemoryDocumentStore::new();
        let mut first = record("旧简历");
        first.created_at = Utc::now() - chrono::Duration::minutes(5);
        store.save(first).await.unwrap();
        store.save(record("新简历")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "新简历");
    }

    #[tokio::test]
    async fn test_memory_store_delete() {
        let store = MemoryDocumentStore::new();
        let saved = store.save(record("待删除")).await.unwrap();

        store.delete(saved.id).await.unwrap();
        assert!(matches!(
            store.delete(saved.id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_save_overwrites() {
        let store = MemoryDocumentStore::new();
        let mut saved = store.save(record("初稿")).await.unwrap();
        saved.title = "终稿".to_string();
        store.save(saved.clone()).await.unwrap();

        let fetched = store.get(saved.id).await.unwrap();
        assert_eq!(fetched.title, "终稿");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}

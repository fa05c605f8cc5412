//! In-process store.
//!
//! Backs the test suite and `--store memory` runs. Documents live in insertion
//! order behind an async read/write lock; every operation holds the guard for
//! its own duration only.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, mut doc: Document) -> Result<(), StoreError> {
        if !doc.contains_key("_id") {
            doc.insert("_id", ObjectId::new());
        }
        self.docs.write().await.push(doc);
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|doc| matches(doc, &filter)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        Ok(self.docs.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, want)| doc.get(key) == Some(want))
}

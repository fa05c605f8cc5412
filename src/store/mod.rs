//! Document store client.
//!
//! Handlers never see a driver. They talk to a [`DocumentStore`]: one named
//! collection that can insert a document, find the first document matching an
//! equality filter, list every document, and answer a liveness ping.
//!
//! Connection handling belongs to the backend. Each call acquires whatever it
//! needs (a pooled connection, a lock guard) and releases it before
//! returning, on success and on error alike.

use std::sync::Arc;

use async_trait::async_trait;
use bson::Document;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, StoreKind};

mod memory;
#[cfg(feature = "mongodb")]
mod mongo;

pub use memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

/// The store handle injected into the router and cloned per request.
pub type SharedStore = Arc<dyn DocumentStore>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No document matched the filter.
    #[error("not found")]
    NotFound,

    /// A document was read but does not have the expected shape.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The requested backend was not compiled in.
    #[error("store backend `{0}` is not available in this build")]
    Unsupported(&'static str),

    #[cfg(feature = "mongodb")]
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// One named collection of documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert(&self, doc: Document) -> Result<(), StoreError>;

    /// The first document whose fields equal every field of `filter`.
    ///
    /// "First" is whatever the backend returns first; no ordering is imposed.
    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Document>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Opens the backend selected by `config`.
pub async fn open(config: &Config) -> Result<SharedStore, StoreError> {
    match config.store {
        StoreKind::Memory => {
            info!("using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        #[cfg(feature = "mongodb")]
        StoreKind::Mongodb => {
            let store = MongoStore::connect(&config.mongo_uri, &config.database, &config.collection).await?;
            info!(database = %config.database, collection = %config.collection, "connected to mongodb");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StoreKind::Mongodb => Err(StoreError::Unsupported("mongodb")),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[tokio::test]
    async fn opens_memory_store() {
        let config = Config::try_parse_from(["pasta", "--store", "memory"]).unwrap();
        let store = open(&config).await.unwrap();
        store.ping().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[cfg(not(feature = "mongodb"))]
    #[tokio::test]
    async fn mongodb_needs_the_feature() {
        let config = Config::try_parse_from(["pasta", "--store", "mongodb"]).unwrap();
        assert!(matches!(open(&config).await, Err(StoreError::Unsupported("mongodb"))));
    }
}

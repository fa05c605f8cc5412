//! MongoDB backend.

use async_trait::async_trait;
use bson::{Document, doc};
use futures_util::TryStreamExt;
use mongodb::{Client, Collection, Database};

use super::{DocumentStore, StoreError};

/// A collection on a MongoDB deployment.
///
/// The driver's `Client` owns a connection pool; every operation checks a
/// connection out and returns it when the operation completes.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        let collection = database.collection::<Document>(collection);
        Ok(Self { database, collection })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, doc: Document) -> Result<(), StoreError> {
        self.collection.insert_one(doc).await?;
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        Ok(self.collection.find_one(filter).await?)
    }

    async fn find_all(&self) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect::<Vec<_>>().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

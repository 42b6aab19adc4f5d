use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::error::SeedError;

/// A model stored in one of the seeded collections.
pub trait SeedDocument: Serialize + DeserializeOwned + Validate + Send + Sync + Unpin {
    const COLLECTION_NAME: &'static str;
    /// Plural noun used in status lines.
    const LABEL: &'static str;

    fn id(&self) -> Option<ObjectId>;
    fn set_id(&mut self, id: ObjectId);
}

pub struct Crud<T: SeedDocument> {
    collection: Collection<T>,
}

impl<T: SeedDocument> Crud<T> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(T::COLLECTION_NAME),
        }
    }

    /// Validates every document, bulk-inserts them and returns them with the
    /// generated `_id`s filled in.
    pub async fn insert_many(&self, mut docs: Vec<T>) -> Result<Vec<T>, SeedError> {
        for item in &docs {
            item.validate().map_err(|source| SeedError::Validation {
                collection: T::COLLECTION_NAME,
                source,
            })?;
        }

        if docs.is_empty() {
            return Ok(docs);
        }

        let result = self.collection.insert_many(&docs).await?;
        for (index, id) in result.inserted_ids {
            if let (Some(item), Some(oid)) = (docs.get_mut(index), id.as_object_id()) {
                item.set_id(oid);
            }
        }

        Ok(docs)
    }

    pub async fn delete_all(&self) -> Result<u64, SeedError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    pub async fn count(&self) -> Result<u64, SeedError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<T>, SeedError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Identifier of the `index`-th inserted document, for threading into dependants.
pub fn id_at<T: SeedDocument>(docs: &[T], index: usize) -> Result<ObjectId, SeedError> {
    docs.get(index)
        .and_then(|item| item.id())
        .ok_or(SeedError::MissingReference {
            collection: T::COLLECTION_NAME,
            index,
        })
}

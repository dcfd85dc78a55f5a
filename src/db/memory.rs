// src/db/memory.rs
// DOCUMENTATION: In-memory place collection
// PURPOSE: Substitute backend for tests and local runs without PostgreSQL

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::{PlaceDocument, StoredPlace};

/// Thread-safe map of raw documents keyed by id
#[derive(Clone, Default)]
pub struct InMemoryPlaceStore {
    documents: Arc<RwLock<HashMap<Uuid, serde_json::Value>>>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an arbitrary document under `id`, bypassing the typed shape
    #[cfg(test)]
    pub async fn insert_raw(&self, id: Uuid, document: serde_json::Value) {
        self.documents.write().await.insert(id, document);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

fn to_document(doc: &PlaceDocument) -> Result<serde_json::Value, PlacesError> {
    serde_json::to_value(doc).map_err(|e| PlacesError::DatabaseError(e.to_string()))
}

#[async_trait]
impl PlaceStore for InMemoryPlaceStore {
    async fn insert(&self, doc: &PlaceDocument) -> Result<Uuid, PlacesError> {
        let document = to_document(doc)?;
        let mut documents = self.documents.write().await;

        let mut id = Uuid::new_v4();
        while documents.contains_key(&id) {
            id = Uuid::new_v4();
        }
        documents.insert(id, document);
        Ok(id)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<StoredPlace>, PlacesError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&id).map(|document| StoredPlace {
            id,
            document: document.clone(),
        }))
    }

    async fn find_all(&self) -> Result<Vec<StoredPlace>, PlacesError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .map(|(id, document)| StoredPlace {
                id: *id,
                document: document.clone(),
            })
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        doc: &PlaceDocument,
    ) -> Result<Option<StoredPlace>, PlacesError> {
        let document = to_document(doc)?;
        let mut documents = self.documents.write().await;

        match documents.get_mut(&id) {
            Some(slot) => {
                *slot = document.clone();
                Ok(Some(StoredPlace { id, document }))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, PlacesError> {
        let removed = self.documents.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

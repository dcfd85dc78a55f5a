// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and the storage backend. Each
// operation validates its input, makes one bounded storage call and maps
// the outcome onto a PlacesError or a result

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::{InsertAck, Place, PlaceRequest};

pub const PLACE_NOT_FOUND: &str = "Place with specified ID not found!";
pub const PLACE_DELETED: &str = "Place successfully deleted!";

/// Result of listing every place
/// DOCUMENTATION: Records that fail to decode are skipped and described in
/// `errors`; the remaining places are still returned
#[derive(Debug, Default)]
pub struct PlaceListing {
    pub places: Vec<Place>,
    pub errors: Vec<String>,
}

/// PlaceService: the five place operations over an injected store
/// DOCUMENTATION: Shared between actix workers through web::Data
pub struct PlaceService {
    store: Arc<dyn PlaceStore>,
    timeout: Duration,
}

impl PlaceService {
    pub fn new(store: Arc<dyn PlaceStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Parse a path identifier
    /// DOCUMENTATION: Malformed ids are rejected rather than looked up
    pub fn parse_id(raw: &str) -> Result<Uuid, PlacesError> {
        Uuid::parse_str(raw).map_err(|e| {
            log::warn!("Rejected malformed place id '{}': {}", raw, e);
            PlacesError::InvalidInput(format!("malformed place id '{}': {}", raw, e))
        })
    }

    /// Run one storage call under the configured deadline
    /// An expired call is dropped, not retried
    async fn bounded<T, F>(&self, call: F) -> Result<T, PlacesError>
    where
        F: Future<Output = Result<T, PlacesError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                log::error!("Storage call exceeded {:?}", self.timeout);
                Err(PlacesError::StorageTimeout(self.timeout))
            }
        }
    }

    /// Create a new place
    pub async fn create_place(&self, req: PlaceRequest) -> Result<InsertAck, PlacesError> {
        let doc = req.into_document()?;
        let inserted_id = self.bounded(self.store.insert(&doc)).await?;
        Ok(InsertAck { inserted_id })
    }

    /// Get a place by ID
    pub async fn get_place(&self, id: Uuid) -> Result<Place, PlacesError> {
        let stored = self.bounded(self.store.find_one(id)).await?.ok_or_else(|| {
            log::warn!("Place not found: {}", id);
            PlacesError::NotFound(PLACE_NOT_FOUND.to_string())
        })?;
        Place::try_from(stored)
    }

    /// Replace all four fields of an existing place
    pub async fn update_place(&self, id: Uuid, req: PlaceRequest) -> Result<Place, PlacesError> {
        let doc = req.into_document()?;
        let stored = self
            .bounded(self.store.update(id, &doc))
            .await?
            .ok_or_else(|| {
                log::warn!("Update matched no place: {}", id);
                PlacesError::NotFound(PLACE_NOT_FOUND.to_string())
            })?;
        Place::try_from(stored)
    }

    /// Hard delete a place
    pub async fn delete_place(&self, id: Uuid) -> Result<(), PlacesError> {
        let deleted = self.bounded(self.store.delete(id)).await?;
        if deleted < 1 {
            log::warn!("Delete matched no place: {}", id);
            return Err(PlacesError::NotFound(PLACE_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// List every place, best effort
    pub async fn list_places(&self) -> Result<PlaceListing, PlacesError> {
        let records = self.bounded(self.store.find_all()).await?;

        let mut listing = PlaceListing::default();
        for stored in records {
            match Place::try_from(stored) {
                Ok(place) => listing.places.push(place),
                Err(e) => {
                    log::warn!("Skipping undecodable place: {}", e);
                    listing.errors.push(e.to_string());
                }
            }
        }

        log::debug!(
            "Listed {} places ({} undecodable)",
            listing.places.len(),
            listing.errors.len()
        );
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{FailingStore, InMemoryPlaceStore, StalledStore};
    use serde_json::json;
    use std::collections::HashSet;

    fn service(store: &InMemoryPlaceStore) -> PlaceService {
        PlaceService::new(Arc::new(store.clone()), Duration::from_secs(10))
    }

    fn request(name: &str) -> PlaceRequest {
        PlaceRequest {
            name: name.into(),
            description: "A place".into(),
            latitude: "48.85".into(),
            longitude: "2.35".into(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);

        let ack = svc.create_place(request("Louvre")).await.unwrap();
        let place = svc.get_place(ack.inserted_id).await.unwrap();

        assert_eq!(place.id, ack.inserted_id);
        assert_eq!(place.name, "Louvre");
        assert_eq!(place.description, "A place");
        assert_eq!(place.latitude, "48.85");
        assert_eq!(place.longitude, "2.35");
    }

    #[tokio::test]
    async fn test_invalid_create_writes_nothing() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);

        let mut req = request("Louvre");
        req.longitude.clear();
        let err = svc.create_place(req).await.unwrap_err();

        assert!(matches!(err, PlacesError::ValidationError(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_is_idempotent_and_missing_target_is_not_found() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);
        let id = svc.create_place(request("Louvre")).await.unwrap().inserted_id;

        let first = svc.update_place(id, request("Orsay")).await.unwrap();
        let second = svc.update_place(id, request("Orsay")).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(svc.get_place(id).await.unwrap().name, "Orsay");

        let err = svc
            .update_place(Uuid::new_v4(), request("Orsay"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_once_then_not_found() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);
        let id = svc.create_place(request("Louvre")).await.unwrap().inserted_id;

        svc.delete_place(id).await.unwrap();
        let err = svc.delete_place(id).await.unwrap_err();
        assert_eq!(err.to_string(), PLACE_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_counts_after_deletes() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(svc.create_place(request(&format!("p{i}"))).await.unwrap().inserted_id);
        }
        svc.delete_place(ids[0]).await.unwrap();
        svc.delete_place(ids[3]).await.unwrap();

        let listing = svc.list_places().await.unwrap();
        assert_eq!(listing.places.len(), 3);
        assert!(listing.errors.is_empty());
    }

    #[tokio::test]
    async fn test_list_skips_undecodable_records() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);
        svc.create_place(request("Louvre")).await.unwrap();
        store
            .insert_raw(Uuid::new_v4(), json!({ "name": 42 }))
            .await;

        let listing = svc.list_places().await.unwrap();
        assert_eq!(listing.places.len(), 1);
        assert_eq!(listing.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = InMemoryPlaceStore::new();
        let svc = Arc::new(service(&store));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.create_place(request(&format!("p{i}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap().inserted_id);
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len().await, 50);
    }

    /// Runs every operation once and collects the errors in route order
    async fn every_operation_error(svc: &PlaceService) -> Vec<PlacesError> {
        let id = Uuid::new_v4();
        vec![
            svc.create_place(request("Louvre")).await.unwrap_err(),
            svc.get_place(id).await.unwrap_err(),
            svc.update_place(id, request("Orsay")).await.unwrap_err(),
            svc.delete_place(id).await.unwrap_err(),
            svc.list_places().await.unwrap_err(),
        ]
    }

    #[tokio::test]
    async fn test_stalled_storage_times_out() {
        let svc = PlaceService::new(Arc::new(StalledStore), Duration::from_millis(50));

        for err in every_operation_error(&svc).await {
            assert!(matches!(err, PlacesError::StorageTimeout(_)), "{err}");
            assert!(err.to_string().contains("50ms"));
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_surfaced_unchanged() {
        let svc = PlaceService::new(Arc::new(FailingStore), Duration::from_secs(10));

        for err in every_operation_error(&svc).await {
            assert!(matches!(err, PlacesError::DatabaseError(_)), "{err}");
        }
    }

    #[tokio::test]
    async fn test_get_undecodable_record_is_decode_error() {
        let store = InMemoryPlaceStore::new();
        let svc = service(&store);
        let id = Uuid::new_v4();
        store.insert_raw(id, json!({ "name": 1 })).await;

        match svc.get_place(id).await {
            Err(PlacesError::DecodeError { id: bad, .. }) => assert_eq!(bad, id.to_string()),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(PlaceService::parse_id("not-an-id").is_err());
        let id = Uuid::new_v4();
        assert_eq!(PlaceService::parse_id(&id.to_string()).unwrap(), id);
    }
}

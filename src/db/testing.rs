// src/db/testing.rs
// DOCUMENTATION: Misbehaving place stores for tests
// PURPOSE: Drive the timeout and storage-failure paths without PostgreSQL

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::{PlaceDocument, StoredPlace};

/// Every call outlives any sensible deadline
pub struct StalledStore;

async fn stall() {
    tokio::time::sleep(Duration::from_secs(60)).await;
}

#[async_trait]
impl PlaceStore for StalledStore {
    async fn insert(&self, _: &PlaceDocument) -> Result<Uuid, PlacesError> {
        stall().await;
        Ok(Uuid::new_v4())
    }

    async fn find_one(&self, _: Uuid) -> Result<Option<StoredPlace>, PlacesError> {
        stall().await;
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<StoredPlace>, PlacesError> {
        stall().await;
        Ok(Vec::new())
    }

    async fn update(&self, _: Uuid, _: &PlaceDocument) -> Result<Option<StoredPlace>, PlacesError> {
        stall().await;
        Ok(None)
    }

    async fn delete(&self, _: Uuid) -> Result<u64, PlacesError> {
        stall().await;
        Ok(0)
    }
}

/// Every call fails as if the database were unreachable
pub struct FailingStore;

fn refused() -> PlacesError {
    PlacesError::DatabaseError("connection refused".to_string())
}

#[async_trait]
impl PlaceStore for FailingStore {
    async fn insert(&self, _: &PlaceDocument) -> Result<Uuid, PlacesError> {
        Err(refused())
    }

    async fn find_one(&self, _: Uuid) -> Result<Option<StoredPlace>, PlacesError> {
        Err(refused())
    }

    async fn find_all(&self) -> Result<Vec<StoredPlace>, PlacesError> {
        Err(refused())
    }

    async fn update(&self, _: Uuid, _: &PlaceDocument) -> Result<Option<StoredPlace>, PlacesError> {
        Err(refused())
    }

    async fn delete(&self, _: Uuid) -> Result<u64, PlacesError> {
        Err(refused())
    }
}

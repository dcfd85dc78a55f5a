// src/db/store.rs
// DOCUMENTATION: Storage capability consumed by the place operations
// PURPOSE: Lets the service run against PostgreSQL in production and an
// in-memory backend in tests

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::PlacesError;
use crate::models::{PlaceDocument, StoredPlace};

/// Document collection of places keyed by a backend-generated id
/// DOCUMENTATION: Implementations must be safe for concurrent use; each
/// method is a single storage round trip
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Persist a new document and return the id generated for it
    async fn insert(&self, doc: &PlaceDocument) -> Result<Uuid, PlacesError>;

    /// Fetch one raw record, `None` when no record has this id
    async fn find_one(&self, id: Uuid) -> Result<Option<StoredPlace>, PlacesError>;

    /// Fetch every raw record in storage order
    async fn find_all(&self) -> Result<Vec<StoredPlace>, PlacesError>;

    /// Replace the document of one record and return the new state in the
    /// same call, `None` when no record matched
    async fn update(
        &self,
        id: Uuid,
        doc: &PlaceDocument,
    ) -> Result<Option<StoredPlace>, PlacesError>;

    /// Remove one record, returning how many were deleted (0 or 1)
    async fn delete(&self, id: Uuid) -> Result<u64, PlacesError>;
}

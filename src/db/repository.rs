// src/db/repository.rs
// DOCUMENTATION: PostgreSQL-backed place collection - all SQL queries
// PURPOSE: Stores each place as one JSONB document keyed by UUID

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::PlaceStore;
use crate::errors::PlacesError;
use crate::models::{PlaceDocument, StoredPlace};

/// Internal struct for mapping database rows
/// DOCUMENTATION: The document stays undecoded here so a malformed row can
/// be reported per record by the caller
#[derive(Debug, FromRow)]
struct PlaceRow {
    pub id: Uuid,
    pub document: serde_json::Value,
}

impl PlaceRow {
    fn into_stored(self) -> StoredPlace {
        StoredPlace {
            id: self.id,
            document: self.document,
        }
    }
}

/// PgPlaceStore: place collection in PostgreSQL
/// DOCUMENTATION: Cloning is cheap, the pool is reference counted
#[derive(Clone)]
pub struct PgPlaceStore {
    pool: PgPool,
}

impl PgPlaceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the places collection if it does not exist yet
    /// DOCUMENTATION: Called once at startup, the table is never altered
    pub async fn ensure_collection(&self) -> Result<(), PlacesError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS places (
                id UUID PRIMARY KEY,
                document JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create places collection: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}

#[async_trait]
impl PlaceStore for PgPlaceStore {
    async fn insert(&self, doc: &PlaceDocument) -> Result<Uuid, PlacesError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO places (id, document) VALUES ($1, $2)")
            .bind(id)
            .bind(Json(doc))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create place: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        log::info!("Created place with id: {}", id);
        Ok(id)
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<StoredPlace>, PlacesError> {
        let row = sqlx::query_as::<_, PlaceRow>("SELECT id, document FROM places WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching place: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(row.map(PlaceRow::into_stored))
    }

    async fn find_all(&self) -> Result<Vec<StoredPlace>, PlacesError> {
        let rows = sqlx::query_as::<_, PlaceRow>("SELECT id, document FROM places")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                log::error!("List query error: {}", e);
                PlacesError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(PlaceRow::into_stored).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        doc: &PlaceDocument,
    ) -> Result<Option<StoredPlace>, PlacesError> {
        // Single statement, so the returned row is exactly what was written
        let row = sqlx::query_as::<_, PlaceRow>(
            r#"
            UPDATE places
            SET document = $1
            WHERE id = $2
            RETURNING id, document
            "#,
        )
        .bind(Json(doc))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for place {}: {}", id, e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        if row.is_some() {
            log::info!("Updated place: {}", id);
        }
        Ok(row.map(PlaceRow::into_stored))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, PlacesError> {
        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                PlacesError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows > 0 {
            log::info!("Deleted place: {}", id);
        }
        Ok(rows)
    }
}

// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines serialization models for the API and the stored documents

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::PlacesError;

/// A place as returned by the API
/// DOCUMENTATION: The id is assigned by the storage backend on insert and
/// never changes afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    pub name: String,

    pub description: String,

    /// Kept as text, not parsed as a coordinate
    pub latitude: String,

    /// Kept as text, not parsed as a coordinate
    pub longitude: String,
}

/// Request DTO for creating or replacing a place
/// DOCUMENTATION: Body of POST /place and PUT /place/{placeId}
/// Missing keys default to empty strings so that the validator, not the
/// JSON parser, reports them. Any `id` key in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PlaceRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "latitude is required"))]
    pub latitude: String,

    #[validate(length(min = 1, message = "longitude is required"))]
    pub longitude: String,
}

/// The document persisted for each place
/// DOCUMENTATION: Strict shape - a stored document missing any field fails
/// to decode instead of silently defaulting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDocument {
    pub name: String,
    pub description: String,
    pub latitude: String,
    pub longitude: String,
}

/// A raw stored record: the identifier plus its undecoded document
#[derive(Debug, Clone)]
pub struct StoredPlace {
    pub id: Uuid,
    pub document: serde_json::Value,
}

/// Acknowledgement returned by a successful insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertAck {
    pub inserted_id: Uuid,
}

impl PlaceRequest {
    /// Run field-presence validation and convert into a storable document
    pub fn into_document(self) -> Result<PlaceDocument, PlacesError> {
        self.validate()?;
        Ok(PlaceDocument {
            name: self.name,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl Place {
    pub fn from_document(id: Uuid, doc: PlaceDocument) -> Self {
        Place {
            id,
            name: doc.name,
            description: doc.description,
            latitude: doc.latitude,
            longitude: doc.longitude,
        }
    }
}

impl TryFrom<StoredPlace> for Place {
    type Error = PlacesError;

    fn try_from(stored: StoredPlace) -> Result<Self, Self::Error> {
        let doc: PlaceDocument =
            serde_json::from_value(stored.document).map_err(|e| PlacesError::DecodeError {
                id: stored.id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Place::from_document(stored.id, doc))
    }
}

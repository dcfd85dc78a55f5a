// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, wrap results in the response envelope

use crate::errors::PlacesError;
use crate::models::{Envelope, PlaceRequest};
use crate::services::{PlaceService, PLACE_DELETED};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};

/// POST /place
/// Create a new place
pub async fn create_place(
    service: web::Data<PlaceService>,
    req: web::Json<PlaceRequest>,
) -> Result<impl Responder, PlacesError> {
    let ack = service.create_place(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(Envelope::success(StatusCode::CREATED, ack)))
}

/// GET /place/{placeId}
/// Retrieve a place by ID
pub async fn get_place(
    service: web::Data<PlaceService>,
    path: web::Path<String>,
) -> Result<impl Responder, PlacesError> {
    let id = PlaceService::parse_id(&path.into_inner())?;
    let place = service.get_place(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(StatusCode::OK, place)))
}

/// PUT /place/{placeId}
/// Replace all fields of a place
pub async fn update_place(
    service: web::Data<PlaceService>,
    path: web::Path<String>,
    req: web::Json<PlaceRequest>,
) -> Result<impl Responder, PlacesError> {
    let id = PlaceService::parse_id(&path.into_inner())?;
    let place = service.update_place(id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(StatusCode::OK, place)))
}

/// DELETE /place/{placeId}
pub async fn delete_place(
    service: web::Data<PlaceService>,
    path: web::Path<String>,
) -> Result<impl Responder, PlacesError> {
    let id = PlaceService::parse_id(&path.into_inner())?;
    service.delete_place(id).await?;
    Ok(HttpResponse::Ok().json(Envelope::success(StatusCode::OK, PLACE_DELETED)))
}

/// GET /places
/// List every place; undecodable records are reported under data.errors
pub async fn list_places(service: web::Data<PlaceService>) -> Result<impl Responder, PlacesError> {
    let listing = service.list_places().await?;
    Ok(HttpResponse::Ok()
        .json(Envelope::success(StatusCode::OK, listing.places).with_errors(listing.errors)))
}

/// Body extractor settings
/// DOCUMENTATION: The body is parsed as JSON whatever its Content-Type says.
/// Unparseable bodies become an enveloped 400 instead of actix's plain-text
/// default
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            log::warn!("Rejected malformed request body: {}", err);
            PlacesError::InvalidInput(err.to_string()).into()
        })
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/place", web::post().to(create_place))
        .route("/place/{placeId}", web::get().to(get_place))
        .route("/place/{placeId}", web::put().to(update_place))
        .route("/place/{placeId}", web::delete().to(delete_place))
        .route("/places", web::get().to(list_places));
}

use std::sync::Arc;

use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::api::problem::ProblemResponse;
use tracing::{error, info};

use crate::api::rest::auth::Requester;
use crate::api::rest::dto::{ForecastZoneDto, ForecastZoneReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::ForecastZonesService;

pub async fn create_zone(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<ForecastZoneReq>,
) -> Result<(StatusCode, Json<ForecastZoneDto>), ProblemResponse> {
    info!("Creating forecast zone: {}", req_body.name);

    match svc.create_zone(&requester, req_body.into()).await {
        Ok(zone) => Ok((StatusCode::CREATED, Json(ForecastZoneDto::from(zone)))),
        Err(e) => {
            error!("Failed to create forecast zone: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_zones(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<ForecastZoneDto>>, ProblemResponse> {
    info!("Listing forecast zones");

    match svc.list_zones(&requester).await {
        Ok(zones) => Ok(Json(zones.into_iter().map(ForecastZoneDto::from).collect())),
        Err(e) => {
            error!("Failed to list forecast zones: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn zones_by_system(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Requester(requester): Requester,
    Path(system_id): Path<i32>,
    uri: Uri,
) -> Result<Json<Vec<ForecastZoneDto>>, ProblemResponse> {
    info!("Listing forecast zones of system {}", system_id);

    match svc.list_by_system(&requester, system_id).await {
        Ok(zones) => Ok(Json(zones.into_iter().map(ForecastZoneDto::from).collect())),
        Err(e) => {
            error!("Failed to list zones of system {}: {}", system_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Public: no token required
pub async fn get_zone(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<ForecastZoneDto>, ProblemResponse> {
    info!("Getting forecast zone with id: {}", id);

    match svc.get_zone(id).await {
        Ok(zone) => Ok(Json(ForecastZoneDto::from(zone))),
        Err(e) => {
            error!("Failed to get forecast zone {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_zone(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<ForecastZoneReq>,
) -> Result<Json<ForecastZoneDto>, ProblemResponse> {
    info!("Replacing forecast zone {}", id);

    match svc.update_zone(&requester, id, req_body.into()).await {
        Ok(zone) => Ok(Json(ForecastZoneDto::from(zone))),
        Err(e) => {
            error!("Failed to update forecast zone {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_zone(
    Extension(svc): Extension<Arc<ForecastZonesService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting forecast zone: {}", id);

    match svc.delete_zone(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete forecast zone {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

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
use crate::api::rest::dto::{CreateHindcastPointReq, HindcastPointDto, UpdateHindcastPointReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::HindcastPointsService;

pub async fn create_point(
    Extension(svc): Extension<Arc<HindcastPointsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateHindcastPointReq>,
) -> Result<(StatusCode, Json<HindcastPointDto>), ProblemResponse> {
    info!(
        "Creating hindcast point at ({}, {})",
        req_body.latitude, req_body.longitude
    );

    match svc.create_point(&requester, req_body.into()).await {
        Ok(point) => Ok((StatusCode::CREATED, Json(HindcastPointDto::from(point)))),
        Err(e) => {
            error!("Failed to create hindcast point: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_points(
    Extension(svc): Extension<Arc<HindcastPointsService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<HindcastPointDto>>, ProblemResponse> {
    info!("Listing hindcast points");

    match svc.list_points(&requester).await {
        Ok(points) => Ok(Json(points.into_iter().map(HindcastPointDto::from).collect())),
        Err(e) => {
            error!("Failed to list hindcast points: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_point(
    Extension(svc): Extension<Arc<HindcastPointsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<HindcastPointDto>, ProblemResponse> {
    info!("Getting hindcast point with id: {}", id);

    match svc.get_point(&requester, id).await {
        Ok(point) => Ok(Json(HindcastPointDto::from(point))),
        Err(e) => {
            error!("Failed to get hindcast point {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_point(
    Extension(svc): Extension<Arc<HindcastPointsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<UpdateHindcastPointReq>,
) -> Result<Json<HindcastPointDto>, ProblemResponse> {
    info!("Updating hindcast point {}", id);

    match svc.update_point(&requester, id, req_body.into()).await {
        Ok(point) => Ok(Json(HindcastPointDto::from(point))),
        Err(e) => {
            error!("Failed to update hindcast point {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_point(
    Extension(svc): Extension<Arc<HindcastPointsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting hindcast point: {}", id);

    match svc.delete_point(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete hindcast point {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

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
use crate::api::rest::dto::{
    CreateForecastSystemReq, ForecastSystemDto, UpdateForecastSystemReq,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::ForecastSystemsService;

pub async fn create_system(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateForecastSystemReq>,
) -> Result<(StatusCode, Json<ForecastSystemDto>), ProblemResponse> {
    info!("Creating forecast system: {}", req_body.name);

    match svc.create_system(&requester, req_body.into()).await {
        Ok(system) => Ok((StatusCode::CREATED, Json(ForecastSystemDto::from(system)))),
        Err(e) => {
            error!("Failed to create forecast system: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_systems(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<ForecastSystemDto>>, ProblemResponse> {
    info!("Listing forecast systems");

    match svc.list_systems(&requester).await {
        Ok(systems) => Ok(Json(
            systems.into_iter().map(ForecastSystemDto::from).collect(),
        )),
        Err(e) => {
            error!("Failed to list forecast systems: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_system(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<ForecastSystemDto>, ProblemResponse> {
    info!("Getting forecast system with id: {}", id);

    match svc.get_system(&requester, id).await {
        Ok(system) => Ok(Json(ForecastSystemDto::from(system))),
        Err(e) => {
            error!("Failed to get forecast system {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_system(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<UpdateForecastSystemReq>,
) -> Result<StatusCode, ProblemResponse> {
    info!("Updating forecast system {}", id);

    match svc.update_system(&requester, id, req_body.into()).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to update forecast system {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_system(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting forecast system: {}", id);

    match svc.delete_system(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete forecast system {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Forecast system reachable through one of the requester's contracts
pub async fn system_by_contract(
    Extension(svc): Extension<Arc<ForecastSystemsService>>,
    Requester(requester): Requester,
    Path(contract_id): Path<i32>,
    uri: Uri,
) -> Result<Json<ForecastSystemDto>, ProblemResponse> {
    info!("Resolving forecast system for contract {}", contract_id);

    match svc.for_contract(&requester, contract_id).await {
        Ok(system) => Ok(Json(ForecastSystemDto::from(system))),
        Err(e) => {
            error!(
                "Failed to resolve forecast system for contract {}: {}",
                contract_id, e
            );
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

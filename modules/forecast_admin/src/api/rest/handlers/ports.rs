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
use crate::api::rest::dto::{CreatePortReq, PortDto, UpdatePortReq};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::PortsService;

/// Public: no token required
pub async fn list_ports(
    Extension(svc): Extension<Arc<PortsService>>,
    uri: Uri,
) -> Result<Json<Vec<PortDto>>, ProblemResponse> {
    info!("Listing ports");

    match svc.list_ports().await {
        Ok(ports) => Ok(Json(ports.into_iter().map(PortDto::from).collect())),
        Err(e) => {
            error!("Failed to list ports: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Public: no token required
pub async fn get_port(
    Extension(svc): Extension<Arc<PortsService>>,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<PortDto>, ProblemResponse> {
    info!("Getting port with id: {}", id);

    match svc.get_port(id).await {
        Ok(port) => Ok(Json(PortDto::from(port))),
        Err(e) => {
            error!("Failed to get port {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn create_port(
    Extension(svc): Extension<Arc<PortsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreatePortReq>,
) -> Result<(StatusCode, Json<PortDto>), ProblemResponse> {
    info!("Creating port: {}", req_body.name);

    match svc.create_port(&requester, req_body.into()).await {
        Ok(port) => Ok((StatusCode::CREATED, Json(PortDto::from(port)))),
        Err(e) => {
            error!("Failed to create port: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_port(
    Extension(svc): Extension<Arc<PortsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<UpdatePortReq>,
) -> Result<Json<PortDto>, ProblemResponse> {
    info!("Updating port {}", id);

    match svc.update_port(&requester, id, req_body.into()).await {
        Ok(port) => Ok(Json(PortDto::from(port))),
        Err(e) => {
            error!("Failed to update port {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_port(
    Extension(svc): Extension<Arc<PortsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting port: {}", id);

    match svc.delete_port(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete port {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::api::problem::ProblemResponse;
use tracing::{error, info};

use crate::api::rest::auth::Requester;
use crate::api::rest::dto::{CreateDownloadedDataReq, DownloadedDataDto, ListDownloadedQuery};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::DownloadedDataService;

pub async fn add_data(
    Extension(svc): Extension<Arc<DownloadedDataService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateDownloadedDataReq>,
) -> Result<(StatusCode, Json<DownloadedDataDto>), ProblemResponse> {
    info!("Storing downloaded data for point {}", req_body.point_id);

    match svc.add(&requester, req_body.into()).await {
        Ok(data) => Ok((StatusCode::CREATED, Json(DownloadedDataDto::from(data)))),
        Err(e) => {
            error!("Failed to store downloaded data: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_data(
    Extension(svc): Extension<Arc<DownloadedDataService>>,
    Requester(requester): Requester,
    Query(query): Query<ListDownloadedQuery>,
    uri: Uri,
) -> Result<Json<Vec<DownloadedDataDto>>, ProblemResponse> {
    info!("Listing downloaded data with query: {:?}", query);

    match svc.list(&requester, query.point_id).await {
        Ok(rows) => Ok(Json(rows.into_iter().map(DownloadedDataDto::from).collect())),
        Err(e) => {
            error!("Failed to list downloaded data: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_data(
    Extension(svc): Extension<Arc<DownloadedDataService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<DownloadedDataDto>, ProblemResponse> {
    info!("Getting downloaded data with id: {}", id);

    match svc.get(&requester, id).await {
        Ok(data) => Ok(Json(DownloadedDataDto::from(data))),
        Err(e) => {
            error!("Failed to get downloaded data {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn latest_by_point(
    Extension(svc): Extension<Arc<DownloadedDataService>>,
    Requester(requester): Requester,
    Path(point_id): Path<i32>,
    uri: Uri,
) -> Result<Json<DownloadedDataDto>, ProblemResponse> {
    info!("Getting latest download of point {}", point_id);

    match svc.latest_by_point(&requester, point_id).await {
        Ok(data) => Ok(Json(DownloadedDataDto::from(data))),
        Err(e) => {
            error!("Failed to get latest download of point {}: {}", point_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_data(
    Extension(svc): Extension<Arc<DownloadedDataService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting downloaded data: {}", id);

    match svc.delete(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete downloaded data {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use modkit::api::problem::ProblemResponse;
use modkit::PageRequest;
use tracing::{error, info};

use crate::api::rest::auth::Requester;
use crate::api::rest::dto::{
    CreateForecastResultReq, ForecastResultDto, ForecastResultPageDto, ListResultsQuery,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::ForecastResultsService;

pub async fn create_result(
    Extension(svc): Extension<Arc<ForecastResultsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateForecastResultReq>,
) -> Result<(StatusCode, Json<ForecastResultDto>), ProblemResponse> {
    info!("Storing forecast result for zone {}", req_body.forecast_zone_id);

    match svc.create_result(&requester, req_body.into()).await {
        Ok(result) => Ok((StatusCode::CREATED, Json(ForecastResultDto::from(result)))),
        Err(e) => {
            error!("Failed to store forecast result: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Paginated results of one zone, newest first
pub async fn list_results(
    Extension(svc): Extension<Arc<ForecastResultsService>>,
    Requester(requester): Requester,
    Query(query): Query<ListResultsQuery>,
    uri: Uri,
) -> Result<Json<ForecastResultPageDto>, ProblemResponse> {
    info!("Listing forecast results with query: {:?}", query);

    let page = PageRequest::new(query.page, query.page_size);
    match svc.list_by_zone(&requester, query.zone_id, page).await {
        Ok(page) => Ok(Json(ForecastResultPageDto::from(page))),
        Err(e) => {
            error!("Failed to list results of zone {}: {}", query.zone_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_result(
    Extension(svc): Extension<Arc<ForecastResultsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<ForecastResultDto>, ProblemResponse> {
    info!("Getting forecast result with id: {}", id);

    match svc.get_result(&requester, id).await {
        Ok(result) => Ok(Json(ForecastResultDto::from(result))),
        Err(e) => {
            error!("Failed to get forecast result {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn latest_by_zone(
    Extension(svc): Extension<Arc<ForecastResultsService>>,
    Requester(requester): Requester,
    Path(zone_id): Path<i32>,
    uri: Uri,
) -> Result<Json<ForecastResultDto>, ProblemResponse> {
    info!("Getting latest forecast result of zone {}", zone_id);

    match svc.latest_by_zone(&requester, zone_id).await {
        Ok(result) => Ok(Json(ForecastResultDto::from(result))),
        Err(e) => {
            error!("Failed to get latest result of zone {}: {}", zone_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_result(
    Extension(svc): Extension<Arc<ForecastResultsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting forecast result: {}", id);

    match svc.delete_result(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete forecast result {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

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
    ContractAssignmentReq, ContractDto, CreateContractReq, UpdateContractReq,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::ContractsService;

pub async fn create_contract(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateContractReq>,
) -> Result<(StatusCode, Json<ContractDto>), ProblemResponse> {
    info!("Creating contract: {}", req_body.name);

    match svc.create_contract(&requester, req_body.into()).await {
        Ok(contract) => Ok((StatusCode::CREATED, Json(ContractDto::from(contract)))),
        Err(e) => {
            error!("Failed to create contract: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_contracts(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<ContractDto>>, ProblemResponse> {
    info!("Listing contracts");

    match svc.list_contracts(&requester).await {
        Ok(contracts) => Ok(Json(contracts.into_iter().map(ContractDto::from).collect())),
        Err(e) => {
            error!("Failed to list contracts: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn my_contracts(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<ContractDto>>, ProblemResponse> {
    info!("Listing contracts of user {}", requester.id);

    match svc.my_contracts(&requester).await {
        Ok(contracts) => Ok(Json(contracts.into_iter().map(ContractDto::from).collect())),
        Err(e) => {
            error!("Failed to list contracts of user {}: {}", requester.id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_contract(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<ContractDto>, ProblemResponse> {
    info!("Getting contract with id: {}", id);

    match svc.get_contract(&requester, id).await {
        Ok(contract) => Ok(Json(ContractDto::from(contract))),
        Err(e) => {
            error!("Failed to get contract {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_contract(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<UpdateContractReq>,
) -> Result<Json<ContractDto>, ProblemResponse> {
    info!("Updating contract {}", id);

    match svc.update_contract(&requester, id, req_body.into()).await {
        Ok(contract) => Ok(Json(ContractDto::from(contract))),
        Err(e) => {
            error!("Failed to update contract {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_contract(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting contract: {}", id);

    match svc.delete_contract(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete contract {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn assign_contract(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<ContractAssignmentReq>,
) -> Result<StatusCode, ProblemResponse> {
    info!(
        "Assigning contract {} to user {}",
        req_body.contract_id, req_body.user_id
    );

    match svc
        .assign_to_user(&requester, req_body.contract_id, req_body.user_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to assign contract: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn remove_contract_from_user(
    Extension(svc): Extension<Arc<ContractsService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<ContractAssignmentReq>,
) -> Result<StatusCode, ProblemResponse> {
    info!(
        "Removing contract {} from user {}",
        req_body.contract_id, req_body.user_id
    );

    match svc
        .remove_from_user(&requester, req_body.contract_id, req_body.user_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to remove contract: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

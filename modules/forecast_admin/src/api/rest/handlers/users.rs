use std::sync::Arc;

use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension, Form,
};
use modkit::api::problem::ProblemResponse;
use tracing::{error, info};

use crate::api::rest::auth::Requester;
use crate::api::rest::dto::{
    ChangePasswordReq, CreateUserReq, LoginForm, TokenDto, UpdateUserReq, UserDto,
};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::UsersService;

/// Exchange username and password for a bearer token
pub async fn login(
    Extension(svc): Extension<Arc<UsersService>>,
    uri: Uri,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenDto>, ProblemResponse> {
    info!("Login attempt for user: {}", form.username);

    match svc.login(&form.username, &form.password).await {
        Ok(token) => Ok(Json(TokenDto::from(token))),
        Err(e) => {
            error!("Login failed for {}: {}", form.username, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// The authenticated user
pub async fn me(Requester(requester): Requester) -> Json<UserDto> {
    Json(UserDto::from(requester))
}

pub async fn create_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    uri: Uri,
    Json(req_body): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ProblemResponse> {
    info!("Creating user: {}", req_body.username);

    match svc.create_user(&requester, req_body.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => {
            error!("Failed to create user: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn list_users(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    uri: Uri,
) -> Result<Json<Vec<UserDto>>, ProblemResponse> {
    info!("Listing users");

    match svc.list_users(&requester).await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn get_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Getting user with id: {}", id);

    match svc.get_user(&requester, id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn update_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Updating user {}", id);

    match svc.update_user(&requester, id, req_body.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn change_password(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
    Json(req_body): Json<ChangePasswordReq>,
) -> Result<StatusCode, ProblemResponse> {
    info!("Changing password of user {}", id);

    match svc.change_password(&requester, id, req_body.password).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to change password of user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

pub async fn delete_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Requester(requester): Requester,
    Path(id): Path<i32>,
    uri: Uri,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting user: {}", id);

    match svc.delete_user(&requester, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

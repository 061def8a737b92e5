use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{AccessToken, NewUser, User, UserUpdate};

/// REST DTO for user representation; the password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub is_employee: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserReq {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_employee: bool,
}

/// Admins send every field; other users send only `password`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUserReq {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub is_employee: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangePasswordReq {
    pub password: String,
}

/// `application/x-www-form-urlencoded` login body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
            is_employee: user.is_employee,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
            is_employee: req.is_employee,
        }
    }
}

impl From<UpdateUserReq> for UserUpdate {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
            is_employee: req.is_employee,
        }
    }
}

impl From<AccessToken> for TokenDto {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}

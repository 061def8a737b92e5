use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::contract::model::{AccessToken, NewUser, User, UserUpdate};
use crate::domain::access::{require_admin, require_admin_or_self};
use crate::domain::error::DomainError;
use crate::domain::ports::{PasswordHasher, TokenCodec, TokenError};
use crate::domain::repo::{UserDraft, UsersRepository};
use crate::domain::service::{deleted, found, require_text};

const RESOURCE: &str = "User";
const MAX_NAME_LEN: usize = 255;

/// Accounts, credentials and access tokens.
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenCodec>,
}

impl UsersService {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            repo,
            hasher,
            tokens,
        }
    }

    #[instrument(name = "forecast_admin.service.login", skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, DomainError> {
        let user = self
            .repo
            .find_by_username(username)
            .await
            .map_err(DomainError::storage)?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self
            .verify_password(password.to_owned(), user.hashed_password.clone())
            .await?
        {
            debug!("password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.id.to_string())
            .map_err(|e| DomainError::internal(format!("token issue failed: {e:#}")))?;
        info!(user_id = user.id, "user logged in");
        Ok(AccessToken::bearer(token))
    }

    /// Resolve a bearer token into the stored user.
    #[instrument(name = "forecast_admin.service.authenticate", skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        let claims = self.tokens.decode(token).map_err(|e| match e {
            TokenError::Expired => DomainError::TokenExpired,
            TokenError::Invalid => DomainError::InvalidToken,
        })?;
        let id: i32 = claims.sub.parse().map_err(|_| DomainError::InvalidToken)?;

        self.repo
            .find_by_id(id)
            .await
            .map_err(DomainError::storage)?
            .ok_or_else(|| DomainError::unauthenticated("user no longer exists"))
    }

    #[instrument(
        name = "forecast_admin.service.create_user",
        skip(self, requester, new_user),
        fields(requester_id = requester.id, username = %new_user.username)
    )]
    pub async fn create_user(&self, requester: &User, new_user: NewUser) -> Result<User, DomainError> {
        require_admin(requester)?;
        info!("Creating new user");

        validate_username(&new_user.username)?;
        validate_email(&new_user.email)?;
        validate_password(&new_user.password)?;
        self.ensure_unique(&new_user.username, &new_user.email, None)
            .await?;

        let hashed_password = self.hash_password(new_user.password).await?;
        let user = self
            .repo
            .insert(UserDraft {
                username: new_user.username,
                email: new_user.email,
                hashed_password,
                is_admin: new_user.is_admin,
                is_employee: new_user.is_employee,
            })
            .await
            .map_err(DomainError::storage)?;

        info!(user_id = user.id, "Successfully created user");
        Ok(user)
    }

    #[instrument(name = "forecast_admin.service.get_user", skip(self, requester), fields(user_id = id))]
    pub async fn get_user(&self, requester: &User, id: i32) -> Result<User, DomainError> {
        require_admin_or_self(requester, id)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_users", skip_all)]
    pub async fn list_users(&self, requester: &User) -> Result<Vec<User>, DomainError> {
        require_admin(requester)?;
        let users = self.repo.list().await.map_err(DomainError::storage)?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Admins replace every field; other users may only change their own password.
    #[instrument(
        name = "forecast_admin.service.update_user",
        skip(self, requester, update),
        fields(requester_id = requester.id, user_id = id)
    )]
    pub async fn update_user(
        &self,
        requester: &User,
        id: i32,
        update: UserUpdate,
    ) -> Result<User, DomainError> {
        if !requester.is_admin {
            if requester.id != id {
                return Err(DomainError::permission_denied(
                    "only admins may update other users",
                ));
            }
            let password = update
                .password
                .ok_or_else(|| DomainError::validation("password", "is required"))?;
            return self.set_password(id, password).await;
        }

        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;

        let mut missing = Vec::new();
        if update.username.is_none() {
            missing.push("username");
        }
        if update.email.is_none() {
            missing.push("email");
        }
        if update.password.is_none() {
            missing.push("password");
        }
        if update.is_admin.is_none() {
            missing.push("is_admin");
        }
        if update.is_employee.is_none() {
            missing.push("is_employee");
        }
        let (
            Some(username),
            Some(email),
            Some(password),
            Some(is_admin),
            Some(is_employee),
        ) = (
            update.username,
            update.email,
            update.password,
            update.is_admin,
            update.is_employee,
        )
        else {
            return Err(DomainError::validation(
                "body",
                format!("missing fields: {}", missing.join(", ")),
            ));
        };

        validate_username(&username)?;
        validate_email(&email)?;
        validate_password(&password)?;
        self.ensure_unique(&username, &email, Some(id)).await?;

        current.username = username;
        current.email = email;
        current.hashed_password = self.hash_password(password).await?;
        current.is_admin = is_admin;
        current.is_employee = is_employee;

        self.repo
            .update(current.clone())
            .await
            .map_err(DomainError::storage)?;
        info!("Successfully updated user");
        Ok(current)
    }

    #[instrument(
        name = "forecast_admin.service.change_password",
        skip(self, requester, password),
        fields(requester_id = requester.id, user_id = id)
    )]
    pub async fn change_password(
        &self,
        requester: &User,
        id: i32,
        password: String,
    ) -> Result<(), DomainError> {
        require_admin_or_self(requester, id)?;
        self.set_password(id, password).await.map(|_| ())
    }

    #[instrument(name = "forecast_admin.service.delete_user", skip(self, requester), fields(user_id = id))]
    pub async fn delete_user(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)?;
        info!("Successfully deleted user");
        Ok(())
    }

    /// Create an administrator unless `username` is already taken. Returns true when created.
    #[instrument(name = "forecast_admin.service.ensure_admin", skip(self, email, password))]
    pub async fn ensure_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, DomainError> {
        if self
            .repo
            .username_owner(username)
            .await
            .map_err(DomainError::storage)?
            .is_some()
        {
            debug!("bootstrap admin already present");
            return Ok(false);
        }

        validate_username(username)?;
        validate_email(email)?;
        validate_password(password)?;
        if self
            .repo
            .email_owner(email)
            .await
            .map_err(DomainError::storage)?
            .is_some()
        {
            warn!("bootstrap admin email already used by another account");
            return Err(DomainError::already_exists(RESOURCE, "email", email));
        }

        let hashed_password = self.hash_password(password.to_owned()).await?;
        let user = self
            .repo
            .insert(UserDraft {
                username: username.to_owned(),
                email: email.to_owned(),
                hashed_password,
                is_admin: true,
                is_employee: false,
            })
            .await
            .map_err(DomainError::storage)?;
        info!(user_id = user.id, "bootstrap admin created");
        Ok(true)
    }

    async fn set_password(&self, id: i32, password: String) -> Result<User, DomainError> {
        validate_password(&password)?;
        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;
        current.hashed_password = self.hash_password(password).await?;
        self.repo
            .update(current.clone())
            .await
            .map_err(DomainError::storage)?;
        info!(user_id = id, "password changed");
        Ok(current)
    }

    async fn ensure_unique(
        &self,
        username: &str,
        email: &str,
        current: Option<i32>,
    ) -> Result<(), DomainError> {
        let taken_by_other = |owner: Option<i32>| owner.is_some_and(|o| Some(o) != current);

        if taken_by_other(
            self.repo
                .username_owner(username)
                .await
                .map_err(DomainError::storage)?,
        ) {
            return Err(DomainError::already_exists(RESOURCE, "username", username));
        }
        if taken_by_other(
            self.repo
                .email_owner(email)
                .await
                .map_err(DomainError::storage)?,
        ) {
            return Err(DomainError::already_exists(RESOURCE, "email", email));
        }
        Ok(())
    }

    // bcrypt is CPU bound; keep it off the async workers.
    async fn hash_password(&self, plain: String) -> Result<String, DomainError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plain))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {e}")))?
            .map_err(|e| DomainError::internal(format!("{e:#}")))
    }

    async fn verify_password(&self, plain: String, hashed: String) -> Result<bool, DomainError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plain, &hashed))
            .await
            .map_err(|e| DomainError::internal(format!("verification task failed: {e}")))?
            .map_err(|e| DomainError::internal(format!("{e:#}")))
    }
}

fn validate_username(username: &str) -> Result<(), DomainError> {
    require_text("username", username, MAX_NAME_LEN)
}

fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.is_empty() {
        return Err(DomainError::validation("password", "must not be empty"));
    }
    Ok(())
}

/// Minimal address shape check: `local@domain.tld`, no whitespace.
pub(crate) fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::validation("email", format!("'{email}' is not a valid email address"));
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.is_empty() || host.starts_with('.') {
        return Err(invalid());
    }
    Ok(())
}

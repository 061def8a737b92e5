/// Stored account. `hashed_password` never leaves the module through REST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    pub is_employee: bool,
}

impl User {
    pub fn is_admin_or_employee(&self) -> bool {
        self.is_admin || self.is_employee
    }
}

/// Data for creating a new user; `password` is plain text until hashed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
    pub is_employee: bool,
}

/// Update request. Admins must provide every field; other users only `password`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub is_employee: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

use thiserror::Error;

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> anyhow::Result<String>;
    fn verify(&self, plain: &str, hashed: &str) -> anyhow::Result<bool>;
}

/// Claims carried by an access token. `sub` is the user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Issues and verifies signed access tokens.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, subject: &str) -> anyhow::Result<String>;
    fn decode(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

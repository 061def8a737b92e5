pub mod security;

pub use security::{PasswordHasher, TokenClaims, TokenCodec, TokenError};

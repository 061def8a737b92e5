//! Bindings of the domain security ports to bcrypt and jsonwebtoken.

mod bcrypt_hasher;
mod jwt_codec;

pub use bcrypt_hasher::BcryptHasher;
pub use jwt_codec::JwtCodec;

use anyhow::bail;
use jsonwebtoken::Algorithm;

/// Only the HMAC family is supported: tokens are signed with a shared secret.
pub fn parse_algorithm(name: &str) -> anyhow::Result<Algorithm> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => bail!("unsupported jwt_algorithm '{other}' (expected HS256, HS384 or HS512)"),
    }
}

use anyhow::Context;

use crate::domain::ports::PasswordHasher;

pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plain: &str) -> anyhow::Result<String> {
        bcrypt::hash(plain, self.cost).context("bcrypt hash failed")
    }

    fn verify(&self, plain: &str, hashed: &str) -> anyhow::Result<bool> {
        bcrypt::verify(plain, hashed).context("bcrypt verify failed")
    }
}

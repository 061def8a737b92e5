use serde::{Deserialize, Serialize};

/// One year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 525_600;

/// Configuration for the forecast_admin module (`modules.forecast_admin`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastAdminConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Administrator account created at startup when no user with `username` exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for ForecastAdminConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_algorithm: default_jwt_algorithm(),
            access_token_expire_minutes: default_access_token_expire_minutes(),
            bcrypt_cost: default_bcrypt_cost(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            bootstrap_admin: None,
        }
    }
}

pub const DEFAULT_JWT_SECRET: &str = "change-me";

pub const BCRYPT_MIN_COST: u32 = 4;
pub const BCRYPT_MAX_COST: u32 = 31;

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

impl ForecastAdminConfig {
    /// Reject settings the module cannot start with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jwt_secret.trim().is_empty() {
            anyhow::bail!("forecast_admin.jwt_secret must not be empty");
        }
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.access_token_expire_minutes) {
            anyhow::bail!(
                "forecast_admin.access_token_expire_minutes must be between 1 and {MAX_TOKEN_TTL_MINUTES}"
            );
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            anyhow::bail!(
                "forecast_admin.default_page_size must be between 1 and max_page_size ({})",
                self.max_page_size
            );
        }
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&self.bcrypt_cost) {
            anyhow::bail!(
                "forecast_admin.bcrypt_cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}"
            );
        }
        crate::infra::security::parse_algorithm(&self.jwt_algorithm)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ForecastAdminConfig::default();
        assert_eq!(cfg.jwt_algorithm, "HS256");
        assert_eq!(cfg.access_token_expire_minutes, 30);
        assert_eq!(cfg.default_page_size, 10);
        assert_eq!(cfg.max_page_size, 100);
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_section_is_filled_with_defaults() {
        let cfg: ForecastAdminConfig = serde_json::from_value(serde_json::json!({
            "jwt_secret": "s3cr3t",
            "bootstrap_admin": {"username": "root", "email": "root@seacast.io", "password": "pw"}
        }))
        .unwrap();
        assert_eq!(cfg.jwt_secret, "s3cr3t");
        assert_eq!(cfg.max_page_size, 100);
        assert_eq!(cfg.bootstrap_admin.unwrap().username, "root");
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let cfg = ForecastAdminConfig {
            jwt_secret: "  ".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ForecastAdminConfig {
            jwt_algorithm: "RS256".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ForecastAdminConfig {
            default_page_size: 500,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        for minutes in [0, MAX_TOKEN_TTL_MINUTES + 1, i64::MAX] {
            let cfg = ForecastAdminConfig {
                access_token_expire_minutes: minutes,
                ..Default::default()
            };
            let err = cfg.validate().unwrap_err().to_string();
            assert!(err.contains("access_token_expire_minutes"), "{minutes}: {err}");
        }
        let cfg = ForecastAdminConfig {
            access_token_expire_minutes: MAX_TOKEN_TTL_MINUTES,
            ..Default::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<ForecastAdminConfig, _> =
            serde_json::from_value(serde_json::json!({"jwt_secrett": "typo"}));
        assert!(res.is_err());
    }
}

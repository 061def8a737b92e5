use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use async_trait::async_trait;
use modkit::{DbModule, Module, ModuleCtx, RestfulModule};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info, warn};

use crate::api::rest::routes;
use crate::config::{ForecastAdminConfig, DEFAULT_JWT_SECRET};
use crate::contract::client::ForecastAdminApi;
use crate::domain::service::{Security, ServiceConfig, Services};
use crate::gateways::local::ForecastAdminLocalClient;
use crate::infra::security::{parse_algorithm, BcryptHasher, JwtCodec};
use crate::infra::storage::{migrations::Migrator, repositories};

pub const MODULE_NAME: &str = "forecast_admin";

/// Forecast administration module: users, ports, contracts, forecast systems,
/// zones, results, hindcast points and downloaded data.
#[derive(Default)]
pub struct ForecastAdmin {
    // Read-mostly after init.
    services: ArcSwapOption<Services>,
    config: ArcSwap<ForecastAdminConfig>,
}

impl ForecastAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Arc<ForecastAdminConfig> {
        self.config.load_full()
    }

    pub fn services(&self) -> anyhow::Result<Services> {
        self.services
            .load()
            .as_ref()
            .map(|s| Services::clone(s))
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other modules.
    pub fn client(&self) -> anyhow::Result<Arc<dyn ForecastAdminApi>> {
        Ok(Arc::new(ForecastAdminLocalClient::new(self.services()?)))
    }

    async fn bootstrap_admin(&self) -> anyhow::Result<()> {
        let cfg = self.config();
        let Some(admin) = cfg.bootstrap_admin.as_ref() else {
            return Ok(());
        };
        let created = self
            .services()?
            .users
            .ensure_admin(&admin.username, &admin.email, &admin.password)
            .await?;
        if created {
            info!(username = %admin.username, "Bootstrap administrator created");
        } else {
            debug!(username = %admin.username, "Bootstrap administrator already present");
        }
        Ok(())
    }
}

#[async_trait]
impl Module for ForecastAdmin {
    async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        info!("Initializing forecast_admin module");

        let cfg: ForecastAdminConfig = ctx.module_config_opt()?.unwrap_or_default();
        cfg.validate()?;
        if cfg.jwt_secret == DEFAULT_JWT_SECRET {
            warn!("forecast_admin.jwt_secret is the built-in default; set a real secret outside development");
        }
        debug!(
            "Loaded forecast_admin config: algorithm={}, token_ttl_min={}, default_page_size={}, max_page_size={}",
            cfg.jwt_algorithm, cfg.access_token_expire_minutes, cfg.default_page_size, cfg.max_page_size
        );

        let db = ctx.db().ok_or_else(|| anyhow::anyhow!("DB required"))?;

        let token_ttl = chrono::Duration::try_minutes(cfg.access_token_expire_minutes)
            .ok_or_else(|| anyhow::anyhow!("forecast_admin.access_token_expire_minutes is out of range"))?;
        let security = Security {
            hasher: Arc::new(BcryptHasher::new(cfg.bcrypt_cost)),
            tokens: Arc::new(JwtCodec::new(
                &cfg.jwt_secret,
                parse_algorithm(&cfg.jwt_algorithm)?,
                token_ttl,
            )),
        };
        let service_config = ServiceConfig {
            default_page_size: cfg.default_page_size,
            max_page_size: cfg.max_page_size,
        };
        let services = Services::new(repositories(db.sea()), security, service_config);

        self.services.store(Some(Arc::new(services)));
        self.config.store(Arc::new(cfg));
        info!("forecast_admin services wired");
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[async_trait]
impl DbModule for ForecastAdmin {
    async fn migrate(&self, db: &modkit_db::DbHandle) -> anyhow::Result<()> {
        info!("Running forecast_admin database migrations");
        Migrator::up(db.seaorm(), None).await?;
        info!("forecast_admin database migrations completed successfully");
        self.bootstrap_admin().await
    }
}

impl RestfulModule for ForecastAdmin {
    fn register_rest(&self, _ctx: &ModuleCtx, router: axum::Router) -> anyhow::Result<axum::Router> {
        info!("Registering forecast_admin REST routes");
        let router = routes::register_routes(router, self.services()?)?;
        info!("forecast_admin REST routes registered successfully");
        Ok(router)
    }
}

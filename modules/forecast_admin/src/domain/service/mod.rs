//! Domain services: role checks and validation in front of the repository ports.
//! They depend only on the ports, not on infra types.

use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::{PasswordHasher, TokenCodec};
use crate::domain::repo::{
    ContractsRepository, DownloadedDataRepository, ForecastResultsRepository,
    ForecastSystemsRepository, ForecastZonesRepository, HindcastPointsRepository,
    PortsRepository, UsersRepository,
};

mod contracts;
mod downloaded_data;
mod forecast_results;
mod forecast_systems;
mod forecast_zones;
mod hindcast_points;
mod ports;
mod users;

pub use contracts::ContractsService;
pub use downloaded_data::DownloadedDataService;
pub use forecast_results::ForecastResultsService;
pub use forecast_systems::ForecastSystemsService;
pub use forecast_zones::ForecastZonesService;
pub use hindcast_points::HindcastPointsService;
pub use ports::PortsService;
pub use users::UsersService;

/// Configuration for the domain services
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Repository ports the services are wired with.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UsersRepository>,
    pub ports: Arc<dyn PortsRepository>,
    pub contracts: Arc<dyn ContractsRepository>,
    pub forecast_systems: Arc<dyn ForecastSystemsRepository>,
    pub forecast_zones: Arc<dyn ForecastZonesRepository>,
    pub forecast_results: Arc<dyn ForecastResultsRepository>,
    pub hindcast_points: Arc<dyn HindcastPointsRepository>,
    pub downloaded_data: Arc<dyn DownloadedDataRepository>,
}

/// Security adapters used by the users service.
#[derive(Clone)]
pub struct Security {
    pub hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenCodec>,
}

/// All services of the module, shared by REST handlers and the local client.
#[derive(Clone)]
pub struct Services {
    pub users: Arc<UsersService>,
    pub ports: Arc<PortsService>,
    pub contracts: Arc<ContractsService>,
    pub forecast_systems: Arc<ForecastSystemsService>,
    pub forecast_zones: Arc<ForecastZonesService>,
    pub forecast_results: Arc<ForecastResultsService>,
    pub hindcast_points: Arc<HindcastPointsService>,
    pub downloaded_data: Arc<DownloadedDataService>,
}

impl Services {
    pub fn new(repos: Repositories, security: Security, config: ServiceConfig) -> Self {
        Self {
            users: Arc::new(UsersService::new(
                repos.users.clone(),
                security.hasher,
                security.tokens,
            )),
            ports: Arc::new(PortsService::new(repos.ports.clone())),
            contracts: Arc::new(ContractsService::new(
                repos.contracts.clone(),
                repos.forecast_systems.clone(),
                repos.users.clone(),
            )),
            forecast_systems: Arc::new(ForecastSystemsService::new(
                repos.forecast_systems.clone(),
                repos.contracts.clone(),
                repos.ports.clone(),
                repos.hindcast_points.clone(),
            )),
            forecast_zones: Arc::new(ForecastZonesService::new(
                repos.forecast_zones.clone(),
                repos.forecast_systems.clone(),
            )),
            forecast_results: Arc::new(ForecastResultsService::new(
                repos.forecast_results.clone(),
                repos.forecast_zones.clone(),
                config,
            )),
            hindcast_points: Arc::new(HindcastPointsService::new(repos.hindcast_points.clone())),
            downloaded_data: Arc::new(DownloadedDataService::new(
                repos.downloaded_data,
                repos.hindcast_points,
            )),
        }
    }
}

/// Unwrap a lookup, mapping an absent row to `NotFound`.
pub(crate) fn found<T>(
    res: anyhow::Result<Option<T>>,
    resource: &'static str,
    id: i32,
) -> Result<T, DomainError> {
    res.map_err(DomainError::storage)?
        .ok_or_else(|| DomainError::not_found(resource, id))
}

/// Unwrap a lookup of a referenced row; an absent row is a validation error on `field`.
pub(crate) fn referenced<T>(
    res: anyhow::Result<Option<T>>,
    field: &'static str,
    resource: &'static str,
    id: i32,
) -> Result<T, DomainError> {
    res.map_err(DomainError::storage)?
        .ok_or_else(|| DomainError::validation(field, format!("{resource} {id} does not exist")))
}

/// Map a delete outcome: no affected row means the id was unknown.
pub(crate) fn deleted(
    res: anyhow::Result<bool>,
    resource: &'static str,
    id: i32,
) -> Result<(), DomainError> {
    if res.map_err(DomainError::storage)? {
        Ok(())
    } else {
        Err(DomainError::not_found(resource, id))
    }
}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), DomainError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::validation(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn require_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(DomainError::validation(
            "latitude",
            format!("{latitude} out of range [-90, 90]"),
        ));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(DomainError::validation(
            "longitude",
            format!("{longitude} out of range [-180, 180]"),
        ));
    }
    Ok(())
}

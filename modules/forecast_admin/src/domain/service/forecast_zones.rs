use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{ForecastZone, NewForecastZone, User};
use crate::domain::access::require_admin;
use crate::domain::error::DomainError;
use crate::domain::geometry::validate_geometry;
use crate::domain::repo::{ForecastSystemsRepository, ForecastZonesRepository};
use crate::domain::service::{deleted, found, referenced, require_text};

const RESOURCE: &str = "ForecastZone";
const MAX_NAME_LEN: usize = 255;
const MAX_DESCRIPTION_LEN: usize = 1000;

pub struct ForecastZonesService {
    repo: Arc<dyn ForecastZonesRepository>,
    systems: Arc<dyn ForecastSystemsRepository>,
}

impl ForecastZonesService {
    pub fn new(
        repo: Arc<dyn ForecastZonesRepository>,
        systems: Arc<dyn ForecastSystemsRepository>,
    ) -> Self {
        Self { repo, systems }
    }

    #[instrument(
        name = "forecast_admin.service.create_forecast_zone",
        skip(self, requester, new_zone),
        fields(name = %new_zone.name, forecast_system_id = new_zone.forecast_system_id)
    )]
    pub async fn create_zone(
        &self,
        requester: &User,
        new_zone: NewForecastZone,
    ) -> Result<ForecastZone, DomainError> {
        require_admin(requester)?;
        let new_zone = self.validated(new_zone).await?;

        let zone = self
            .repo
            .insert(new_zone)
            .await
            .map_err(DomainError::storage)?;
        info!(zone_id = zone.id, "Successfully created forecast zone");
        Ok(zone)
    }

    /// Any authenticated user may read a single zone.
    #[instrument(name = "forecast_admin.service.get_forecast_zone", skip(self), fields(zone_id = id))]
    pub async fn get_zone(&self, id: i32) -> Result<ForecastZone, DomainError> {
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_forecast_zones", skip_all)]
    pub async fn list_zones(&self, requester: &User) -> Result<Vec<ForecastZone>, DomainError> {
        require_admin(requester)?;
        self.repo.list().await.map_err(DomainError::storage)
    }

    #[instrument(name = "forecast_admin.service.list_zones_by_system", skip(self, requester))]
    pub async fn list_by_system(
        &self,
        requester: &User,
        system_id: i32,
    ) -> Result<Vec<ForecastZone>, DomainError> {
        require_admin(requester)?;
        let zones = self
            .repo
            .list_by_system(system_id)
            .await
            .map_err(DomainError::storage)?;
        debug!("Found {} zones", zones.len());
        Ok(zones)
    }

    /// Full replacement of every zone field.
    #[instrument(name = "forecast_admin.service.update_forecast_zone", skip(self, requester, replacement), fields(zone_id = id))]
    pub async fn update_zone(
        &self,
        requester: &User,
        id: i32,
        replacement: NewForecastZone,
    ) -> Result<ForecastZone, DomainError> {
        require_admin(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)?;
        let NewForecastZone {
            name,
            description,
            forecast_system_id,
            geom,
        } = self.validated(replacement).await?;

        let zone = ForecastZone {
            id,
            name,
            description,
            forecast_system_id,
            geom,
        };
        self.repo
            .update(zone.clone())
            .await
            .map_err(DomainError::storage)?;
        info!("Successfully updated forecast zone");
        Ok(zone)
    }

    #[instrument(name = "forecast_admin.service.delete_forecast_zone", skip(self, requester), fields(zone_id = id))]
    pub async fn delete_zone(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
    }

    async fn validated(&self, mut zone: NewForecastZone) -> Result<NewForecastZone, DomainError> {
        require_text("name", &zone.name, MAX_NAME_LEN)?;
        if let Some(description) = &zone.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::validation(
                    "description",
                    format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
                ));
            }
        }
        if zone.forecast_system_id <= 0 {
            return Err(DomainError::validation(
                "forecast_system_id",
                "must be greater than 0",
            ));
        }
        zone.geom = validate_geometry(&zone.geom)?;
        referenced(
            self.systems.find_by_id(zone.forecast_system_id).await,
            "forecast_system_id",
            "ForecastSystem",
            zone.forecast_system_id,
        )?;
        Ok(zone)
    }
}

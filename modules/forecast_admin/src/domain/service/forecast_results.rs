use std::sync::Arc;

use chrono::Utc;
use modkit::{PageRequest, PaginationError};
use tracing::{debug, info, instrument};

use crate::contract::model::{ForecastResult, ForecastResultsPage, NewForecastResult, User};
use crate::domain::access::{require_admin, require_admin_or_employee};
use crate::domain::error::DomainError;
use crate::domain::repo::{ForecastResultsRepository, ForecastZonesRepository};
use crate::domain::service::{deleted, found, referenced, ServiceConfig};

const RESOURCE: &str = "ForecastResult";

pub struct ForecastResultsService {
    repo: Arc<dyn ForecastResultsRepository>,
    zones: Arc<dyn ForecastZonesRepository>,
    config: ServiceConfig,
}

impl ForecastResultsService {
    pub fn new(
        repo: Arc<dyn ForecastResultsRepository>,
        zones: Arc<dyn ForecastZonesRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            zones,
            config,
        }
    }

    /// Stores a result stamped with the current UTC time.
    #[instrument(
        name = "forecast_admin.service.create_forecast_result",
        skip(self, requester, new_result),
        fields(zone_id = new_result.forecast_zone_id)
    )]
    pub async fn create_result(
        &self,
        requester: &User,
        new_result: NewForecastResult,
    ) -> Result<ForecastResult, DomainError> {
        require_admin_or_employee(requester)?;
        if !new_result.result_data.is_object() {
            return Err(DomainError::validation("result_data", "must be a JSON object"));
        }
        referenced(
            self.zones.find_by_id(new_result.forecast_zone_id).await,
            "forecast_zone_id",
            "ForecastZone",
            new_result.forecast_zone_id,
        )?;

        let result = self
            .repo
            .insert(
                new_result.forecast_zone_id,
                Utc::now(),
                new_result.result_data,
            )
            .await
            .map_err(DomainError::storage)?;
        info!(result_id = result.id, "Successfully stored forecast result");
        Ok(result)
    }

    #[instrument(name = "forecast_admin.service.get_forecast_result", skip(self, requester), fields(result_id = id))]
    pub async fn get_result(&self, requester: &User, id: i32) -> Result<ForecastResult, DomainError> {
        require_admin_or_employee(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_results_by_zone", skip(self, requester, page))]
    pub async fn list_by_zone(
        &self,
        requester: &User,
        zone_id: i32,
        page: PageRequest,
    ) -> Result<ForecastResultsPage, DomainError> {
        require_admin_or_employee(requester)?;
        let window = page
            .resolve(self.config.default_page_size, self.config.max_page_size)
            .map_err(pagination_error)?;
        referenced(self.zones.find_by_id(zone_id).await, "zone_id", "ForecastZone", zone_id)?;

        let items = self
            .repo
            .list_by_zone(zone_id, window.limit, window.offset)
            .await
            .map_err(DomainError::storage)?;
        debug!("Page {} holds {} results", window.page, items.len());
        Ok(ForecastResultsPage { items, window })
    }

    #[instrument(name = "forecast_admin.service.latest_result_by_zone", skip(self, requester))]
    pub async fn latest_by_zone(
        &self,
        requester: &User,
        zone_id: i32,
    ) -> Result<ForecastResult, DomainError> {
        require_admin_or_employee(requester)?;
        found(self.zones.find_by_id(zone_id).await, "ForecastZone", zone_id)?;
        self.repo
            .latest_by_zone(zone_id)
            .await
            .map_err(DomainError::storage)?
            .ok_or_else(|| DomainError::not_found(RESOURCE, zone_id))
    }

    #[instrument(name = "forecast_admin.service.delete_forecast_result", skip(self, requester), fields(result_id = id))]
    pub async fn delete_result(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
    }
}

fn pagination_error(err: PaginationError) -> DomainError {
    let field = match err {
        PaginationError::InvalidPage => "page",
        PaginationError::InvalidPageSize { .. } => "page_size",
    };
    DomainError::validation(field, err.to_string())
}

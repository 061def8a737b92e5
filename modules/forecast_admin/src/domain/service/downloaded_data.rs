use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::contract::model::{DownloadedData, NewDownloadedData, User};
use crate::domain::access::require_admin;
use crate::domain::error::DomainError;
use crate::domain::repo::{DownloadedDataRepository, HindcastPointsRepository};
use crate::domain::service::{deleted, found, referenced};

const RESOURCE: &str = "DownloadedData";

/// Downloads attached to hindcast points; admin only.
pub struct DownloadedDataService {
    repo: Arc<dyn DownloadedDataRepository>,
    points: Arc<dyn HindcastPointsRepository>,
}

impl DownloadedDataService {
    pub fn new(
        repo: Arc<dyn DownloadedDataRepository>,
        points: Arc<dyn HindcastPointsRepository>,
    ) -> Self {
        Self { repo, points }
    }

    #[instrument(
        name = "forecast_admin.service.add_downloaded_data",
        skip(self, requester, new_data),
        fields(point_id = new_data.point_id)
    )]
    pub async fn add(
        &self,
        requester: &User,
        new_data: NewDownloadedData,
    ) -> Result<DownloadedData, DomainError> {
        require_admin(requester)?;
        if new_data.point_id <= 0 {
            return Err(DomainError::validation("point_id", "must be greater than 0"));
        }
        if !new_data.data.is_object() {
            return Err(DomainError::validation("data", "must be a JSON object"));
        }
        referenced(
            self.points.find_by_id(new_data.point_id).await,
            "point_id",
            "HindcastPoint",
            new_data.point_id,
        )?;

        let downloaded_at = new_data.downloaded_at.unwrap_or_else(Utc::now);
        let stored = self
            .repo
            .insert(new_data.point_id, downloaded_at, new_data.data)
            .await
            .map_err(DomainError::storage)?;
        info!(data_id = stored.id, "downloaded data stored");
        Ok(stored)
    }

    #[instrument(name = "forecast_admin.service.get_downloaded_data", skip(self, requester), fields(data_id = id))]
    pub async fn get(&self, requester: &User, id: i32) -> Result<DownloadedData, DomainError> {
        require_admin(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_downloaded_data", skip(self, requester))]
    pub async fn list(
        &self,
        requester: &User,
        point_id: Option<i32>,
    ) -> Result<Vec<DownloadedData>, DomainError> {
        require_admin(requester)?;
        let rows = self
            .repo
            .list(point_id)
            .await
            .map_err(DomainError::storage)?;
        debug!("Listed {} downloads", rows.len());
        Ok(rows)
    }

    #[instrument(name = "forecast_admin.service.latest_downloaded_data", skip(self, requester))]
    pub async fn latest_by_point(
        &self,
        requester: &User,
        point_id: i32,
    ) -> Result<DownloadedData, DomainError> {
        require_admin(requester)?;
        self.repo
            .latest_by_point(point_id)
            .await
            .map_err(DomainError::storage)?
            .ok_or_else(|| DomainError::not_found(RESOURCE, point_id))
    }

    #[instrument(name = "forecast_admin.service.delete_downloaded_data", skip(self, requester), fields(data_id = id))]
    pub async fn delete(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
    }
}

use std::sync::Arc;

use tracing::{info, instrument};

use crate::contract::model::{HindcastPoint, HindcastPointPatch, NewHindcastPoint, User};
use crate::domain::access::require_admin;
use crate::domain::error::DomainError;
use crate::domain::repo::HindcastPointsRepository;
use crate::domain::service::{deleted, found, require_coordinates, require_text};

const RESOURCE: &str = "HindcastPoint";
const MAX_URL_LEN: usize = 2048;

/// Hindcast points; every operation is admin only.
pub struct HindcastPointsService {
    repo: Arc<dyn HindcastPointsRepository>,
}

impl HindcastPointsService {
    pub fn new(repo: Arc<dyn HindcastPointsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "forecast_admin.service.create_hindcast_point", skip_all)]
    pub async fn create_point(
        &self,
        requester: &User,
        new_point: NewHindcastPoint,
    ) -> Result<HindcastPoint, DomainError> {
        require_admin(requester)?;
        require_coordinates(new_point.latitude, new_point.longitude)?;
        require_text("url", &new_point.url, MAX_URL_LEN)?;

        let point = self
            .repo
            .insert(new_point)
            .await
            .map_err(DomainError::storage)?;
        info!(point_id = point.id, "hindcast point created");
        Ok(point)
    }

    #[instrument(name = "forecast_admin.service.get_hindcast_point", skip(self, requester), fields(point_id = id))]
    pub async fn get_point(&self, requester: &User, id: i32) -> Result<HindcastPoint, DomainError> {
        require_admin(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_hindcast_points", skip_all)]
    pub async fn list_points(&self, requester: &User) -> Result<Vec<HindcastPoint>, DomainError> {
        require_admin(requester)?;
        self.repo.list().await.map_err(DomainError::storage)
    }

    #[instrument(name = "forecast_admin.service.update_hindcast_point", skip(self, requester, patch), fields(point_id = id))]
    pub async fn update_point(
        &self,
        requester: &User,
        id: i32,
        patch: HindcastPointPatch,
    ) -> Result<HindcastPoint, DomainError> {
        require_admin(requester)?;
        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;

        if let Some(latitude) = patch.latitude {
            current.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            current.longitude = longitude;
        }
        require_coordinates(current.latitude, current.longitude)?;
        if let Some(url) = patch.url {
            require_text("url", &url, MAX_URL_LEN)?;
            current.url = url;
        }
        if let Some(models) = patch.models {
            current.models = Some(models);
        }

        self.repo
            .update(current.clone())
            .await
            .map_err(DomainError::storage)?;
        info!("hindcast point updated");
        Ok(current)
    }

    #[instrument(name = "forecast_admin.service.delete_hindcast_point", skip(self, requester), fields(point_id = id))]
    pub async fn delete_point(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
    }
}

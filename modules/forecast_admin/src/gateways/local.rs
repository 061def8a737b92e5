use async_trait::async_trait;

use crate::contract::{
    client::ForecastAdminApi,
    error::ForecastAdminError,
    model::{DownloadedData, ForecastResult, ForecastSystem, User},
};
use crate::domain::service::Services;

/// Local implementation of the ForecastAdminApi trait that delegates to the domain services
pub struct ForecastAdminLocalClient {
    services: Services,
}

impl ForecastAdminLocalClient {
    pub fn new(services: Services) -> Self {
        Self { services }
    }
}

#[async_trait]
impl ForecastAdminApi for ForecastAdminLocalClient {
    async fn authenticate(&self, token: &str) -> Result<User, ForecastAdminError> {
        self.services
            .users
            .authenticate(token)
            .await
            .map_err(Into::into)
    }

    async fn forecast_system_for_contract(
        &self,
        requester: &User,
        contract_id: i32,
    ) -> Result<ForecastSystem, ForecastAdminError> {
        self.services
            .forecast_systems
            .for_contract(requester, contract_id)
            .await
            .map_err(Into::into)
    }

    async fn latest_result_for_zone(
        &self,
        requester: &User,
        zone_id: i32,
    ) -> Result<ForecastResult, ForecastAdminError> {
        self.services
            .forecast_results
            .latest_by_zone(requester, zone_id)
            .await
            .map_err(Into::into)
    }

    async fn latest_downloaded_data(
        &self,
        requester: &User,
        point_id: i32,
    ) -> Result<DownloadedData, ForecastAdminError> {
        self.services
            .downloaded_data
            .latest_by_point(requester, point_id)
            .await
            .map_err(Into::into)
    }
}

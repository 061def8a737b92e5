use async_trait::async_trait;

use crate::contract::{
    error::ForecastAdminError,
    model::{DownloadedData, ForecastResult, ForecastSystem, User},
};

/// Public API trait for the forecast_admin module that other modules can use
#[async_trait]
pub trait ForecastAdminApi: Send + Sync {
    /// Resolve a bearer token into the stored user.
    async fn authenticate(&self, token: &str) -> Result<User, ForecastAdminError>;

    /// Forecast system reachable through a contract, with the contract access checks applied.
    async fn forecast_system_for_contract(
        &self,
        requester: &User,
        contract_id: i32,
    ) -> Result<ForecastSystem, ForecastAdminError>;

    /// Most recent forecast result for a zone.
    async fn latest_result_for_zone(
        &self,
        requester: &User,
        zone_id: i32,
    ) -> Result<ForecastResult, ForecastAdminError>;

    /// Most recent download for a hindcast point.
    async fn latest_downloaded_data(
        &self,
        requester: &User,
        point_id: i32,
    ) -> Result<DownloadedData, ForecastAdminError>;
}

//! Ports for the domain layer: persistence operations the services need.
//! Object-safe and async-friendly via `async_trait`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::contract::model::{
    Contract, DownloadedData, ForecastResult, ForecastSystem, ForecastZone, HindcastPoint,
    NewContract, NewForecastSystem, NewForecastZone, NewHindcastPoint, NewPort, Port, User,
};

/// Constraint violation reported by a storage adapter. Adapters attach it as the
/// source of the returned `anyhow::Error` so services can map it to a client error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageViolation {
    #[error("unique constraint violated: {0}")]
    Unique(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKey(String),
}

/// User row before the database assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    pub is_employee: bool,
}

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    /// Id of the user owning `username`, if any.
    async fn username_owner(&self, username: &str) -> anyhow::Result<Option<i32>>;
    /// Id of the user owning `email`, if any.
    async fn email_owner(&self, email: &str) -> anyhow::Result<Option<i32>>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn insert(&self, draft: UserDraft) -> anyhow::Result<User>;
    /// Update an existing user (by primary key in `u.id`).
    async fn update(&self, u: User) -> anyhow::Result<()>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait PortsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Port>>;
    async fn name_owner(&self, name: &str) -> anyhow::Result<Option<i32>>;
    async fn list(&self) -> anyhow::Result<Vec<Port>>;
    async fn insert(&self, p: NewPort) -> anyhow::Result<Port>;
    async fn update(&self, p: Port) -> anyhow::Result<()>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ContractsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Contract>>;
    async fn list(&self) -> anyhow::Result<Vec<Contract>>;
    /// Contracts assigned to a user through `user_contracts`.
    async fn list_for_user(&self, user_id: i32) -> anyhow::Result<Vec<Contract>>;
    async fn insert(&self, c: NewContract) -> anyhow::Result<Contract>;
    async fn update(&self, c: Contract) -> anyhow::Result<()>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
    async fn is_assigned(&self, contract_id: i32, user_id: i32) -> anyhow::Result<bool>;
    /// Idempotent: assigning twice keeps a single link.
    async fn assign(&self, contract_id: i32, user_id: i32) -> anyhow::Result<()>;
    /// Returns true if a link was removed.
    async fn unassign(&self, contract_id: i32, user_id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ForecastSystemsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastSystem>>;
    async fn name_owner(&self, name: &str) -> anyhow::Result<Option<i32>>;
    async fn list(&self) -> anyhow::Result<Vec<ForecastSystem>>;
    async fn insert(&self, s: NewForecastSystem) -> anyhow::Result<ForecastSystem>;
    async fn update(&self, s: ForecastSystem) -> anyhow::Result<()>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
    /// Clears `contract_id` on every system pointing at the contract; returns how many.
    async fn unlink_contract(&self, contract_id: i32) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait ForecastZonesRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastZone>>;
    async fn list(&self) -> anyhow::Result<Vec<ForecastZone>>;
    async fn list_by_system(&self, system_id: i32) -> anyhow::Result<Vec<ForecastZone>>;
    async fn insert(&self, z: NewForecastZone) -> anyhow::Result<ForecastZone>;
    async fn update(&self, z: ForecastZone) -> anyhow::Result<()>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ForecastResultsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastResult>>;
    async fn insert(
        &self,
        zone_id: i32,
        execution_date: DateTime<Utc>,
        result_data: Value,
    ) -> anyhow::Result<ForecastResult>;
    /// Newest first.
    async fn list_by_zone(
        &self,
        zone_id: i32,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<ForecastResult>>;
    async fn latest_by_zone(&self, zone_id: i32) -> anyhow::Result<Option<ForecastResult>>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait HindcastPointsRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<HindcastPoint>>;
    async fn list(&self) -> anyhow::Result<Vec<HindcastPoint>>;
    async fn insert(&self, p: NewHindcastPoint) -> anyhow::Result<HindcastPoint>;
    async fn update(&self, p: HindcastPoint) -> anyhow::Result<()>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait DownloadedDataRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<DownloadedData>>;
    /// Newest first; all points when `point_id` is `None`.
    async fn list(&self, point_id: Option<i32>) -> anyhow::Result<Vec<DownloadedData>>;
    async fn latest_by_point(&self, point_id: i32) -> anyhow::Result<Option<DownloadedData>>;
    async fn insert(
        &self,
        point_id: i32,
        downloaded_at: DateTime<Utc>,
        data: Value,
    ) -> anyhow::Result<DownloadedData>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

pub mod entity;
pub mod migrations;
pub mod sea_orm_repo;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::service::Repositories;
use sea_orm_repo::{
    SeaOrmContractsRepository, SeaOrmDownloadedDataRepository, SeaOrmForecastResultsRepository,
    SeaOrmForecastSystemsRepository, SeaOrmForecastZonesRepository,
    SeaOrmHindcastPointsRepository, SeaOrmPortsRepository, SeaOrmUsersRepository,
};

/// Wire every repository port to the same SeaORM connection.
pub fn repositories(conn: DatabaseConnection) -> Repositories {
    Repositories {
        users: Arc::new(SeaOrmUsersRepository::new(conn.clone())),
        ports: Arc::new(SeaOrmPortsRepository::new(conn.clone())),
        contracts: Arc::new(SeaOrmContractsRepository::new(conn.clone())),
        forecast_systems: Arc::new(SeaOrmForecastSystemsRepository::new(conn.clone())),
        forecast_zones: Arc::new(SeaOrmForecastZonesRepository::new(conn.clone())),
        forecast_results: Arc::new(SeaOrmForecastResultsRepository::new(conn.clone())),
        hindcast_points: Arc::new(SeaOrmHindcastPointsRepository::new(conn.clone())),
        downloaded_data: Arc::new(SeaOrmDownloadedDataRepository::new(conn)),
    }
}

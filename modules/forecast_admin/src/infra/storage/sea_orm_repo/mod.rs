//! SeaORM-backed implementations of the domain repository ports.
//!
//! Every repository is generic over `C: ConnectionTrait`, so it can be built on a
//! `DatabaseConnection` or on a transaction.

mod contracts;
mod downloaded_data;
mod forecast_results;
mod forecast_systems;
mod forecast_zones;
mod hindcast_points;
mod ports;
mod users;

pub use contracts::SeaOrmContractsRepository;
pub use downloaded_data::SeaOrmDownloadedDataRepository;
pub use forecast_results::SeaOrmForecastResultsRepository;
pub use forecast_systems::SeaOrmForecastSystemsRepository;
pub use forecast_zones::SeaOrmForecastZonesRepository;
pub use hindcast_points::SeaOrmHindcastPointsRepository;
pub use ports::SeaOrmPortsRepository;
pub use users::SeaOrmUsersRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::repo::StorageViolation;

/// Wrap a failed write. Constraint violations travel as the error source so the
/// domain can tell them apart from other database failures.
pub(crate) fn write_error(err: DbErr, op: &'static str) -> anyhow::Error {
    let violation = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(StorageViolation::Unique(detail)),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            Some(StorageViolation::ForeignKey(detail))
        }
        _ => None,
    };
    match violation {
        Some(v) => anyhow::Error::new(v).context(format!("{op} failed")),
        None => anyhow::Error::new(err).context(format!("{op} failed")),
    }
}

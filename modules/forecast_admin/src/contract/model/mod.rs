//! Pure models for inter-module communication (no serde/utoipa derives).

mod contracts;
mod downloaded_data;
mod forecast_results;
mod forecast_systems;
mod forecast_zones;
mod hindcast_points;
mod ports;
mod users;

pub use contracts::{Contract, ContractPatch, NewContract};
pub use downloaded_data::{DownloadedData, NewDownloadedData};
pub use forecast_results::{ForecastResult, ForecastResultsPage, NewForecastResult};
pub use forecast_systems::{ForecastSystem, ForecastSystemPatch, NewForecastSystem};
pub use forecast_zones::{ForecastZone, NewForecastZone};
pub use hindcast_points::{HindcastPoint, HindcastPointPatch, NewHindcastPoint};
pub use ports::{NewPort, Port, PortPatch};
pub use users::{AccessToken, NewUser, User, UserUpdate};

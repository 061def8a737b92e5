//! SeaORM entities, one module per table.

pub mod contracts;
pub mod downloaded_data;
pub mod forecast_results;
pub mod forecast_systems;
pub mod forecast_zones;
pub mod hindcast_points;
pub mod ports;
pub mod user_contracts;
pub mod users;

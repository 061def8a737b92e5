//! REST DTOs with serde/utoipa derives, plus conversions to and from contract models.

mod contracts;
mod downloaded_data;
mod forecast_results;
mod forecast_systems;
mod forecast_zones;
mod hindcast_points;
mod ports;
mod users;

pub use contracts::*;
pub use downloaded_data::*;
pub use forecast_results::*;
pub use forecast_systems::*;
pub use forecast_zones::*;
pub use hindcast_points::*;
pub use ports::*;
pub use users::*;

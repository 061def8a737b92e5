pub mod client;
pub mod error;
pub mod model;

pub use client::ForecastAdminApi;
pub use error::ForecastAdminError;
pub use model::*;

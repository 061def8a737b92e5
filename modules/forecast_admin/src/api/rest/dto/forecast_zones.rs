use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::contract::model::{ForecastZone, NewForecastZone};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastZoneDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub forecast_system_id: i32,
    /// GeoJSON `Point` or `Polygon`.
    #[schema(value_type = Object)]
    pub geom: Value,
}

/// Used by both create and full-replacement update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ForecastZoneReq {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub forecast_system_id: i32,
    #[schema(value_type = Object)]
    pub geom: Value,
}

impl From<ForecastZone> for ForecastZoneDto {
    fn from(z: ForecastZone) -> Self {
        Self {
            id: z.id,
            name: z.name,
            description: z.description,
            forecast_system_id: z.forecast_system_id,
            geom: z.geom,
        }
    }
}

impl From<ForecastZoneReq> for NewForecastZone {
    fn from(req: ForecastZoneReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            forecast_system_id: req.forecast_system_id,
            geom: req.geom,
        }
    }
}

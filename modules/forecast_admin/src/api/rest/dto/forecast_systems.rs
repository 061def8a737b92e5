use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{ForecastSystem, ForecastSystemPatch, NewForecastSystem};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastSystemDto {
    pub id: i32,
    pub name: String,
    pub contract_id: Option<i32>,
    pub port_id: Option<i32>,
    pub hindcast_point_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateForecastSystemReq {
    pub name: String,
    #[serde(default)]
    pub contract_id: Option<i32>,
    #[serde(default)]
    pub port_id: Option<i32>,
    #[serde(default)]
    pub hindcast_point_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateForecastSystemReq {
    pub name: Option<String>,
    pub contract_id: Option<i32>,
    pub port_id: Option<i32>,
    pub hindcast_point_id: Option<i32>,
}

impl From<ForecastSystem> for ForecastSystemDto {
    fn from(s: ForecastSystem) -> Self {
        Self {
            id: s.id,
            name: s.name,
            contract_id: s.contract_id,
            port_id: s.port_id,
            hindcast_point_id: s.hindcast_point_id,
        }
    }
}

impl From<CreateForecastSystemReq> for NewForecastSystem {
    fn from(req: CreateForecastSystemReq) -> Self {
        Self {
            name: req.name,
            contract_id: req.contract_id,
            port_id: req.port_id,
            hindcast_point_id: req.hindcast_point_id,
        }
    }
}

impl From<UpdateForecastSystemReq> for ForecastSystemPatch {
    fn from(req: UpdateForecastSystemReq) -> Self {
        Self {
            name: req.name,
            contract_id: req.contract_id,
            port_id: req.port_id,
            hindcast_point_id: req.hindcast_point_id,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewPort, Port, PortPatch};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortDto {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePortReq {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePortReq {
    pub name: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Port> for PortDto {
    fn from(p: Port) -> Self {
        Self {
            id: p.id,
            name: p.name,
            country: p.country,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

impl From<CreatePortReq> for NewPort {
    fn from(req: CreatePortReq) -> Self {
        Self {
            name: req.name,
            country: req.country,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

impl From<UpdatePortReq> for PortPatch {
    fn from(req: UpdatePortReq) -> Self {
        Self {
            name: req.name,
            country: req.country,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

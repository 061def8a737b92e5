use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{HindcastPoint, HindcastPointPatch, NewHindcastPoint};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HindcastPointDto {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateHindcastPointReq {
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    #[serde(default)]
    pub models: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateHindcastPointReq {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
    pub models: Option<Vec<String>>,
}

impl From<HindcastPoint> for HindcastPointDto {
    fn from(p: HindcastPoint) -> Self {
        Self {
            id: p.id,
            latitude: p.latitude,
            longitude: p.longitude,
            url: p.url,
            models: p.models,
        }
    }
}

impl From<CreateHindcastPointReq> for NewHindcastPoint {
    fn from(req: CreateHindcastPointReq) -> Self {
        Self {
            latitude: req.latitude,
            longitude: req.longitude,
            url: req.url,
            models: req.models,
        }
    }
}

impl From<UpdateHindcastPointReq> for HindcastPointPatch {
    fn from(req: UpdateHindcastPointReq) -> Self {
        Self {
            latitude: req.latitude,
            longitude: req.longitude,
            url: req.url,
            models: req.models,
        }
    }
}

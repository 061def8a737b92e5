use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::contract::model::{DownloadedData, NewDownloadedData};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DownloadedDataDto {
    pub id: i32,
    pub point_id: i32,
    pub downloaded_at: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDownloadedDataReq {
    pub point_id: i32,
    /// Defaults to the time of the request.
    #[serde(default)]
    pub downloaded_at: Option<DateTime<Utc>>,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ListDownloadedQuery {
    pub point_id: Option<i32>,
}

impl From<DownloadedData> for DownloadedDataDto {
    fn from(d: DownloadedData) -> Self {
        Self {
            id: d.id,
            point_id: d.point_id,
            downloaded_at: d.downloaded_at,
            data: d.data,
        }
    }
}

impl From<CreateDownloadedDataReq> for NewDownloadedData {
    fn from(req: CreateDownloadedDataReq) -> Self {
        Self {
            point_id: req.point_id,
            downloaded_at: req.downloaded_at,
            data: req.data,
        }
    }
}

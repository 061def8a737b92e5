use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::contract::model::{ForecastResult, ForecastResultsPage, NewForecastResult};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastResultDto {
    pub id: i32,
    pub forecast_zone_id: i32,
    pub execution_date: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub result_data: Value,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateForecastResultReq {
    pub forecast_zone_id: i32,
    #[schema(value_type = Object)]
    pub result_data: Value,
}

/// `GET /forecast-results` query.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ListResultsQuery {
    pub zone_id: i32,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForecastResultPageDto {
    pub items: Vec<ForecastResultDto>,
    pub page: u64,
    pub page_size: u64,
    pub limit: u64,
    pub offset: u64,
}

impl From<ForecastResult> for ForecastResultDto {
    fn from(r: ForecastResult) -> Self {
        Self {
            id: r.id,
            forecast_zone_id: r.forecast_zone_id,
            execution_date: r.execution_date,
            result_data: r.result_data,
        }
    }
}

impl From<CreateForecastResultReq> for NewForecastResult {
    fn from(req: CreateForecastResultReq) -> Self {
        Self {
            forecast_zone_id: req.forecast_zone_id,
            result_data: req.result_data,
        }
    }
}

impl From<ForecastResultsPage> for ForecastResultPageDto {
    fn from(page: ForecastResultsPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            page: page.window.page,
            page_size: page.window.page_size,
            limit: page.window.limit,
            offset: page.window.offset,
        }
    }
}

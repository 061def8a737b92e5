use chrono::{DateTime, Utc};
use modkit::PageWindow;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub id: i32,
    pub forecast_zone_id: i32,
    pub execution_date: DateTime<Utc>,
    pub result_data: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewForecastResult {
    pub forecast_zone_id: i32,
    pub result_data: Value,
}

/// One page of results for a zone, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResultsPage {
    pub items: Vec<ForecastResult>,
    pub window: PageWindow,
}

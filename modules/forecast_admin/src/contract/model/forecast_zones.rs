use serde_json::Value;

/// Area covered by a forecast system. `geom` is a validated GeoJSON `Point` or `Polygon`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastZone {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub forecast_system_id: i32,
    pub geom: Value,
}

/// Used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewForecastZone {
    pub name: String,
    pub description: Option<String>,
    pub forecast_system_id: i32,
    pub geom: Value,
}

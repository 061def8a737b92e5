#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSystem {
    pub id: i32,
    pub name: String,
    pub contract_id: Option<i32>,
    pub port_id: Option<i32>,
    pub hindcast_point_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForecastSystem {
    pub name: String,
    pub contract_id: Option<i32>,
    pub port_id: Option<i32>,
    pub hindcast_point_id: Option<i32>,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForecastSystemPatch {
    pub name: Option<String>,
    pub contract_id: Option<i32>,
    pub port_id: Option<i32>,
    pub hindcast_point_id: Option<i32>,
}

use chrono::NaiveDate;

/// Commercial agreement granting access to one forecast system for a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub id: i32,
    pub name: String,
    pub forecast_system_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContract {
    pub name: String,
    pub forecast_system_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractPatch {
    pub name: Option<String>,
    pub forecast_system_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    /// `Some(None)` clears the end date.
    pub end_date: Option<Option<NaiveDate>>,
    pub active: Option<bool>,
}

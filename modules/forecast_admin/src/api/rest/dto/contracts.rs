use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{Contract, ContractPatch, NewContract};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContractDto {
    pub id: i32,
    pub name: String,
    pub forecast_system_id: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateContractReq {
    pub name: String,
    pub forecast_system_id: i32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateContractReq {
    pub name: Option<String>,
    pub forecast_system_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    /// Omitted keeps the current value, `null` removes it.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
    pub active: Option<bool>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of the assign / remove-from-user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContractAssignmentReq {
    pub contract_id: i32,
    pub user_id: i32,
}

impl From<Contract> for ContractDto {
    fn from(c: Contract) -> Self {
        Self {
            id: c.id,
            name: c.name,
            forecast_system_id: c.forecast_system_id,
            start_date: c.start_date,
            end_date: c.end_date,
            active: c.active,
        }
    }
}

impl From<CreateContractReq> for NewContract {
    fn from(req: CreateContractReq) -> Self {
        Self {
            name: req.name,
            forecast_system_id: req.forecast_system_id,
            start_date: req.start_date,
            end_date: req.end_date,
            active: req.active,
        }
    }
}

impl From<UpdateContractReq> for ContractPatch {
    fn from(req: UpdateContractReq) -> Self {
        Self {
            name: req.name,
            forecast_system_id: req.forecast_system_id,
            start_date: req.start_date,
            end_date: req.end_date,
            active: req.active,
        }
    }
}

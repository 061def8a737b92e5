use sea_orm::entity::prelude::*;

use crate::contract::model::ForecastSystem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "forecast_systems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub contract_id: Option<i32>,
    #[sea_orm(unique)]
    pub port_id: Option<i32>,
    #[sea_orm(unique)]
    pub hindcast_point_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ForecastSystem {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            contract_id: m.contract_id,
            port_id: m.port_id,
            hindcast_point_id: m.hindcast_point_id,
        }
    }
}

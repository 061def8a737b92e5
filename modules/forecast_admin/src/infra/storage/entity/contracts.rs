use sea_orm::entity::prelude::*;

use crate::contract::model::Contract;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub forecast_system_id: i32,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Contract {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            forecast_system_id: m.forecast_system_id,
            start_date: m.start_date,
            end_date: m.end_date,
            active: m.active,
        }
    }
}

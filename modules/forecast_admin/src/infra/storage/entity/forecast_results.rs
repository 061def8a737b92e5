use sea_orm::entity::prelude::*;

use crate::contract::model::ForecastResult;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "forecast_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub forecast_zone_id: i32,
    pub execution_date: DateTimeUtc,
    pub result_data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ForecastResult {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            forecast_zone_id: m.forecast_zone_id,
            execution_date: m.execution_date,
            result_data: m.result_data,
        }
    }
}

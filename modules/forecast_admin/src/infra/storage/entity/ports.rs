use sea_orm::entity::prelude::*;

use crate::contract::model::Port;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Port {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country: m.country,
            latitude: m.latitude,
            longitude: m.longitude,
        }
    }
}

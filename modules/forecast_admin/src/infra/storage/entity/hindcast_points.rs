use sea_orm::entity::prelude::*;

use crate::contract::model::HindcastPoint;

/// `models` is stored as a JSON array of model names.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hindcast_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
    pub models: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn models_to_json(models: Option<Vec<String>>) -> Option<Json> {
    models.map(Json::from)
}

impl From<Model> for HindcastPoint {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            latitude: m.latitude,
            longitude: m.longitude,
            url: m.url,
            models: m.models.and_then(|v| serde_json::from_value(v).ok()),
        }
    }
}

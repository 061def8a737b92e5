use sea_orm::entity::prelude::*;

use crate::contract::model::DownloadedData;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "downloaded_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub point_id: i32,
    pub downloaded_at: DateTimeUtc,
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DownloadedData {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            point_id: m.point_id,
            downloaded_at: m.downloaded_at,
            data: m.data,
        }
    }
}

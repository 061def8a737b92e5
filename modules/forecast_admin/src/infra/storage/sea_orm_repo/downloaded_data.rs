use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;

use super::write_error;
use crate::contract::model::DownloadedData;
use crate::domain::repo::DownloadedDataRepository;
use crate::infra::storage::entity::downloaded_data::{
    ActiveModel as DataAM, Column, Entity as DataEntity,
};

pub struct SeaOrmDownloadedDataRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmDownloadedDataRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> DownloadedDataRepository for SeaOrmDownloadedDataRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<DownloadedData>> {
        let found = DataEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn list(&self, point_id: Option<i32>) -> anyhow::Result<Vec<DownloadedData>> {
        let mut query = DataEntity::find();
        if let Some(point_id) = point_id {
            query = query.filter(Column::PointId.eq(point_id));
        }
        let rows = query
            .order_by_desc(Column::DownloadedAt)
            .order_by_desc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn latest_by_point(&self, point_id: i32) -> anyhow::Result<Option<DownloadedData>> {
        let found = DataEntity::find()
            .filter(Column::PointId.eq(point_id))
            .order_by_desc(Column::DownloadedAt)
            .order_by_desc(Column::Id)
            .one(&self.conn)
            .await
            .context("latest_by_point failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(
        &self,
        point_id: i32,
        downloaded_at: DateTime<Utc>,
        data: Value,
    ) -> anyhow::Result<DownloadedData> {
        let m = DataAM {
            point_id: Set(point_id),
            downloaded_at: Set(downloaded_at),
            data: Set(data),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = DataEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

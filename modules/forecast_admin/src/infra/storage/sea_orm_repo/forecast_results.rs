use anyhow::Context;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};
use serde_json::Value;

use super::write_error;
use crate::contract::model::ForecastResult;
use crate::domain::repo::ForecastResultsRepository;
use crate::infra::storage::entity::forecast_results::{
    ActiveModel as ResultAM, Column, Entity as ResultEntity,
};

pub struct SeaOrmForecastResultsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmForecastResultsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

/// Results of one zone, newest first. Ties on the timestamp fall back to insertion order.
fn newest_for_zone(zone_id: i32) -> Select<ResultEntity> {
    ResultEntity::find()
        .filter(Column::ForecastZoneId.eq(zone_id))
        .order_by_desc(Column::ExecutionDate)
        .order_by_desc(Column::Id)
}

#[async_trait::async_trait]
impl<C> ForecastResultsRepository for SeaOrmForecastResultsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastResult>> {
        let found = ResultEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn insert(
        &self,
        zone_id: i32,
        execution_date: DateTime<Utc>,
        result_data: Value,
    ) -> anyhow::Result<ForecastResult> {
        let m = ResultAM {
            forecast_zone_id: Set(zone_id),
            execution_date: Set(execution_date),
            result_data: Set(result_data),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn list_by_zone(
        &self,
        zone_id: i32,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<ForecastResult>> {
        let rows = newest_for_zone(zone_id)
            .limit(limit)
            .offset(offset)
            .all(&self.conn)
            .await
            .context("list_by_zone failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn latest_by_zone(&self, zone_id: i32) -> anyhow::Result<Option<ForecastResult>> {
        let found = newest_for_zone(zone_id)
            .one(&self.conn)
            .await
            .context("latest_by_zone failed")?;
        Ok(found.map(Into::into))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = ResultEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::write_error;
use crate::contract::model::{ForecastZone, NewForecastZone};
use crate::domain::repo::ForecastZonesRepository;
use crate::infra::storage::entity::forecast_zones::{
    ActiveModel as ZoneAM, Column, Entity as ZoneEntity,
};

pub struct SeaOrmForecastZonesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmForecastZonesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ForecastZonesRepository for SeaOrmForecastZonesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastZone>> {
        let found = ZoneEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn list(&self) -> anyhow::Result<Vec<ForecastZone>> {
        let rows = ZoneEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_system(&self, system_id: i32) -> anyhow::Result<Vec<ForecastZone>> {
        let rows = ZoneEntity::find()
            .filter(Column::ForecastSystemId.eq(system_id))
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list_by_system failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, z: NewForecastZone) -> anyhow::Result<ForecastZone> {
        let m = ZoneAM {
            name: Set(z.name),
            description: Set(z.description),
            forecast_system_id: Set(z.forecast_system_id),
            geom: Set(z.geom),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, z: ForecastZone) -> anyhow::Result<()> {
        let m = ZoneAM {
            id: Set(z.id),
            name: Set(z.name),
            description: Set(z.description),
            forecast_system_id: Set(z.forecast_system_id),
            geom: Set(z.geom),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = ZoneEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

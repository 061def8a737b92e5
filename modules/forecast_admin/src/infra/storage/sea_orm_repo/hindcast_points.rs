use anyhow::Context;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use super::write_error;
use crate::contract::model::{HindcastPoint, NewHindcastPoint};
use crate::domain::repo::HindcastPointsRepository;
use crate::infra::storage::entity::hindcast_points::{
    models_to_json, ActiveModel as PointAM, Column, Entity as PointEntity,
};

pub struct SeaOrmHindcastPointsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmHindcastPointsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> HindcastPointsRepository for SeaOrmHindcastPointsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<HindcastPoint>> {
        let found = PointEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn list(&self) -> anyhow::Result<Vec<HindcastPoint>> {
        let rows = PointEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, p: NewHindcastPoint) -> anyhow::Result<HindcastPoint> {
        let m = PointAM {
            latitude: Set(p.latitude),
            longitude: Set(p.longitude),
            url: Set(p.url),
            models: Set(models_to_json(p.models)),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, p: HindcastPoint) -> anyhow::Result<()> {
        let m = PointAM {
            id: Set(p.id),
            latitude: Set(p.latitude),
            longitude: Set(p.longitude),
            url: Set(p.url),
            models: Set(models_to_json(p.models)),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = PointEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::write_error;
use crate::contract::model::{NewPort, Port};
use crate::domain::repo::PortsRepository;
use crate::infra::storage::entity::ports::{ActiveModel as PortAM, Column, Entity as PortEntity};

pub struct SeaOrmPortsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmPortsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> PortsRepository for SeaOrmPortsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Port>> {
        let found = PortEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn name_owner(&self, name: &str) -> anyhow::Result<Option<i32>> {
        let found = PortEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("name_owner failed")?;
        Ok(found.map(|m| m.id))
    }

    async fn list(&self) -> anyhow::Result<Vec<Port>> {
        let rows = PortEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, p: NewPort) -> anyhow::Result<Port> {
        let m = PortAM {
            name: Set(p.name),
            country: Set(p.country),
            latitude: Set(p.latitude),
            longitude: Set(p.longitude),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, p: Port) -> anyhow::Result<()> {
        let m = PortAM {
            id: Set(p.id),
            name: Set(p.name),
            country: Set(p.country),
            latitude: Set(p.latitude),
            longitude: Set(p.longitude),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = PortEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

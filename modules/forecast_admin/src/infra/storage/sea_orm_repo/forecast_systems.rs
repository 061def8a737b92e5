use anyhow::Context;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    Value,
};

use super::write_error;
use crate::contract::model::{ForecastSystem, NewForecastSystem};
use crate::domain::repo::ForecastSystemsRepository;
use crate::infra::storage::entity::forecast_systems::{
    ActiveModel as SystemAM, Column, Entity as SystemEntity,
};

pub struct SeaOrmForecastSystemsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmForecastSystemsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ForecastSystemsRepository for SeaOrmForecastSystemsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<ForecastSystem>> {
        let found = SystemEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn name_owner(&self, name: &str) -> anyhow::Result<Option<i32>> {
        let found = SystemEntity::find()
            .filter(Column::Name.eq(name))
            .one(&self.conn)
            .await
            .context("name_owner failed")?;
        Ok(found.map(|m| m.id))
    }

    async fn list(&self) -> anyhow::Result<Vec<ForecastSystem>> {
        let rows = SystemEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, s: NewForecastSystem) -> anyhow::Result<ForecastSystem> {
        let m = SystemAM {
            name: Set(s.name),
            contract_id: Set(s.contract_id),
            port_id: Set(s.port_id),
            hindcast_point_id: Set(s.hindcast_point_id),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, s: ForecastSystem) -> anyhow::Result<()> {
        let m = SystemAM {
            id: Set(s.id),
            name: Set(s.name),
            contract_id: Set(s.contract_id),
            port_id: Set(s.port_id),
            hindcast_point_id: Set(s.hindcast_point_id),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = SystemEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn unlink_contract(&self, contract_id: i32) -> anyhow::Result<u64> {
        let res = SystemEntity::update_many()
            .col_expr(Column::ContractId, Expr::value(Value::Int(None)))
            .filter(Column::ContractId.eq(contract_id))
            .exec(&self.conn)
            .await
            .context("unlink_contract failed")?;
        Ok(res.rows_affected)
    }
}

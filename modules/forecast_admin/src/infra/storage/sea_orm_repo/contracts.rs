use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::write_error;
use crate::contract::model::{Contract, NewContract};
use crate::domain::repo::{ContractsRepository, StorageViolation};
use crate::infra::storage::entity::contracts::{
    ActiveModel as ContractAM, Column, Entity as ContractEntity,
};
use crate::infra::storage::entity::user_contracts;

pub struct SeaOrmContractsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmContractsRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ContractsRepository for SeaOrmContractsRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Contract>> {
        let found = ContractEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn list(&self) -> anyhow::Result<Vec<Contract>> {
        let rows = ContractEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_user(&self, user_id: i32) -> anyhow::Result<Vec<Contract>> {
        let links = user_contracts::Entity::find()
            .filter(user_contracts::Column::UserId.eq(user_id))
            .all(&self.conn)
            .await
            .context("list_for_user links failed")?;
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ContractEntity::find()
            .filter(Column::Id.is_in(links.into_iter().map(|l| l.contract_id)))
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list_for_user failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, c: NewContract) -> anyhow::Result<Contract> {
        let m = ContractAM {
            name: Set(c.name),
            forecast_system_id: Set(c.forecast_system_id),
            start_date: Set(c.start_date),
            end_date: Set(c.end_date),
            active: Set(c.active),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, c: Contract) -> anyhow::Result<()> {
        let m = ContractAM {
            id: Set(c.id),
            name: Set(c.name),
            forecast_system_id: Set(c.forecast_system_id),
            start_date: Set(c.start_date),
            end_date: Set(c.end_date),
            active: Set(c.active),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = ContractEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn is_assigned(&self, contract_id: i32, user_id: i32) -> anyhow::Result<bool> {
        let link = user_contracts::Entity::find_by_id((user_id, contract_id))
            .one(&self.conn)
            .await
            .context("is_assigned failed")?;
        Ok(link.is_some())
    }

    async fn assign(&self, contract_id: i32, user_id: i32) -> anyhow::Result<()> {
        if self.is_assigned(contract_id, user_id).await? {
            return Ok(());
        }
        let link = user_contracts::ActiveModel {
            user_id: Set(user_id),
            contract_id: Set(contract_id),
        };
        match user_contracts::Entity::insert(link).exec(&self.conn).await {
            Ok(_) => Ok(()),
            Err(e) => {
                let err = write_error(e, "assign");
                // A concurrent assign of the same pair already holds the link.
                if matches!(
                    err.downcast_ref::<StorageViolation>(),
                    Some(StorageViolation::Unique(_))
                ) {
                    Ok(())
                } else {
                    Err(err)
                }
            }
        }
    }

    async fn unassign(&self, contract_id: i32, user_id: i32) -> anyhow::Result<bool> {
        let res = user_contracts::Entity::delete_by_id((user_id, contract_id))
            .exec(&self.conn)
            .await
            .context("unassign failed")?;
        Ok(res.rows_affected > 0)
    }
}

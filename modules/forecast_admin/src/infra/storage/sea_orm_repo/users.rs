use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::write_error;
use crate::contract::model::User;
use crate::domain::repo::{UserDraft, UsersRepository};
use crate::infra::storage::entity::users::{ActiveModel as UserAM, Column, Entity as UserEntity};

pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    async fn owner_of(&self, column: Column, value: &str) -> anyhow::Result<Option<i32>> {
        let found = UserEntity::find()
            .filter(column.eq(value))
            .one(&self.conn)
            .await
            .context("owner lookup failed")?;
        Ok(found.map(|m| m.id))
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("find_by_username failed")?;
        Ok(found.map(Into::into))
    }

    async fn username_owner(&self, username: &str) -> anyhow::Result<Option<i32>> {
        self.owner_of(Column::Username, username).await
    }

    async fn email_owner(&self, email: &str) -> anyhow::Result<Option<i32>> {
        self.owner_of(Column::Email, email).await
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let rows = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("list failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, draft: UserDraft) -> anyhow::Result<User> {
        let m = UserAM {
            username: Set(draft.username),
            email: Set(draft.email),
            hashed_password: Set(draft.hashed_password),
            is_admin: Set(draft.is_admin),
            is_employee: Set(draft.is_employee),
            ..Default::default()
        };
        let model = m
            .insert(&self.conn)
            .await
            .map_err(|e| write_error(e, "insert"))?;
        Ok(model.into())
    }

    async fn update(&self, u: User) -> anyhow::Result<()> {
        let m = UserAM {
            id: Set(u.id),
            username: Set(u.username),
            email: Set(u.email),
            hashed_password: Set(u.hashed_password),
            is_admin: Set(u.is_admin),
            is_employee: Set(u.is_employee),
        };
        m.update(&self.conn)
            .await
            .map_err(|e| write_error(e, "update"))?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}

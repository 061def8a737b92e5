//! Initial schema. Tables are created parents first and dropped in reverse.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    HashedPassword,
    IsAdmin,
    IsEmployee,
}

#[derive(DeriveIden)]
enum Ports {
    Table,
    Id,
    Name,
    Country,
    Latitude,
    Longitude,
}

#[derive(DeriveIden)]
enum HindcastPoints {
    Table,
    Id,
    Latitude,
    Longitude,
    Url,
    Models,
}

#[derive(DeriveIden)]
enum ForecastSystems {
    Table,
    Id,
    Name,
    ContractId,
    PortId,
    HindcastPointId,
}

#[derive(DeriveIden)]
enum Contracts {
    Table,
    Id,
    Name,
    ForecastSystemId,
    StartDate,
    EndDate,
    Active,
}

#[derive(DeriveIden)]
enum UserContracts {
    Table,
    UserId,
    ContractId,
}

#[derive(DeriveIden)]
enum ForecastZones {
    Table,
    Id,
    Name,
    Description,
    ForecastSystemId,
    Geom,
}

#[derive(DeriveIden)]
enum ForecastResults {
    Table,
    Id,
    ForecastZoneId,
    ExecutionDate,
    ResultData,
}

#[derive(DeriveIden)]
enum DownloadedData {
    Table,
    Id,
    PointId,
    DownloadedAt,
    Data,
}

fn pk(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk(Users::Id))
                    .col(ColumnDef::new(Users::Username).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Users::HashedPassword).string().not_null())
                    .col(ColumnDef::new(Users::IsAdmin).boolean().not_null().default(false))
                    .col(ColumnDef::new(Users::IsEmployee).boolean().not_null().default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ports::Table)
                    .if_not_exists()
                    .col(pk(Ports::Id))
                    .col(ColumnDef::new(Ports::Name).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Ports::Country).string_len(255).not_null())
                    .col(ColumnDef::new(Ports::Latitude).double().not_null())
                    .col(ColumnDef::new(Ports::Longitude).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HindcastPoints::Table)
                    .if_not_exists()
                    .col(pk(HindcastPoints::Id))
                    .col(ColumnDef::new(HindcastPoints::Latitude).double().not_null())
                    .col(ColumnDef::new(HindcastPoints::Longitude).double().not_null())
                    .col(ColumnDef::new(HindcastPoints::Url).string_len(2048).not_null())
                    .col(ColumnDef::new(HindcastPoints::Models).json().null())
                    .to_owned(),
            )
            .await?;

        // `contract_id` has no foreign key: contracts reference systems, not the other way round.
        manager
            .create_table(
                Table::create()
                    .table(ForecastSystems::Table)
                    .if_not_exists()
                    .col(pk(ForecastSystems::Id))
                    .col(
                        ColumnDef::new(ForecastSystems::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ForecastSystems::ContractId).integer().null().unique_key())
                    .col(ColumnDef::new(ForecastSystems::PortId).integer().null().unique_key())
                    .col(
                        ColumnDef::new(ForecastSystems::HindcastPointId)
                            .integer()
                            .null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forecast_systems_port")
                            .from(ForecastSystems::Table, ForecastSystems::PortId)
                            .to(Ports::Table, Ports::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forecast_systems_hindcast_point")
                            .from(ForecastSystems::Table, ForecastSystems::HindcastPointId)
                            .to(HindcastPoints::Table, HindcastPoints::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contracts::Table)
                    .if_not_exists()
                    .col(pk(Contracts::Id))
                    .col(ColumnDef::new(Contracts::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Contracts::ForecastSystemId).integer().not_null())
                    .col(ColumnDef::new(Contracts::StartDate).date().not_null())
                    .col(ColumnDef::new(Contracts::EndDate).date().null())
                    .col(ColumnDef::new(Contracts::Active).boolean().not_null().default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contracts_forecast_system")
                            .from(Contracts::Table, Contracts::ForecastSystemId)
                            .to(ForecastSystems::Table, ForecastSystems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserContracts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserContracts::UserId).integer().not_null())
                    .col(ColumnDef::new(UserContracts::ContractId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserContracts::UserId)
                            .col(UserContracts::ContractId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_contracts_user")
                            .from(UserContracts::Table, UserContracts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_contracts_contract")
                            .from(UserContracts::Table, UserContracts::ContractId)
                            .to(Contracts::Table, Contracts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ForecastZones::Table)
                    .if_not_exists()
                    .col(pk(ForecastZones::Id))
                    .col(ColumnDef::new(ForecastZones::Name).string_len(255).not_null())
                    .col(ColumnDef::new(ForecastZones::Description).string_len(1000).null())
                    .col(ColumnDef::new(ForecastZones::ForecastSystemId).integer().not_null())
                    .col(ColumnDef::new(ForecastZones::Geom).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forecast_zones_forecast_system")
                            .from(ForecastZones::Table, ForecastZones::ForecastSystemId)
                            .to(ForecastSystems::Table, ForecastSystems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ForecastResults::Table)
                    .if_not_exists()
                    .col(pk(ForecastResults::Id))
                    .col(ColumnDef::new(ForecastResults::ForecastZoneId).integer().not_null())
                    .col(
                        ColumnDef::new(ForecastResults::ExecutionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ForecastResults::ResultData).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forecast_results_zone")
                            .from(ForecastResults::Table, ForecastResults::ForecastZoneId)
                            .to(ForecastZones::Table, ForecastZones::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_forecast_results_zone_execution")
                    .table(ForecastResults::Table)
                    .col(ForecastResults::ForecastZoneId)
                    .col(ForecastResults::ExecutionDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DownloadedData::Table)
                    .if_not_exists()
                    .col(pk(DownloadedData::Id))
                    .col(ColumnDef::new(DownloadedData::PointId).integer().not_null())
                    .col(
                        ColumnDef::new(DownloadedData::DownloadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DownloadedData::Data).json().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_downloaded_data_point")
                            .from(DownloadedData::Table, DownloadedData::PointId)
                            .to(HindcastPoints::Table, HindcastPoints::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DownloadedData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ForecastResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ForecastZones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserContracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contracts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ForecastSystems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HindcastPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

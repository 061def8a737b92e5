use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::contract::model::{Contract, ContractPatch, NewContract, User};
use crate::domain::access::require_admin;
use crate::domain::error::DomainError;
use crate::domain::repo::{ContractsRepository, ForecastSystemsRepository, UsersRepository};
use crate::domain::service::{deleted, found, referenced, require_text};

const RESOURCE: &str = "Contract";
const MAX_NAME_LEN: usize = 255;

/// Contracts and their assignment to users.
pub struct ContractsService {
    repo: Arc<dyn ContractsRepository>,
    systems: Arc<dyn ForecastSystemsRepository>,
    users: Arc<dyn UsersRepository>,
}

impl ContractsService {
    pub fn new(
        repo: Arc<dyn ContractsRepository>,
        systems: Arc<dyn ForecastSystemsRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            repo,
            systems,
            users,
        }
    }

    #[instrument(
        name = "forecast_admin.service.create_contract",
        skip(self, requester, new_contract),
        fields(name = %new_contract.name, forecast_system_id = new_contract.forecast_system_id)
    )]
    pub async fn create_contract(
        &self,
        requester: &User,
        new_contract: NewContract,
    ) -> Result<Contract, DomainError> {
        require_admin(requester)?;
        require_text("name", &new_contract.name, MAX_NAME_LEN)?;
        check_dates(new_contract.start_date, new_contract.end_date)?;
        self.ensure_system(new_contract.forecast_system_id).await?;

        let contract = self
            .repo
            .insert(new_contract)
            .await
            .map_err(DomainError::storage)?;
        info!(contract_id = contract.id, "Successfully created contract");
        Ok(contract)
    }

    #[instrument(name = "forecast_admin.service.get_contract", skip(self, requester), fields(contract_id = id))]
    pub async fn get_contract(&self, requester: &User, id: i32) -> Result<Contract, DomainError> {
        require_admin(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_contracts", skip_all)]
    pub async fn list_contracts(&self, requester: &User) -> Result<Vec<Contract>, DomainError> {
        require_admin(requester)?;
        self.repo.list().await.map_err(DomainError::storage)
    }

    /// Admins see every contract, everyone else only the ones assigned to them.
    #[instrument(name = "forecast_admin.service.my_contracts", skip_all, fields(user_id = requester.id))]
    pub async fn my_contracts(&self, requester: &User) -> Result<Vec<Contract>, DomainError> {
        let contracts = if requester.is_admin {
            self.repo.list().await
        } else {
            self.repo.list_for_user(requester.id).await
        }
        .map_err(DomainError::storage)?;
        debug!("Found {} contracts", contracts.len());
        Ok(contracts)
    }

    #[instrument(name = "forecast_admin.service.update_contract", skip(self, requester, patch), fields(contract_id = id))]
    pub async fn update_contract(
        &self,
        requester: &User,
        id: i32,
        patch: ContractPatch,
    ) -> Result<Contract, DomainError> {
        require_admin(requester)?;
        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;

        if let Some(name) = patch.name {
            require_text("name", &name, MAX_NAME_LEN)?;
            current.name = name;
        }
        if let Some(system_id) = patch.forecast_system_id {
            if system_id != current.forecast_system_id {
                self.ensure_system(system_id).await?;
            }
            current.forecast_system_id = system_id;
        }
        if let Some(start_date) = patch.start_date {
            current.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            current.end_date = end_date;
        }
        if let Some(active) = patch.active {
            current.active = active;
        }
        check_dates(current.start_date, current.end_date)?;

        self.repo
            .update(current.clone())
            .await
            .map_err(DomainError::storage)?;
        info!("Successfully updated contract");
        Ok(current)
    }

    #[instrument(name = "forecast_admin.service.delete_contract", skip(self, requester), fields(contract_id = id))]
    pub async fn delete_contract(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)?;
        let unlinked = self
            .systems
            .unlink_contract(id)
            .await
            .map_err(DomainError::storage)?;
        info!(unlinked, "Successfully deleted contract");
        Ok(())
    }

    #[instrument(name = "forecast_admin.service.assign_contract", skip(self, requester))]
    pub async fn assign_to_user(
        &self,
        requester: &User,
        contract_id: i32,
        user_id: i32,
    ) -> Result<(), DomainError> {
        require_admin(requester)?;
        self.ensure_pair(contract_id, user_id).await?;
        self.repo
            .assign(contract_id, user_id)
            .await
            .map_err(DomainError::storage)?;
        info!("Contract assigned");
        Ok(())
    }

    /// Removing a link that does not exist is not an error.
    #[instrument(name = "forecast_admin.service.remove_contract", skip(self, requester))]
    pub async fn remove_from_user(
        &self,
        requester: &User,
        contract_id: i32,
        user_id: i32,
    ) -> Result<(), DomainError> {
        require_admin(requester)?;
        self.ensure_pair(contract_id, user_id).await?;
        let removed = self
            .repo
            .unassign(contract_id, user_id)
            .await
            .map_err(DomainError::storage)?;
        debug!(removed, "Contract unassigned");
        Ok(())
    }

    async fn ensure_system(&self, system_id: i32) -> Result<(), DomainError> {
        referenced(
            self.systems.find_by_id(system_id).await,
            "forecast_system_id",
            "ForecastSystem",
            system_id,
        )
        .map(|_| ())
    }

    async fn ensure_pair(&self, contract_id: i32, user_id: i32) -> Result<(), DomainError> {
        found(self.repo.find_by_id(contract_id).await, RESOURCE, contract_id)?;
        found(self.users.find_by_id(user_id).await, "User", user_id)?;
        Ok(())
    }
}

fn check_dates(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), DomainError> {
    match end {
        Some(end) if end < start => Err(DomainError::validation(
            "end_date",
            "must not be before start_date",
        )),
        _ => Ok(()),
    }
}

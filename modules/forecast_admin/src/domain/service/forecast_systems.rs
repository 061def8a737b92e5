use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument};

use crate::contract::model::{ForecastSystem, ForecastSystemPatch, NewForecastSystem, User};
use crate::domain::access::{ensure_contract_usable, require_admin, require_admin_or_employee};
use crate::domain::error::DomainError;
use crate::domain::repo::{
    ContractsRepository, ForecastSystemsRepository, HindcastPointsRepository, PortsRepository,
};
use crate::domain::service::{deleted, found, referenced, require_text};

const RESOURCE: &str = "ForecastSystem";
const MAX_NAME_LEN: usize = 255;

pub struct ForecastSystemsService {
    repo: Arc<dyn ForecastSystemsRepository>,
    contracts: Arc<dyn ContractsRepository>,
    ports: Arc<dyn PortsRepository>,
    points: Arc<dyn HindcastPointsRepository>,
}

impl ForecastSystemsService {
    pub fn new(
        repo: Arc<dyn ForecastSystemsRepository>,
        contracts: Arc<dyn ContractsRepository>,
        ports: Arc<dyn PortsRepository>,
        points: Arc<dyn HindcastPointsRepository>,
    ) -> Self {
        Self {
            repo,
            contracts,
            ports,
            points,
        }
    }

    #[instrument(
        name = "forecast_admin.service.create_forecast_system",
        skip(self, requester, new_system),
        fields(name = %new_system.name)
    )]
    pub async fn create_system(
        &self,
        requester: &User,
        new_system: NewForecastSystem,
    ) -> Result<ForecastSystem, DomainError> {
        require_admin(requester)?;
        require_text("name", &new_system.name, MAX_NAME_LEN)?;
        self.ensure_name_free(&new_system.name, None).await?;
        if let Some(contract_id) = new_system.contract_id {
            self.ensure_contract(contract_id).await?;
        }
        if let Some(port_id) = new_system.port_id {
            self.ensure_port(port_id).await?;
        }
        if let Some(point_id) = new_system.hindcast_point_id {
            self.ensure_point(point_id).await?;
        }

        let system = self
            .repo
            .insert(new_system)
            .await
            .map_err(DomainError::storage)?;
        info!(forecast_system_id = system.id, "Successfully created forecast system");
        Ok(system)
    }

    #[instrument(name = "forecast_admin.service.list_forecast_systems", skip_all)]
    pub async fn list_systems(&self, requester: &User) -> Result<Vec<ForecastSystem>, DomainError> {
        require_admin_or_employee(requester)?;
        let systems = self.repo.list().await.map_err(DomainError::storage)?;
        debug!("Listed {} forecast systems", systems.len());
        Ok(systems)
    }

    #[instrument(name = "forecast_admin.service.get_forecast_system", skip(self, requester), fields(forecast_system_id = id))]
    pub async fn get_system(&self, requester: &User, id: i32) -> Result<ForecastSystem, DomainError> {
        require_admin(requester)?;
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.update_forecast_system", skip(self, requester, patch), fields(forecast_system_id = id))]
    pub async fn update_system(
        &self,
        requester: &User,
        id: i32,
        patch: ForecastSystemPatch,
    ) -> Result<(), DomainError> {
        require_admin(requester)?;
        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;

        if let Some(name) = patch.name {
            require_text("name", &name, MAX_NAME_LEN)?;
            if name != current.name {
                self.ensure_name_free(&name, Some(id)).await?;
            }
            current.name = name;
        }
        if let Some(contract_id) = patch.contract_id {
            if current.contract_id != Some(contract_id) {
                self.ensure_contract(contract_id).await?;
            }
            current.contract_id = Some(contract_id);
        }
        if let Some(port_id) = patch.port_id {
            if current.port_id != Some(port_id) {
                self.ensure_port(port_id).await?;
            }
            current.port_id = Some(port_id);
        }
        if let Some(point_id) = patch.hindcast_point_id {
            if current.hindcast_point_id != Some(point_id) {
                self.ensure_point(point_id).await?;
            }
            current.hindcast_point_id = Some(point_id);
        }

        self.repo
            .update(current)
            .await
            .map_err(DomainError::storage)?;
        info!("Successfully updated forecast system");
        Ok(())
    }

    #[instrument(name = "forecast_admin.service.delete_forecast_system", skip(self, requester), fields(forecast_system_id = id))]
    pub async fn delete_system(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
    }

    /// Forecast system reachable through a contract, checked against today's date.
    pub async fn for_contract(
        &self,
        requester: &User,
        contract_id: i32,
    ) -> Result<ForecastSystem, DomainError> {
        self.for_contract_on(requester, contract_id, Utc::now().date_naive())
            .await
    }

    /// Admins bypass the assignment and validity checks.
    #[instrument(
        name = "forecast_admin.service.forecast_system_for_contract",
        skip(self, requester),
        fields(user_id = requester.id)
    )]
    pub async fn for_contract_on(
        &self,
        requester: &User,
        contract_id: i32,
        today: NaiveDate,
    ) -> Result<ForecastSystem, DomainError> {
        if !requester.is_admin {
            let assigned = self
                .contracts
                .is_assigned(contract_id, requester.id)
                .await
                .map_err(DomainError::storage)?;
            if !assigned {
                return Err(DomainError::permission_denied(
                    "contract is not assigned to the requester",
                ));
            }
        }

        let contract = found(
            self.contracts.find_by_id(contract_id).await,
            "Contract",
            contract_id,
        )?;
        if !requester.is_admin {
            ensure_contract_usable(&contract, today)?;
        }

        found(
            self.repo.find_by_id(contract.forecast_system_id).await,
            RESOURCE,
            contract.forecast_system_id,
        )
    }

    async fn ensure_name_free(&self, name: &str, current: Option<i32>) -> Result<(), DomainError> {
        let owner = self
            .repo
            .name_owner(name)
            .await
            .map_err(DomainError::storage)?;
        match owner {
            Some(owner) if Some(owner) != current => {
                Err(DomainError::already_exists(RESOURCE, "name", name))
            }
            _ => Ok(()),
        }
    }

    async fn ensure_contract(&self, contract_id: i32) -> Result<(), DomainError> {
        referenced(
            self.contracts.find_by_id(contract_id).await,
            "contract_id",
            "Contract",
            contract_id,
        )
        .map(|_| ())
    }

    async fn ensure_port(&self, port_id: i32) -> Result<(), DomainError> {
        referenced(self.ports.find_by_id(port_id).await, "port_id", "Port", port_id).map(|_| ())
    }

    async fn ensure_point(&self, point_id: i32) -> Result<(), DomainError> {
        referenced(
            self.points.find_by_id(point_id).await,
            "hindcast_point_id",
            "HindcastPoint",
            point_id,
        )
        .map(|_| ())
    }
}

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{NewPort, Port, PortPatch, User};
use crate::domain::access::require_admin;
use crate::domain::error::DomainError;
use crate::domain::repo::PortsRepository;
use crate::domain::service::{deleted, found, require_coordinates, require_text};

const RESOURCE: &str = "Port";
const MAX_NAME_LEN: usize = 255;

/// Ports are public to read; writes need an admin.
pub struct PortsService {
    repo: Arc<dyn PortsRepository>,
}

impl PortsService {
    pub fn new(repo: Arc<dyn PortsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(name = "forecast_admin.service.create_port", skip(self, requester, new_port), fields(name = %new_port.name))]
    pub async fn create_port(&self, requester: &User, new_port: NewPort) -> Result<Port, DomainError> {
        require_admin(requester)?;
        require_text("name", &new_port.name, MAX_NAME_LEN)?;
        require_text("country", &new_port.country, MAX_NAME_LEN)?;
        require_coordinates(new_port.latitude, new_port.longitude)?;
        self.ensure_name_free(&new_port.name, None).await?;

        let port = self
            .repo
            .insert(new_port)
            .await
            .map_err(DomainError::storage)?;
        info!(port_id = port.id, "Successfully created port");
        Ok(port)
    }

    #[instrument(name = "forecast_admin.service.get_port", skip(self), fields(port_id = id))]
    pub async fn get_port(&self, id: i32) -> Result<Port, DomainError> {
        found(self.repo.find_by_id(id).await, RESOURCE, id)
    }

    #[instrument(name = "forecast_admin.service.list_ports", skip(self))]
    pub async fn list_ports(&self) -> Result<Vec<Port>, DomainError> {
        let ports = self.repo.list().await.map_err(DomainError::storage)?;
        debug!("Listed {} ports", ports.len());
        Ok(ports)
    }

    #[instrument(name = "forecast_admin.service.update_port", skip(self, requester, patch), fields(port_id = id))]
    pub async fn update_port(
        &self,
        requester: &User,
        id: i32,
        patch: PortPatch,
    ) -> Result<Port, DomainError> {
        require_admin(requester)?;
        let mut current = found(self.repo.find_by_id(id).await, RESOURCE, id)?;

        if let Some(name) = patch.name {
            require_text("name", &name, MAX_NAME_LEN)?;
            if name != current.name {
                self.ensure_name_free(&name, Some(id)).await?;
            }
            current.name = name;
        }
        if let Some(country) = patch.country {
            require_text("country", &country, MAX_NAME_LEN)?;
            current.country = country;
        }
        if let Some(latitude) = patch.latitude {
            current.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            current.longitude = longitude;
        }
        require_coordinates(current.latitude, current.longitude)?;

        self.repo
            .update(current.clone())
            .await
            .map_err(DomainError::storage)?;
        info!("Successfully updated port");
        Ok(current)
    }

    #[instrument(name = "forecast_admin.service.delete_port", skip(self, requester), fields(port_id = id))]
    pub async fn delete_port(&self, requester: &User, id: i32) -> Result<(), DomainError> {
        require_admin(requester)?;
        deleted(self.repo.delete(id).await, RESOURCE, id)
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
}

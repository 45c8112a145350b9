use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::MemoryDb;
use crate::repository::{
    db::{DbError, Repository},
    gateway::CreateGatewayArgs,
    models::Gateway,
};

use super::error::GatewayError;

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GatewayParams {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub number: String,
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    pub async fn list_gateways(&self) -> Vec<Gateway> {
        let db = self.db.acquire().await;
        self.repo.get_gateways(&db)
    }

    pub async fn create_gateway(&self, params: GatewayParams) -> Result<Gateway, GatewayError> {
        let mut db = self.db.begin().await;
        let name = params.name.clone();
        let gateway = self
            .repo
            .create_gateway(
                &mut db,
                CreateGatewayArgs {
                    name: params.name,
                    number: params.number,
                },
            )
            .map_err(|_| GatewayError::NameTaken { name })?;
        info!(gateway_id = gateway.id, name = %gateway.name, "gateway created");
        Ok(gateway)
    }

    pub async fn update_gateway(
        &self,
        id: i64,
        params: GatewayParams,
    ) -> Result<Gateway, GatewayError> {
        let mut db = self.db.begin().await;
        let name = params.name.clone();
        self.repo
            .update_gateway(
                &mut db,
                Gateway {
                    id,
                    name: params.name,
                    number: params.number,
                },
            )
            .map_err(|e| match e {
                DbError::RowNotFound => GatewayError::NotFound { id },
                DbError::UniqueViolation { .. } => GatewayError::NameTaken { name },
            })
    }

    pub async fn delete_gateway(&self, id: i64) -> Result<Gateway, GatewayError> {
        let mut db = self.db.begin().await;
        let gateway = self
            .repo
            .delete_gateway(&mut db, id)
            .map_err(|_| GatewayError::NotFound { id })?;
        info!(gateway_id = id, name = %gateway.name, "gateway deleted");
        Ok(gateway)
    }
}

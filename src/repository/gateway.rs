use crate::client::memory::Tables;

use super::{
    db::{DbError, Repository},
    models::Gateway,
};

pub struct CreateGatewayArgs {
    pub name: String,
    pub number: String,
}

impl Repository {
    pub fn get_gateways(&self, db: &Tables) -> Vec<Gateway> {
        db.gateways.clone()
    }

    pub fn get_gateway_by_name(&self, db: &Tables, name: &str) -> Result<Gateway, DbError> {
        db.gateways
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn create_gateway(
        &self,
        db: &mut Tables,
        args: CreateGatewayArgs,
    ) -> Result<Gateway, DbError> {
        if db
            .gateways
            .iter()
            .any(|g| g.name.eq_ignore_ascii_case(&args.name))
        {
            return Err(DbError::UniqueViolation {
                field: "name".to_string(),
            });
        }
        let gateway = Gateway {
            id: db.next_id(),
            name: args.name,
            number: args.number,
        };
        db.gateways.push(gateway.clone());
        Ok(gateway)
    }

    pub fn update_gateway(&self, db: &mut Tables, gateway: Gateway) -> Result<Gateway, DbError> {
        if db
            .gateways
            .iter()
            .any(|g| g.id != gateway.id && g.name.eq_ignore_ascii_case(&gateway.name))
        {
            return Err(DbError::UniqueViolation {
                field: "name".to_string(),
            });
        }
        let row = db
            .gateways
            .iter_mut()
            .find(|g| g.id == gateway.id)
            .ok_or(DbError::RowNotFound)?;
        *row = gateway.clone();
        Ok(gateway)
    }

    pub fn delete_gateway(&self, db: &mut Tables, id: i64) -> Result<Gateway, DbError> {
        let position = db
            .gateways
            .iter()
            .position(|g| g.id == id)
            .ok_or(DbError::RowNotFound)?;
        Ok(db.gateways.remove(position))
    }
}

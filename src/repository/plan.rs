use bigdecimal::BigDecimal;

use crate::client::memory::Tables;

use super::{
    db::{DbError, Repository},
    models::{Plan, PlanLimits, PlanName},
};

#[derive(Debug, Clone)]
pub struct CreatePlanArgs {
    pub name: PlanName,
    pub price: BigDecimal,
    pub limits: PlanLimits,
    pub description: String,
}

impl Repository {
    pub fn get_plans(&self, db: &Tables) -> Vec<Plan> {
        db.plans.clone()
    }

    pub fn get_plan_by_id(&self, db: &Tables, id: i64) -> Result<Plan, DbError> {
        db.plans
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn get_plan_by_name(&self, db: &Tables, name: PlanName) -> Result<Plan, DbError> {
        db.plans
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or(DbError::RowNotFound)
    }

    pub fn create_plan(&self, db: &mut Tables, args: CreatePlanArgs) -> Result<Plan, DbError> {
        if db.plans.iter().any(|p| p.name == args.name) {
            return Err(DbError::UniqueViolation {
                field: "name".to_string(),
            });
        }
        let plan = Plan {
            id: db.next_id(),
            name: args.name,
            price: args.price,
            limits: args.limits,
            description: args.description,
        };
        db.plans.push(plan.clone());
        Ok(plan)
    }

    /// Full replace of the row with `plan.id`.
    pub fn update_plan(&self, db: &mut Tables, plan: Plan) -> Result<Plan, DbError> {
        if db
            .plans
            .iter()
            .any(|p| p.name == plan.name && p.id != plan.id)
        {
            return Err(DbError::UniqueViolation {
                field: "name".to_string(),
            });
        }
        let row = db
            .plans
            .iter_mut()
            .find(|p| p.id == plan.id)
            .ok_or(DbError::RowNotFound)?;
        *row = plan.clone();
        Ok(plan)
    }

    pub fn delete_plan(&self, db: &mut Tables, id: i64) -> Result<Plan, DbError> {
        let position = self.get_plan_position(db, id)?;
        Ok(db.plans.remove(position))
    }

    pub fn get_plan_position(&self, db: &Tables, id: i64) -> Result<usize, DbError> {
        db.plans
            .iter()
            .position(|p| p.id == id)
            .ok_or(DbError::RowNotFound)
    }

    pub fn swap_plans(&self, db: &mut Tables, a: usize, b: usize) {
        db.plans.swap(a, b);
    }
}

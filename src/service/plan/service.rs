use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::client::memory::MemoryDb;
use crate::repository::{
    db::{DbError, Repository},
    models::{Plan, PlanLimits, PlanName, User},
    plan::CreatePlanArgs,
};

use super::error::PlanError;

#[derive(Clone)]
pub struct Service {
    db: MemoryDb,
    repo: Repository,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PlanParams {
    pub name: PlanName,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub limits: PlanLimits,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MovePlanParams {
    pub direction: MoveDirection,
}

/// Label of the button a user sees next to a plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanAction {
    Choose,
    CurrentPlan,
    DefaultPlan,
    Upgrade,
    UpgradeToGo,
    Downgrade,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanOption {
    pub plan: Plan,
    pub action: PlanAction,
}

/// Decide how `target` relates to the plan the user currently holds.
pub fn plan_action(current: Option<&Plan>, target: &Plan) -> PlanAction {
    let current = match current {
        None => return PlanAction::Choose,
        Some(c) => c,
    };
    if current.name == target.name {
        return PlanAction::CurrentPlan;
    }
    if target.name == PlanName::Free {
        return PlanAction::DefaultPlan;
    }
    if current.name == PlanName::Free && target.name == PlanName::Go {
        return PlanAction::UpgradeToGo;
    }
    match target.price.cmp(&current.price) {
        Ordering::Greater => PlanAction::Upgrade,
        Ordering::Less => PlanAction::Downgrade,
        Ordering::Equal => PlanAction::Choose,
    }
}

impl Service {
    pub fn new(db: MemoryDb, repo: Repository) -> Self {
        Service { db, repo }
    }

    pub async fn get_plans_list(&self) -> Vec<Plan> {
        let db = self.db.acquire().await;
        self.repo.get_plans(&db)
    }

    pub async fn get_plan_by_id(&self, id: i64) -> Result<Plan, PlanError> {
        let db = self.db.acquire().await;
        self.repo
            .get_plan_by_id(&db, id)
            .map_err(|_| PlanError::NotFound { id })
    }

    pub async fn get_plan_by_name(&self, name: PlanName) -> Result<Plan, PlanError> {
        let db = self.db.acquire().await;
        self.repo
            .get_plan_by_name(&db, name)
            .map_err(|_| PlanError::NameNotFound { name })
    }

    /// The catalog as seen by `user`, each plan labelled with the action the
    /// user can take on it.
    pub async fn get_plan_options(&self, user: &User) -> Vec<PlanOption> {
        let db = self.db.acquire().await;
        let current = self.repo.get_plan_by_name(&db, user.plan).ok();
        self.repo
            .get_plans(&db)
            .into_iter()
            .map(|plan| PlanOption {
                action: plan_action(current.as_ref(), &plan),
                plan,
            })
            .collect()
    }

    pub async fn create_plan(&self, params: PlanParams) -> Result<Plan, PlanError> {
        validate_price(&params.price)?;
        let name = params.name;
        let mut db = self.db.begin().await;
        let plan = self
            .repo
            .create_plan(
                &mut db,
                CreatePlanArgs {
                    name: params.name,
                    price: params.price,
                    limits: params.limits,
                    description: params.description,
                },
            )
            .map_err(|_| PlanError::NameTaken { name })?;
        info!(plan_id = plan.id, %name, "plan created");
        Ok(plan)
    }

    /// Full replace. Users holding the old name follow the rename.
    pub async fn update_plan(&self, id: i64, params: PlanParams) -> Result<Plan, PlanError> {
        validate_price(&params.price)?;
        let mut db = self.db.begin().await;
        let old = self
            .repo
            .get_plan_by_id(&db, id)
            .map_err(|_| PlanError::NotFound { id })?;
        if old.name == PlanName::Free && params.name != PlanName::Free {
            return Err(PlanError::DefaultPlanRequired);
        }
        let name = params.name;
        let plan = self
            .repo
            .update_plan(
                &mut db,
                Plan {
                    id,
                    name: params.name,
                    price: params.price,
                    limits: params.limits,
                    description: params.description,
                },
            )
            .map_err(|e| match e {
                DbError::RowNotFound => PlanError::NotFound { id },
                DbError::UniqueViolation { .. } => PlanError::NameTaken { name },
            })?;
        if old.name != plan.name {
            let moved = self.repo.move_users_to_plan(&mut db, old.name, plan.name);
            info!(plan_id = id, from = %old.name, to = %plan.name, moved, "plan renamed");
        }
        Ok(plan)
    }

    /// Removes the plan. Users on it fall back to Free and a glow pointing at
    /// it is switched off, all under the same write.
    pub async fn delete_plan(&self, id: i64) -> Result<Plan, PlanError> {
        let mut db = self.db.begin().await;
        let plan = self
            .repo
            .get_plan_by_id(&db, id)
            .map_err(|_| PlanError::NotFound { id })?;
        if plan.name == PlanName::Free {
            return Err(PlanError::DefaultPlanRequired);
        }
        let plan = self
            .repo
            .delete_plan(&mut db, id)
            .map_err(|_| PlanError::NotFound { id })?;
        let moved = self
            .repo
            .move_users_to_plan(&mut db, plan.name, PlanName::Free);
        self.repo.disable_plan_glow_for(&mut db, id);
        info!(plan_id = id, name = %plan.name, moved, "plan deleted");
        Ok(plan)
    }

    /// Swap with the neighbour in `direction`. At either end of the catalog
    /// nothing moves. Returns the catalog in its new order.
    pub async fn move_plan(&self, id: i64, direction: MoveDirection) -> Result<Vec<Plan>, PlanError> {
        let mut db = self.db.begin().await;
        let position = self
            .repo
            .get_plan_position(&db, id)
            .map_err(|_| PlanError::NotFound { id })?;
        let len = db.plans.len();
        let neighbour = match direction {
            MoveDirection::Up if position > 0 => Some(position - 1),
            MoveDirection::Down if position + 1 < len => Some(position + 1),
            _ => None,
        };
        if let Some(neighbour) = neighbour {
            self.repo.swap_plans(&mut db, position, neighbour);
        }
        Ok(self.repo.get_plans(&db))
    }
}

fn validate_price(price: &BigDecimal) -> Result<(), PlanError> {
    if *price < BigDecimal::zero() {
        return Err(PlanError::InvalidPrice);
    }
    Ok(())
}

use snafu::Snafu;

use crate::repository::models::PlanName;

#[derive(Debug, Snafu)]
pub enum PlanError {
    #[snafu(display("plan with id {id} not found"))]
    NotFound { id: i64 },
    #[snafu(display("plan {name} not found"))]
    NameNotFound { name: PlanName },
    #[snafu(display("plan {name} already exists"))]
    NameTaken { name: PlanName },
    #[snafu(display("price must not be negative"))]
    InvalidPrice,
    #[snafu(display("the Free plan is the fallback for every user and cannot be deleted"))]
    DefaultPlanRequired,
}

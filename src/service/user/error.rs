use snafu::Snafu;

use crate::repository::models::PlanName;

#[derive(Debug, Snafu)]
pub enum UserError {
    #[snafu(display("user with id {id} not found"))]
    NotFound { id: i64 },
    #[snafu(display("user with email {email} not found"))]
    EmailNotFound { email: String },
    #[snafu(display("email already exist"))]
    EmailTaken,
    #[snafu(display("plan {name} not found"))]
    PlanNotFound { name: PlanName },
}

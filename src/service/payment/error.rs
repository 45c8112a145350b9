use snafu::Snafu;

use crate::repository::models::{PaymentStatus, PlanName};

#[derive(Debug, Snafu)]
pub enum PaymentError {
    #[snafu(display("payment with id {id} not found"))]
    NotFound { id: i64 },
    #[snafu(display("payment {id} is already {status}"))]
    AlreadyDecided { id: i64, status: PaymentStatus },
    #[snafu(display("a payment can only be approved or rejected"))]
    InvalidTransition,
    #[snafu(display("plan {name} not found"))]
    PlanNotFound { name: PlanName },
    #[snafu(display("user with email {email} not found"))]
    UserNotFound { email: String },
    #[snafu(display("{message}"))]
    InvalidPlan { message: String },
    #[snafu(display("{method} is not an accepted payment method"))]
    InvalidMethod { method: String },
}

use snafu::Snafu;

use crate::repository::models::GenerationType;

#[derive(Debug, Snafu)]
pub enum UsageError {
    #[snafu(display("you have reached your daily limit for {kind} generation"))]
    LimitReached { kind: GenerationType },
    #[snafu(display("no active plan for this account"))]
    NoActivePlan,
    #[snafu(display("user with id {id} not found"))]
    UserNotFound { id: i64 },
}

use snafu::Snafu;

use crate::client::image_api::ImageApiError;
use crate::repository::models::GenerationType;
use crate::service::usage::error::UsageError;

#[derive(Debug, Snafu)]
pub enum GenerationError {
    #[snafu(display("{field} is not a valid base64 image"))]
    InvalidImage { field: String },
    #[snafu(display("you have reached your daily limit for {kind} generation"))]
    LimitReached { kind: GenerationType },
    #[snafu(display("no active plan for this account"))]
    NoActivePlan,
    #[snafu(display("account not found"))]
    AccountNotFound,
    #[snafu(display("failed to generate image, please try again"))]
    Upstream { source: ImageApiError },
}

impl From<UsageError> for GenerationError {
    fn from(e: UsageError) -> Self {
        match e {
            UsageError::LimitReached { kind } => GenerationError::LimitReached { kind },
            UsageError::NoActivePlan => GenerationError::NoActivePlan,
            UsageError::UserNotFound { .. } => GenerationError::AccountNotFound,
        }
    }
}

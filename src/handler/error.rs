use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::service::{
    admin::error::AdminError, auth::error::AuthError, gateway::error::GatewayError,
    generation::error::GenerationError, payment::error::PaymentError, plan::error::PlanError,
    settings::error::SettingsError, usage::error::UsageError, user::error::UserError,
};

use super::response::ApiError;

fn error_response(status_code: StatusCode, message: String) -> axum::response::Response {
    (status_code, Json(ApiError { message: &message })).into_response()
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::EmailAlreadyTaken => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PasswordMismatch => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::WrongPassword => StatusCode::BAD_REQUEST,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Banned => StatusCode::FORBIDDEN,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::EmailNotFound { .. } => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PlanNotFound { .. } => StatusCode::BAD_REQUEST,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for PlanError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NameNotFound { .. } => StatusCode::NOT_FOUND,
            Self::NameTaken { .. } => StatusCode::CONFLICT,
            Self::InvalidPrice => StatusCode::BAD_REQUEST,
            Self::DefaultPlanRequired => StatusCode::UNPROCESSABLE_ENTITY,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for UsageError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::LimitReached { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::NoActivePlan => StatusCode::FORBIDDEN,
            Self::UserNotFound { .. } => StatusCode::NOT_FOUND,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for GenerationError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::InvalidImage { .. } => StatusCode::BAD_REQUEST,
            Self::LimitReached { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::NoActivePlan => StatusCode::FORBIDDEN,
            Self::AccountNotFound => StatusCode::UNAUTHORIZED,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyDecided { .. } => StatusCode::CONFLICT,
            Self::InvalidTransition => StatusCode::BAD_REQUEST,
            Self::PlanNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UserNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidPlan { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidMethod { .. } => StatusCode::BAD_REQUEST,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NameTaken { .. } => StatusCode::CONFLICT,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::EmailTaken => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::LastMainAdmin => StatusCode::CONFLICT,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status_code, self.to_string())
    }
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::InvalidOpacity => StatusCode::BAD_REQUEST,
            Self::GlowPlanNotFound => StatusCode::BAD_REQUEST,
        };
        error_response(status_code, self.to_string())
    }
}

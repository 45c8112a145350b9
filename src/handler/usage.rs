use axum::{extract::State, response::IntoResponse, Extension};

use crate::{repository::models::User, SharedState};

use super::response;

#[utoipa::path(
        get,
        path = "/api/v1/usage",
        responses(
            (status = OK, description = "today's counters and what is left", body = UsageStatus),
            (status = UNAUTHORIZED, description = "invalid token"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn usage_status(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.usage_service.get_usage_status(user.id).await;
    match res {
        Ok(res) => response::success(res, "").into_response(),
        Err(err) => err.into_response(),
    }
}

use axum::{extract::State, response::IntoResponse, Extension};

use crate::{repository::models::User, SharedState};

use super::response;

#[utoipa::path(
        get,
        path = "/api/v1/plans",
        responses(
            (status = OK, description = "plans in catalog order", body = [Plan]),
        )
)]
pub async fn plans_list(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.plan_service.get_plans_list().await;
    response::success(res, "").into_response()
}

#[utoipa::path(
        get,
        path = "/api/v1/plans/options",
        responses(
            (status = OK, description = "plans with the action the user can take", body = [PlanOption]),
            (status = UNAUTHORIZED, description = "invalid token"),
        ),
        security(
            ("api_jwt_token" = [])
        )
)]
pub async fn plan_options(
    State(state): State<SharedState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    let state = state.read().await;
    let res = state.plan_service.get_plan_options(&user).await;
    response::success(res, "").into_response()
}
